#[macro_export]
macro_rules! lined_err {
    ($msg:expr) => {{
        let location = format!("{}:{}:{}", file!(), line!(), column!());
        anyhow::anyhow!("{} (at {})", $msg, location)
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        let location = format!("{}:{}:{}", file!(), line!(), column!());
        anyhow::anyhow!("{} (at {})", format!($fmt, $($arg)*), location)
    }};
}

#[macro_export]
macro_rules! lined_bail {
    ($($arg:tt)*) => {
        return Err($crate::lined_err!($($arg)*))
    };
}
