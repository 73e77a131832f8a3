use anyhow::{anyhow, Result};

pub trait OptionExt<T> {
    fn or_err<S: Into<String>>(self, msg: S) -> Result<T>;

    fn or_err_with<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_err<S: Into<String>>(self, msg: S) -> Result<T> {
        self.ok_or_else(|| anyhow!(msg.into()))
    }

    fn or_err_with<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.ok_or_else(|| anyhow!(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_err_on_none() {
        let missing: Option<u8> = None;
        let err = missing.or_err("no capital on record").unwrap_err();
        assert_eq!(err.to_string(), "no capital on record");
    }

    #[test]
    fn test_or_err_passes_through_some() {
        assert_eq!(Some(7).or_err("unused").unwrap(), 7);
    }

    #[test]
    fn test_or_err_with_is_lazy() {
        let mut built = false;
        let value = Some("FR").or_err_with(|| {
            built = true;
            "never rendered"
        });
        assert_eq!(value.unwrap(), "FR");
        assert!(!built);
    }
}
