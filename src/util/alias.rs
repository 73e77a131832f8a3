use anyhow::{Error, Result};

// type alias
pub type IsoCountryCode = String;
pub type AResult<T, E = Error> = Result<T, E>;
