use crate::util::alias::IsoCountryCode;
use serde::{Deserialize, Serialize};

/// One country as served by the query endpoint. Optional fields are
/// genuinely absent for some countries (Nauru has no official capital).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub iso: IsoCountryCode,
    pub label: String,
    pub capital: Option<String>,
    pub continent: Option<String>,
    pub population: Option<u64>,
    /// WKT point literal, passed through untouched.
    pub coordinate: Option<String>,
}
