use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which localized dataset perspective to serve. Disputed-territory
/// labeling differs between these; `US` is the baseline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Worldview {
    In,
    Jp,
    Cn,
    #[default]
    Us,
}

impl Worldview {
    /// Resolves the worldview from an optional ISO 3166-1 alpha-2 override
    /// and a BCP-47 locale. The override wins when present; otherwise the
    /// locale's region subtag (text after the first `-`) decides. Candidates
    /// are uppercased before matching, and anything outside the supported
    /// set, including region-less locales, falls back to `US`.
    pub fn resolve(iso_3166_1: Option<&str>, locale: &str) -> Self {
        iso_3166_1
            .or_else(|| locale.split_once('-').map(|(_, region)| region))
            .and_then(|code| code.to_uppercase().parse().ok())
            .unwrap_or_default()
    }
}
