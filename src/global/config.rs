use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

const DEFAULT_LOCALE: &str = "en-US";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub static ENV_CONFIG: Lazy<EnvironmentStruct> = Lazy::new(EnvironmentStruct::load_from_env);

/// Process configuration, read once from the environment. Every field has
/// a default so the binary runs without any setup; tests override the
/// endpoint per-client instead of through here.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentStruct {
    pub sparql_endpoint: String,
    pub default_locale: String,
    pub request_timeout_secs: u64,
}

impl EnvironmentStruct {
    fn load_from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            sparql_endpoint: std::env::var("SPARQL_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_SPARQL_ENDPOINT.to_string()),
            default_locale: std::env::var("GEOQUIZ_LOCALE")
                .unwrap_or_else(|_| DEFAULT_LOCALE.to_string()),
            request_timeout_secs: std::env::var("SPARQL_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
