use crate::global::config::ENV_CONFIG;
use crate::sdk::sparql::SparqlClient;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

static CLIENT_HOLDER: Lazy<RwLock<Arc<SparqlClient>>> = Lazy::new(|| {
    RwLock::new(Arc::new(SparqlClient::with_timeout(
        ENV_CONFIG.sparql_endpoint.clone(),
        Duration::from_secs(ENV_CONFIG.request_timeout_secs),
    )))
});

pub fn sparql_client() -> Arc<SparqlClient> {
    CLIENT_HOLDER.read().clone()
}

#[cfg(test)]
pub fn _set_test_client(endpoint: &str) {
    *CLIENT_HOLDER.write() = Arc::new(SparqlClient::new(endpoint.to_string()));
}
