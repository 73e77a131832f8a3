use crate::sdk::sparql::error::{QueryError, QueryResult};
use crate::sdk::sparql::response::{Binding, SparqlResponse};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SparqlClient {
    client: Client,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("geoquiz/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs a SELECT query and unwraps the result envelope down to its
    /// bindings. Non-2xx statuses and connection failures surface as
    /// `QueryError::Transport`, malformed bodies as `QueryError::Parse`.
    pub async fn select(&self, sparql: &str) -> QueryResult<Vec<Binding>> {
        debug!("running {} char query against {}", sparql.len(), self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", sparql)])
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SparqlResponse = serde_json::from_str(&body)?;
        Ok(parsed.results.bindings)
    }
}

/// Narrow seam over the client so callers can be fed from a stub in tests.
#[async_trait]
pub trait SparqlService: Send + Sync {
    async fn select(&self, sparql: &str) -> QueryResult<Vec<Binding>>;
}

#[async_trait]
impl SparqlService for SparqlClient {
    async fn select(&self, sparql: &str) -> QueryResult<Vec<Binding>> {
        SparqlClient::select(self, sparql).await
    }
}
