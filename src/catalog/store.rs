use crate::catalog::queries::COUNTRIES_QUERY;
use crate::catalog::{mapper, Country};
use crate::lined_err;
use crate::sdk::sparql::SparqlService;
use crate::util::alias::AResult;
use moka::future::{Cache, CacheBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const CATALOG_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// TTL cache over the country query. The list changes on the timescale of
/// geopolitics, so one load per session is plenty.
pub struct CountryCatalog {
    service: Arc<dyn SparqlService>,
    cache: Cache<(), Arc<Vec<Country>>>,
}

impl CountryCatalog {
    pub fn new(service: Arc<dyn SparqlService>) -> Self {
        Self::with_ttl(service, CATALOG_TTL)
    }

    pub fn with_ttl(service: Arc<dyn SparqlService>, ttl: Duration) -> Self {
        Self {
            service,
            cache: CacheBuilder::new(1).time_to_live(ttl).build(),
        }
    }

    /// Loads the country list, hitting the endpoint at most once per TTL
    /// window. Concurrent callers share a single in-flight load. A failed
    /// load is not cached, so the next caller retries.
    pub async fn countries(&self) -> AResult<Arc<Vec<Country>>> {
        self.cache
            .try_get_with((), self.load())
            .await
            .map_err(|e: Arc<anyhow::Error>| lined_err!("country catalog load failed: {}", e))
    }

    async fn load(&self) -> AResult<Arc<Vec<Country>>> {
        let bindings = self.service.select(COUNTRIES_QUERY).await?;
        let countries = mapper::countries_from_bindings(&bindings);
        if countries.is_empty() {
            return Err(lined_err!(
                "no usable country rows in {} bindings",
                bindings.len()
            ));
        }
        info!(
            "country catalog loaded: {} countries from {} rows",
            countries.len(),
            bindings.len()
        );
        Ok(Arc::new(countries))
    }
}
