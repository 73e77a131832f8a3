use serde::Deserialize;
use std::collections::HashMap;

/// SPARQL 1.1 JSON results envelope, as served by Wikidata with
/// `Accept: application/sparql-results+json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: Head,
    pub results: Results,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Results {
    pub bindings: Vec<Binding>,
}

/// One result row: variable name to typed value.
pub type Binding = HashMap<String, BindingValue>;

#[derive(Debug, Clone, Deserialize)]
pub struct BindingValue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
    #[serde(rename = "xml:lang")]
    pub lang: Option<String>,
    pub datatype: Option<String>,
}

pub trait BindingExt {
    fn str_value(&self, var: &str) -> Option<&str>;

    fn u64_value(&self, var: &str) -> Option<u64>;
}

impl BindingExt for Binding {
    fn str_value(&self, var: &str) -> Option<&str> {
        self.get(var).map(|entry| entry.value.as_str())
    }

    fn u64_value(&self, var: &str) -> Option<u64> {
        self.str_value(var).and_then(|raw| raw.parse().ok())
    }
}
