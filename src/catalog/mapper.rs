use crate::catalog::Country;
use crate::sdk::sparql::{Binding, BindingExt};
use itertools::Itertools;
use tracing::warn;

/// Maps one result row to a country. Rows missing the required ISO code
/// or label are dropped.
pub fn country_from_binding(row: &Binding) -> Option<Country> {
    Some(Country {
        iso: row.str_value("iso")?.to_string(),
        label: row.str_value("countryLabel")?.to_string(),
        capital: row.str_value("capitalLabel").map(str::to_string),
        continent: row.str_value("continentLabel").map(str::to_string),
        population: row.u64_value("population"),
        coordinate: row.str_value("coordinate").map(str::to_string),
    })
}

/// Batch form: drops incomplete rows and keeps the first row per ISO code.
/// Multi-valued properties (two continents, two capitals) duplicate rows
/// in the raw result, one per value combination.
pub fn countries_from_bindings(rows: &[Binding]) -> Vec<Country> {
    let mapped: Vec<Country> = rows.iter().filter_map(country_from_binding).collect();
    let dropped = rows.len() - mapped.len();
    if dropped > 0 {
        warn!("dropped {} incomplete country rows", dropped);
    }

    mapped
        .into_iter()
        .unique_by(|country| country.iso.clone())
        .collect()
}
