/// Sovereign states carrying an ISO 3166-1 alpha-2 code, with English
/// labels and whatever optional facts Wikidata has on record. Multi-valued
/// properties (a country on two continents) duplicate rows; the mapper
/// de-duplicates by ISO code.
pub const COUNTRIES_QUERY: &str = r#"
SELECT ?iso ?countryLabel ?capitalLabel ?continentLabel ?population ?coordinate
WHERE {
  ?country wdt:P31 wd:Q3624078 .
  ?country wdt:P297 ?iso .
  OPTIONAL { ?country wdt:P36 ?capital . }
  OPTIONAL { ?country wdt:P30 ?continent . }
  OPTIONAL { ?country wdt:P1082 ?population . }
  OPTIONAL { ?country wdt:P625 ?coordinate . }
  SERVICE wikibase:label { bd:serviceParam wikibase:language "en". }
}
"#;
