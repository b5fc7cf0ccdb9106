use serde::{Deserialize, Serialize};

/// One row of the emissions dataset. Field order matches the CSV column
/// contract, so serializing a record reproduces the expected header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(rename = "Country")]
    pub country: String,
    /// ISO 3166-1 alpha-3 code, or empty when unresolved
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Carbon_dioxide_emissions_from_transport")]
    pub emissions: f64,
}

impl EmissionRecord {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        year: i32,
        emissions: f64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            year,
            emissions,
        }
    }
}

/// Country-name-to-alpha-3 lookup used by the normalizer. Implementations
/// must treat every failure (unknown name, ambiguous name, internal error)
/// as `None`; resolution never aborts the pipeline.
pub trait CountryResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}
