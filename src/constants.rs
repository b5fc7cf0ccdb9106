use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

// Column names of the emissions dataset. The emissions column name is part
// of the output contract: the visualization front end selects it verbatim.
pub const COUNTRY_COLUMN: &str = "Country";
pub const CODE_COLUMN: &str = "Code";
pub const YEAR_COLUMN: &str = "Year";
pub const EMISSIONS_COLUMN: &str = "Carbon_dioxide_emissions_from_transport";

// Default file locations, matching the dataset layout this tool was built for
pub const DEFAULT_RAW_PATH: &str = "archive/co2-emissions-transport.csv";
pub const DEFAULT_CLEANED_PATH: &str = "source.csv";
pub const DEFAULT_AUGMENTED_PATH: &str = "custom_data.csv";

/// Years the augmenter extends the dataset with when none are configured.
pub const DEFAULT_YEARS: [i32; 4] = [2021, 2022, 2023, 2024];

/// Exclusive upper bound for synthetic emission values.
pub const DEFAULT_MAX_EMISSION: f64 = 1_000_000_000.0;

/// Display-name corrections for countries the ISO registry fails to resolve
/// or resolves under a different official name. Override hits win over the
/// registry unconditionally.
pub static COUNTRY_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Bolivia", "BOL"),
        ("British Virgin Islands", "VGB"),
        ("Brunei", "BRN"),
        ("Cape Verde", "CPV"),
        ("Cote d'Ivoire", "CIV"),
        ("Democratic Republic of Congo", "COD"),
        ("East Timor", "TLS"),
        ("Iran", "IRN"),
        ("Laos", "LAO"),
        ("Micronesia (country)", "FSM"),
        ("Moldova", "MDA"),
        ("Netherlands Antilles", "ANT"),
        ("North Korea", "PRK"),
        ("Palestine", "PSE"),
        ("Reunion", "REU"),
        ("Russia", "RUS"),
        ("Saint Barthelemy", "BLM"),
        ("Saint Helena", "SHN"),
        ("South Korea", "KOR"),
        ("Syria", "SYN"),
        ("Taiwan", "TWN"),
        ("Tanzania", "TZA"),
        ("Turkey", "TUR"),
        ("United States Virgin Islands", "VIR"),
        ("Venezuela", "VEN"),
        ("Vietnam", "VNM"),
    ])
});

/// Entity names that are aggregates rather than countries (continents,
/// income tiers, dissolved states, "World"). Rows carrying these names are
/// dropped by the normalizer.
pub static EXCLUDED_ENTITIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Africa",
        "Asia",
        "Czechoslovakia",
        "East Germany",
        "Europe",
        "European Union (27)",
        "High-income countries",
        "Low-income countries",
        "Lower-middle-income countries",
        "North America",
        "North Yemen",
        "Oceania",
        "Serbia and Montenegro",
        "South America",
        "South Yemen",
        "USSR",
        "Upper-middle-income countries",
        "West Germany",
        "World",
        "Yugoslavia",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(COUNTRY_OVERRIDES.len(), 26);
        assert_eq!(EXCLUDED_ENTITIES.len(), 20);
    }

    #[test]
    fn test_no_override_is_excluded() {
        for name in COUNTRY_OVERRIDES.keys() {
            assert!(
                !EXCLUDED_ENTITIES.contains(name),
                "{} is both overridden and excluded",
                name
            );
        }
    }
}
