use tracing::debug;

use crate::constants::COUNTRY_OVERRIDES;
use crate::types::CountryResolver;

/// Resolver backed by the compiled-in ISO 3166 registry. Matches the
/// official English short name exactly (case-sensitive), the same contract
/// the override table corrects for.
pub struct IsoResolver;

impl CountryResolver for IsoResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        rust_iso3166::ALL
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.alpha3.to_string())
    }
}

/// Resolves a country display name to an alpha-3 code: override table
/// first, registry second. Unresolvable names yield `None`; callers decide
/// whether that is tolerable.
pub fn resolve_country_code(name: &str, resolver: &dyn CountryResolver) -> Option<String> {
    if let Some(code) = COUNTRY_OVERRIDES.get(name) {
        return Some((*code).to_string());
    }
    let resolved = resolver.resolve(name);
    if resolved.is_none() {
        debug!(country = %name, "registry lookup missed");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolver that answers every query with the same code, to prove the
    /// override table takes precedence.
    struct FixedResolver(&'static str);

    impl CountryResolver for FixedResolver {
        fn resolve(&self, _name: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct NeverResolver;

    impl CountryResolver for NeverResolver {
        fn resolve(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_override_beats_resolver() {
        let code = resolve_country_code("Bolivia", &FixedResolver("XXX"));
        assert_eq!(code.as_deref(), Some("BOL"));
    }

    #[test]
    fn test_override_hit_without_resolver_support() {
        let code = resolve_country_code("Micronesia (country)", &NeverResolver);
        assert_eq!(code.as_deref(), Some("FSM"));
    }

    #[test]
    fn test_registry_fallback() {
        let code = resolve_country_code("Brazil", &IsoResolver);
        assert_eq!(code.as_deref(), Some("BRA"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(resolve_country_code("Atlantis", &IsoResolver), None);
        assert_eq!(resolve_country_code("World", &NeverResolver), None);
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        assert_eq!(resolve_country_code("bolivia", &NeverResolver), None);
    }
}
