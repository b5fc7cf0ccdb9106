use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PrepError, Result};

/// Optional TOML configuration. Every field has a built-in default;
/// explicit CLI flags override anything set here.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub augment: AugmentConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathsConfig {
    pub raw: Option<String>,
    pub cleaned: Option<String>,
    pub augmented: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AugmentConfig {
    pub years: Option<Vec<i32>>,
    pub max_emission: Option<f64>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[augment]\nyears = [2025, 2026]\nseed = 7\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.augment.years, Some(vec![2025, 2026]));
        assert_eq!(config.augment.seed, Some(7));
        assert!(config.paths.raw.is_none());
        assert!(config.augment.max_emission.is_none());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }
}
