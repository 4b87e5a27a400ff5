pub mod deck;
mod schema;

pub use deck::{load_deck, validate_deck, CardEntry, DeckFile};
pub use schema::{Config, DisplayConfig, DEFAULT_SCORE_DECIMALS, DEFAULT_VALUE_DECIMALS};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::Attribute;

/// Largest number of decimals the formatter will print
pub const MAX_DECIMALS: usize = 10;

/// Get the config directory path (~/.config/city-trumps/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("city-trumps"))
}

/// Get the default config file path (~/.config/city-trumps/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(decimals) = config.display.value_decimals {
        if decimals > MAX_DECIMALS {
            errors.push(format!(
                "display.value_decimals: must be at most {}, got {}",
                MAX_DECIMALS, decimals
            ));
        }
    }
    if let Some(decimals) = config.display.score_decimals {
        if decimals > MAX_DECIMALS {
            errors.push(format!(
                "display.score_decimals: must be at most {}, got {}",
                MAX_DECIMALS, decimals
            ));
        }
    }

    if let Some(ref names) = config.default_attributes {
        if names.len() != 2 {
            errors.push(format!(
                "default_attributes: expected exactly 2 attributes, found {}",
                names.len()
            ));
        }
        let mut parsed = Vec::new();
        for (i, name) in names.iter().enumerate() {
            match name.parse::<Attribute>() {
                Ok(attr) => parsed.push(attr),
                Err(e) => errors.push(format!("default_attributes[{}]: {}", i, e)),
            }
        }
        if let [first, second] = parsed.as_slice() {
            if first == second {
                errors.push(format!(
                    "default_attributes: '{}' listed twice; pick two different attributes",
                    first.key()
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Config {
    /// Configured default attribute pair, if present and valid
    pub fn default_pair(&self) -> Option<(Attribute, Attribute)> {
        match self.default_attributes.as_deref() {
            Some([first, second]) => {
                let first: Attribute = first.parse().ok()?;
                let second: Attribute = second.parse().ok()?;
                (first != second).then_some((first, second))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_defaults(names: &[&str]) -> Config {
        Config {
            default_attributes: Some(names.iter().map(|s| s.to_string()).collect()),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = with_defaults(&["population", "density"]);
        assert!(validate_config(&config).is_ok());
        assert_eq!(
            config.default_pair(),
            Some((Attribute::Population, Attribute::PopulationDensity))
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.default_pair(), None);
    }

    #[test]
    fn test_duplicate_default_attributes() {
        let config = with_defaults(&["area", "2"]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("listed twice"));
        assert_eq!(config.default_pair(), None);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = with_defaults(&["altitude", "gdp", "area"]);
        config.display.value_decimals = Some(11);
        config.display.score_decimals = Some(20);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("display.value_decimals"));
        assert!(errors[1].contains("display.score_decimals"));
        assert!(errors[2].contains("expected exactly 2"));
        assert!(errors[3].contains("default_attributes[0]"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = std::env::temp_dir().join("city_trumps_missing_config.yaml");
        let _ = std::fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "display:\n  score_decimals: 2\n").unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.display.score_decimals(), 2);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "display: [oops\n").unwrap();
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
