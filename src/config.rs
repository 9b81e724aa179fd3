use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_COUNTRIES_URL;
use crate::logic::filters::{FilterCriteria, DEFAULT_REFERENCE_COUNTRY, DEFAULT_TARGET_REGION};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_reference_country")]
    pub reference_country: String,
    #[serde(default = "default_target_region")]
    pub target_region: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Transport default applies when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_COUNTRIES_URL.to_string()
}

fn default_reference_country() -> String {
    DEFAULT_REFERENCE_COUNTRY.to_string()
}

fn default_target_region() -> String {
    DEFAULT_TARGET_REGION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            reference_country: default_reference_country(),
            target_region: default_target_region(),
            vim_mode: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Invalid config file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&yaml)
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            reference_country: self.reference_country.clone(),
            target_region: self.target_region.clone(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists; the app then runs on
/// defaults. A path given on the command line must exist.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/countryviz/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("countryviz").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("vim_mode: true\ntarget_region: Europe\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.target_region, "Europe");
        assert_eq!(config.reference_country, "Lithuania");
        assert_eq!(config.api_url, DEFAULT_COUNTRIES_URL);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
api_url: "http://localhost:8080/all"
reference_country: "Fiji"
target_region: "Americas"
vim_mode: false
request_timeout_secs: 10
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/all");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(
            config.criteria(),
            FilterCriteria {
                reference_country: "Fiji".to_string(),
                target_region: "Americas".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("vim_mode: [not, a, bool]").is_err());
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        let err = find_config_path(Some("/definitely/not/here/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_from_file_reads_yaml() {
        let path = std::env::temp_dir().join(format!("countryviz-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "reference_country: Peru\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.reference_country, "Peru");

        let found = find_config_path(path.to_str()).unwrap();
        assert_eq!(found, Some(path.clone()));

        std::fs::remove_file(&path).unwrap();
    }
}
