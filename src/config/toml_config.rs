use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Export profile loaded from a TOML file, for exports that are run
/// repeatedly against the same list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the value of the environment variable, so
    // profiles can reference the API key without storing it.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        if let Some(filename) = &self.load.filename {
            validation::validate_non_empty_string("load.filename", filename)?;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_filename(&self) -> Option<&str> {
        self.load.filename.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_profile() {
        let config = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "https://registry.example.com/api/lists/17/items/"

            [load]
            output_path = "./output"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.api_endpoint(),
            "https://registry.example.com/api/lists/17/items/"
        );
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_profile() {
        let config = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "https://registry.example.com/api/lists/17/items/"
            api_key = "abc123"
            timeout_seconds = 60

            [load]
            output_path = "./exports"
            filename = "list_17_matches.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.timeout_seconds(), 60);
        assert_eq!(config.output_filename(), Some("list_17_matches.csv"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OAR_EXPORT_TEST_KEY", "from-env");

        let config = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "https://registry.example.com/api/lists/17/items/"
            api_key = "${OAR_EXPORT_TEST_KEY}"

            [load]
            output_path = "./output"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("from-env"));
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "https://registry.example.com/api/lists/17/items/"
            api_key = "${OAR_EXPORT_UNSET_VARIABLE}"

            [load]
            output_path = "./output"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("${OAR_EXPORT_UNSET_VARIABLE}"));
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "ftp://registry.example.com/items"

            [load]
            output_path = "./output"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_table_is_a_config_error() {
        let result = TomlConfig::from_toml_str(
            r#"
            [source]
            endpoint = "https://registry.example.com/api/lists/17/items/"
            "#,
        );

        assert!(matches!(result, Err(EtlError::ConfigError { .. })));
    }
}
