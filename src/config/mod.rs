pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "oar-export")]
#[command(about = "Export the items of an uploaded facility list as a CSV match table")]
pub struct CliConfig {
    /// Export profile file; overrides the other flags when given
    #[arg(long)]
    pub config: Option<String>,

    /// URL serving the list items as JSON
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// API key, sent as a `key` query parameter
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output filename; defaults to a date-stamped name
    #[arg(long)]
    pub output_filename: Option<String>,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let endpoint = self
            .api_endpoint
            .as_deref()
            .ok_or_else(|| EtlError::MissingConfigError {
                field: "api_endpoint".to_string(),
            })?;
        validation::validate_url("api_endpoint", endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(filename) = &self.output_filename {
            validation::validate_non_empty_string("output_filename", filename)?;
        }
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or("")
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> Option<&str> {
        self.output_filename.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            config: None,
            api_endpoint: Some("https://registry.example.com/api/lists/17/items/".to_string()),
            api_key: None,
            output_path: "./output".to_string(),
            output_filename: None,
            timeout_seconds: 30,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_endpoint_fails() {
        let mut config = base_config();
        config.api_endpoint = None;
        assert!(matches!(
            config.validate(),
            Err(EtlError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_blank_output_filename_fails() {
        let mut config = base_config();
        config.output_filename = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_fails() {
        let mut config = base_config();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
