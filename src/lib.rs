pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{etl::EtlEngine, pipeline::ExportPipeline};
pub use utils::error::{EtlError, Result};
