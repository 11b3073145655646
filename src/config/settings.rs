// src/config/settings.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use crate::core::DType;
use crate::engine::EngineKind;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "arraybench.toml";

/// Prefix for environment overrides, e.g. `ARRAYBENCH_ENGINE=parallel`.
pub const ENV_PREFIX: &str = "ARRAYBENCH";

/// Process-level settings shared by every benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Engine used when the command line does not pick one
    pub engine: EngineKind,

    /// Element type used when the command line does not pick one
    pub dtype: DType,

    /// Worker threads for the parallel engine (None = one per logical CPU)
    #[serde(default)]
    pub threads: Option<usize>,

    /// Seed for the random source (None = fresh seed every run)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Where results are written besides stdout
    #[serde(default)]
    pub output: OutputConfig,
}

/// Result files. Both are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-printed JSON document per run
    #[serde(default)]
    pub json: Option<String>,

    /// CSV file that gets one row appended per run
    #[serde(default)]
    pub csv: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            engine: EngineKind::Reference,
            dtype: DType::Float64,
            threads: None,
            seed: None,
            log_level: "info".to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl Settings {
    /// Load with precedence: environment → config file → defaults.
    ///
    /// An explicit `path` must exist; otherwise `arraybench.toml` is read if
    /// present in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("engine", "reference")?
            .set_default("dtype", "float64")?
            .set_default("log_level", "info")
    }
}
