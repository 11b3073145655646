// src/config/bench_config.rs

use log::debug;
use std::path::PathBuf;
use crate::config::settings::Settings;
use crate::core::{DType, Error, Result};
use crate::engine::EngineKind;

/// Parse a `N*I*...` size specification.
pub fn parse_sizes(spec: &str) -> Result<Vec<usize>> {
    let sizes = spec
        .split('*')
        .map(|part| {
            let part = part.trim().replace('_', "");
            match part.parse::<usize>() {
                Ok(0) => Err(Error::InvalidSize(format!("'{}': sizes must be positive", spec))),
                Ok(n) => Ok(n),
                Err(_) => Err(Error::InvalidSize(format!("'{}': '{}' is not a number", spec, part))),
            }
        })
        .collect::<Result<Vec<usize>>>()?;
    Ok(sizes)
}

/// Everything one benchmark run needs to know.
///
/// Fixed for the lifetime of the run: fields are private and there are no
/// setters; the `with_*` methods consume the value while it is being built.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    script: String,
    sizes: Vec<usize>,
    dtype: DType,
    engine: EngineKind,
    seed: Option<u64>,
    threads: Option<usize>,
    json_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
}

impl BenchmarkConfig {
    pub fn new(script: &str, sizes: Vec<usize>, dtype: DType, engine: EngineKind) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::InvalidSize(format!("{}: no sizes given", script)));
        }
        if sizes.contains(&0) {
            return Err(Error::InvalidSize(format!("{}: sizes must be positive", script)));
        }
        Ok(BenchmarkConfig {
            script: script.to_string(),
            sizes,
            dtype,
            engine,
            seed: None,
            threads: None,
            json_path: None,
            csv_path: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_outputs(mut self, json: Option<PathBuf>, csv: Option<PathBuf>) -> Self {
        self.json_path = json;
        self.csv_path = csv;
        self
    }

    /// Build from command-line options layered over `settings`.
    ///
    /// Recognised options: `--size=N*I`, `--dtype=`, `--bohrium=`, `--engine=`,
    /// `--seed=`, `--threads=`, `--json=`, `--csv=`. `--config=` is accepted
    /// and ignored here since settings are loaded before this point.
    pub fn from_args(
        script: &str,
        args: &[String],
        settings: &Settings,
        default_sizes: &[usize],
    ) -> Result<Self> {
        let mut sizes = None;
        let mut dtype = settings.dtype;
        let mut engine = settings.engine;
        let mut seed = settings.seed;
        let mut threads = settings.threads;
        let mut json = settings.output.json.clone().map(PathBuf::from);
        let mut csv = settings.output.csv.clone().map(PathBuf::from);

        for arg in args {
            let (key, value) = arg
                .strip_prefix("--")
                .and_then(|rest| rest.split_once('='))
                .ok_or_else(|| Error::InvalidArgument(format!("expected --key=value, got '{}'", arg)))?;

            match key {
                "size" => sizes = Some(parse_sizes(value)?),
                "dtype" => dtype = value.parse()?,
                "bohrium" | "engine" => engine = value.parse()?,
                "seed" => seed = Some(parse_number(key, value)?),
                "threads" => threads = Some(parse_number(key, value)?),
                "json" => json = Some(PathBuf::from(value)),
                "csv" => csv = Some(PathBuf::from(value)),
                "config" => {}
                _ => return Err(Error::InvalidArgument(format!("unknown option '--{}'", key))),
            }
        }

        let sizes = sizes.unwrap_or_else(|| default_sizes.to_vec());
        debug!("{}: sizes {:?}, dtype {}, engine {}", script, sizes, dtype, engine);

        Ok(BenchmarkConfig::new(script, sizes, dtype, engine)?
            .with_seed(seed)
            .with_threads(threads)
            .with_outputs(json, csv))
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub fn json_path(&self) -> Option<&PathBuf> {
        self.json_path.as_ref()
    }

    pub fn csv_path(&self) -> Option<&PathBuf> {
        self.csv_path.as_ref()
    }

    /// Sizes in the same `N*I` form they are given on the command line.
    pub fn size_label(&self) -> String {
        self.sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("*")
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("--{} expects a number, got '{}'", key, value)))
}
