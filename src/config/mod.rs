// src/config/mod.rs

pub mod bench_config;
pub mod settings;

// Re-export main types for convenience
pub use bench_config::{parse_sizes, BenchmarkConfig};
pub use settings::{OutputConfig, Settings};
