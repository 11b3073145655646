// src/benchmark/mod.rs

pub mod harness;
pub mod results;
pub mod system_info;
pub mod timing;

pub use harness::Benchmark;
pub use results::BenchmarkResult;
pub use system_info::SystemInfo;
pub use timing::TimingWindow;
