// src/benchmark/results.rs

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::path::Path;
use crate::benchmark::system_info::SystemInfo;
use crate::core::{DType, Result};
use crate::engine::EngineKind;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub script: String,
    pub engine: EngineKind,
    pub dtype: DType,
    pub sizes: Vec<usize>,
    pub elapsed_secs: f64,
    pub seed: u64,
    /// Short description of what the driver computed
    pub summary: String,
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
}

/// Flat form of a result for CSV; nested system info does not fit a row.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    timestamp: String,
    script: &'a str,
    engine: &'a str,
    dtype: &'a str,
    size: String,
    elapsed_secs: f64,
    seed: u64,
    summary: &'a str,
    hostname: &'a str,
    cpu_threads: usize,
    git_commit: String,
}

impl BenchmarkResult {
    pub fn size_label(&self) -> String {
        self.sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("*")
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Append one row, writing the header first if the file is new or empty.
    pub fn append_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);

        writer.serialize(CsvRow {
            timestamp: self.timestamp.to_rfc3339(),
            script: &self.script,
            engine: self.engine.name(),
            dtype: self.dtype.name(),
            size: self.size_label(),
            elapsed_secs: self.elapsed_secs,
            seed: self.seed,
            summary: &self.summary,
            hostname: &self.system_info.hostname,
            cpu_threads: self.system_info.cpu_threads,
            git_commit: self.system_info.short_commit(),
        })?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchmarkResult {
        BenchmarkResult {
            script: "mc".to_string(),
            engine: EngineKind::Parallel,
            dtype: DType::Float32,
            sizes: vec![1000, 10],
            elapsed_secs: 0.25,
            seed: 17,
            summary: "pi ~ 3.141".to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo {
                hostname: "bench-host".to_string(),
                os: "Linux".to_string(),
                cpu_model: "cpu".to_string(),
                cpu_cores: 4,
                cpu_threads: 8,
                total_memory_mb: 1024,
                git_commit: "unknown".to_string(),
                git_dirty: false,
            },
        }
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let result = sample();
        result.save_to_file(&path).unwrap();

        let loaded = BenchmarkResult::load_from_file(&path).unwrap();
        assert_eq!(loaded.script, "mc");
        assert_eq!(loaded.engine, EngineKind::Parallel);
        assert_eq!(loaded.sizes, vec![1000, 10]);
        assert_eq!(loaded.system_info.hostname, "bench-host");
    }

    #[test]
    fn test_csv_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        let result = sample();
        result.append_csv(&path).unwrap();
        result.append_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,script,engine"));
        assert!(lines[1].contains("mc,parallel,float32,1000*10"));
    }
}
