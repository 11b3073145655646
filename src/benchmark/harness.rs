// src/benchmark/harness.rs

use chrono::Utc;
use log::{debug, info};
use std::time::Duration;
use crate::benchmark::results::BenchmarkResult;
use crate::benchmark::system_info::SystemInfo;
use crate::benchmark::timing::TimingWindow;
use crate::config::BenchmarkConfig;
use crate::core::{Array, Error, Result, StaticRandom};
use crate::engine::{create_engine, ExecutionEngine};

/// State of one benchmark run: its configuration, the engine it selected, a
/// random source and the timing window.
///
/// Everything is created in `new` and dropped with the value, so two runs
/// never share state.
pub struct Benchmark {
    config: BenchmarkConfig,
    engine: Box<dyn ExecutionEngine>,
    rng: StaticRandom,
    timer: TimingWindow,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        let engine = create_engine(config.engine(), config.threads())?;
        let rng = StaticRandom::new(config.seed());
        debug!("{}: random seed {}", config.script(), rng.seed());

        Ok(Benchmark {
            config,
            engine,
            rng,
            timer: TimingWindow::new(),
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn engine(&self) -> &dyn ExecutionEngine {
        self.engine.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Random array of the configured element type on the selected engine.
    pub fn random(&mut self, shape: &[usize]) -> Result<Array> {
        self.engine.random(shape, self.config.dtype(), &mut self.rng)
    }

    pub fn start(&mut self) {
        self.engine.flush();
        self.timer.start();
    }

    pub fn stop(&mut self) -> Result<Duration> {
        self.engine.flush();
        let elapsed = self.timer.stop()?;
        debug!("{}: measured {:?}", self.config.script(), elapsed);
        Ok(elapsed)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.timer.elapsed()
    }

    /// The one-line report printed at the end of a run.
    pub fn report_line(&self) -> Result<String> {
        let elapsed = self.elapsed().ok_or(Error::TimerNotStarted)?;
        Ok(format!(
            "{} - engine: {}, dtype: {}, size: {}, elapsed-time: {:.6}",
            self.config.script(),
            self.config.engine(),
            self.config.dtype(),
            self.config.size_label(),
            elapsed.as_secs_f64(),
        ))
    }

    pub fn pprint(&self) -> Result<()> {
        println!("{}", self.report_line()?);
        Ok(())
    }

    pub fn result(&self, summary: &str) -> Result<BenchmarkResult> {
        let elapsed = self.elapsed().ok_or(Error::TimerNotStarted)?;
        Ok(BenchmarkResult {
            script: self.config.script().to_string(),
            engine: self.config.engine(),
            dtype: self.config.dtype(),
            sizes: self.config.sizes().to_vec(),
            elapsed_secs: elapsed.as_secs_f64(),
            seed: self.rng.seed(),
            summary: summary.to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
        })
    }

    /// Write the result to whichever output files the configuration names.
    pub fn save(&self, summary: &str) -> Result<Option<BenchmarkResult>> {
        if self.config.json_path().is_none() && self.config.csv_path().is_none() {
            return Ok(None);
        }
        let result = self.result(summary)?;
        if let Some(path) = self.config.json_path() {
            result.save_to_file(path)?;
            info!("Results saved to: {}", path.display());
        }
        if let Some(path) = self.config.csv_path() {
            result.append_csv(path)?;
            info!("Results appended to: {}", path.display());
        }
        Ok(Some(result))
    }
}
