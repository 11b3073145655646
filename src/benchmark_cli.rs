// src/benchmark_cli.rs
// Command-line front end: argument handling and the report printed at the end of a run.

use log::info;
use std::path::PathBuf;
use crate::benchmark::{Benchmark, BenchmarkResult};
use crate::config::{BenchmarkConfig, Settings};
use crate::core::Result;
use crate::drivers::{find_driver, DRIVERS};
use crate::ufunc::{facade, Symbol};

pub const USAGE: &str = "\
usage: arraybench <benchmark> [--size=N*I] [--dtype=float64] [--bohrium=true|false]
                  [--engine=reference|parallel] [--seed=S] [--threads=T]
                  [--config=FILE] [--json=FILE] [--csv=FILE]
       arraybench list";

/// Value of `--config=` if present.
pub fn config_path(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .find_map(|arg| arg.strip_prefix("--config="))
        .map(PathBuf::from)
}

/// Run the command in `args` (program name first).
pub fn run(args: &[String], settings: &Settings) -> Result<()> {
    let command = match args.get(1) {
        Some(command) => command.as_str(),
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match command {
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        "list" => {
            list();
            Ok(())
        }
        name => run_benchmark(name, &args[2..], settings).map(|_| ()),
    }
}

/// Configure, run and report one benchmark.
///
/// Returns the saved result when the configuration names an output file.
pub fn run_benchmark(
    name: &str,
    options: &[String],
    settings: &Settings,
) -> Result<Option<BenchmarkResult>> {
    let driver = find_driver(name)?;
    let config = BenchmarkConfig::from_args(driver.name(), options, settings, driver.default_sizes())?;

    let mut bench = Benchmark::new(config)?;
    let output = driver.run(&mut bench)?;
    bench.pprint()?;

    let summary = output.summary();
    info!("{}: {}", driver.name(), summary);

    bench.save(&summary)
}

fn list() {
    println!("Benchmarks:");
    for driver in DRIVERS {
        let sizes = driver
            .default_sizes()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("*");
        println!("  {:<6} {} (default size {})", driver.name(), driver.description(), sizes);
    }

    let registry = facade();
    println!("\nUfuncs:");
    for (name, symbol) in registry.iter() {
        if let Symbol::Ufunc(info) = symbol {
            println!("  {:<14} nin={} {}", name, info.nin(), info.doc);
        }
    }

    let dtypes: Vec<&str> = registry
        .iter()
        .filter(|(_, symbol)| matches!(symbol, Symbol::DType(_)))
        .map(|(name, _)| name)
        .collect();
    println!("\nTypes:\n  {}", dtypes.join(", "));
}
