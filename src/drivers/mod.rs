// src/drivers/mod.rs
//
// Benchmark drivers. Each one is a single straight-line script:
//
//   read sizes → build random input → start → one kernel (or a fixed loop
//   of kernels) → stop
//
// The caller prints the report and saves results; a driver only measures.

pub mod lu;
pub mod monte_carlo;

pub use lu::LuDriver;
pub use monte_carlo::MonteCarloDriver;

use crate::benchmark::Benchmark;
use crate::core::{Array, Error, Result};

/// What a driver computed inside the measured region.
#[derive(Debug, Clone)]
pub enum DriverOutput {
    Factorization { lower: Array, upper: Array },
    Estimate(f64),
}

impl DriverOutput {
    pub fn summary(&self) -> String {
        match self {
            DriverOutput::Factorization { lower, upper } => format!(
                "L {:?} {}, U {:?} {}",
                lower.shape(),
                lower.dtype(),
                upper.shape(),
                upper.dtype()
            ),
            DriverOutput::Estimate(value) => format!("estimate {:.6}", value),
        }
    }
}

pub trait Driver: Sync {
    /// Name used on the command line.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Sizes used when none are given, in `N*I` order.
    fn default_sizes(&self) -> &'static [usize];

    fn run(&self, bench: &mut Benchmark) -> Result<DriverOutput>;
}

/// Every runnable benchmark.
pub static DRIVERS: &[&dyn Driver] = &[&LuDriver, &MonteCarloDriver];

pub fn find_driver(name: &str) -> Result<&'static dyn Driver> {
    DRIVERS
        .iter()
        .copied()
        .find(|driver| driver.name() == name)
        .ok_or_else(|| Error::UnknownDriver(name.to_string()))
}

/// Require exactly `N` size parameters.
fn expect_sizes<const N: usize>(driver: &str, sizes: &[usize], usage: &str) -> Result<[usize; N]> {
    sizes.try_into().map_err(|_| {
        Error::InvalidSize(format!(
            "{} expects --size={}, got {} value(s)",
            driver,
            usage,
            sizes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_driver() {
        assert_eq!(find_driver("lu").unwrap().name(), "lu");
        assert_eq!(find_driver("mc").unwrap().name(), "mc");
        assert!(matches!(find_driver("fft"), Err(Error::UnknownDriver(_))));
    }

    #[test]
    fn test_driver_names_unique() {
        let mut names: Vec<&str> = DRIVERS.iter().map(|d| d.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DRIVERS.len());
    }

    #[test]
    fn test_expect_sizes() {
        assert_eq!(expect_sizes::<2>("mc", &[10, 3], "N*I").unwrap(), [10, 3]);
        assert!(matches!(expect_sizes::<1>("lu", &[10, 3], "N"), Err(Error::InvalidSize(_))));
    }
}
