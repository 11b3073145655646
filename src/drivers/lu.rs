// src/drivers/lu.rs

use log::info;
use crate::benchmark::Benchmark;
use crate::core::{Error, Result};
use crate::drivers::{expect_sizes, Driver, DriverOutput};

/// LU factorization of one random `N×N` matrix.
pub struct LuDriver;

impl Driver for LuDriver {
    fn name(&self) -> &'static str {
        "lu"
    }

    fn description(&self) -> &'static str {
        "LU factorization of a random N x N matrix"
    }

    fn default_sizes(&self) -> &'static [usize] {
        &[500]
    }

    fn run(&self, bench: &mut Benchmark) -> Result<DriverOutput> {
        let [n] = expect_sizes::<1>(self.name(), bench.config().sizes(), "N")?;
        if n.checked_mul(n).is_none() {
            return Err(Error::InvalidSize(format!("lu: {}x{} matrix is too large", n, n)));
        }
        info!("Factoring a {}x{} {} matrix", n, n, bench.config().dtype());

        let a = bench.random(&[n, n])?;
        bench.start();
        let (lower, upper) = bench.engine().lu(&a)?;
        bench.stop()?;

        Ok(DriverOutput::Factorization { lower, upper })
    }
}
