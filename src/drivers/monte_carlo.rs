// src/drivers/monte_carlo.rs

use log::{debug, info};
use crate::benchmark::Benchmark;
use crate::core::Result;
use crate::drivers::{expect_sizes, Driver, DriverOutput};
use crate::engine::Operand;
use crate::ufunc::facade;

/// Monte Carlo estimate of π: `I` rounds of `N` random points each.
pub struct MonteCarloDriver;

impl Driver for MonteCarloDriver {
    fn name(&self) -> &'static str {
        "mc"
    }

    fn description(&self) -> &'static str {
        "Monte Carlo Pi estimation, I rounds of N samples"
    }

    fn default_sizes(&self) -> &'static [usize] {
        &[1_000_000, 10]
    }

    fn run(&self, bench: &mut Benchmark) -> Result<DriverOutput> {
        let [n, iterations] = expect_sizes::<2>(self.name(), bench.config().sizes(), "N*I")?;
        info!("Estimating pi with {} rounds of {} samples", iterations, n);

        bench.start();
        let estimate = montecarlo_pi(bench, n, iterations)?;
        bench.stop()?;

        Ok(DriverOutput::Estimate(estimate))
    }
}

/// One round: the fraction of `n` points in the unit square that fall inside
/// the quarter circle, times four.
pub fn solve(bench: &mut Benchmark, n: usize) -> Result<f64> {
    let x = bench.random(&[n])?;
    let y = bench.random(&[n])?;

    let ufuncs = facade();
    let power = ufuncs.ufunc("power")?;
    let add = ufuncs.ufunc("add")?;
    let sqrt = ufuncs.ufunc("sqrt")?;
    let less_equal = ufuncs.ufunc("less_equal")?;

    let engine = bench.engine();
    let x2 = power.call(engine, &[Operand::from(&x), Operand::Scalar(2.0)])?;
    let y2 = power.call(engine, &[Operand::from(&y), Operand::Scalar(2.0)])?;
    let r2 = add.call(engine, &[Operand::from(&x2), Operand::from(&y2)])?;
    let r = sqrt.call(engine, &[Operand::from(&r2)])?;
    let inside = less_equal.call(engine, &[Operand::from(&r), Operand::Scalar(1.0)])?;

    Ok(add.reduce(engine, &inside)? * 4.0 / n as f64)
}

/// Average of `iterations` rounds of `solve`.
pub fn montecarlo_pi(bench: &mut Benchmark, n: usize, iterations: usize) -> Result<f64> {
    let mut acc = 0.0;
    for i in 0..iterations {
        let round = solve(bench, n)?;
        debug!("round {}: {:.6}", i, round);
        acc += round;
    }
    Ok(acc / iterations as f64)
}
