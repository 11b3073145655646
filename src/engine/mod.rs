// src/engine/mod.rs
//
// Execution engines: the runtimes that actually touch array elements.
//
// Engine        Iteration               Selected by
// ───────────────────────────────────────────────────────────────
// Reference     sequential iterators    --engine=reference / --bohrium=false
// Parallel      rayon thread pool       --engine=parallel  / --bohrium=true
//
// The engine is picked once from the run configuration and then passed by
// reference to every driver and ufunc call. Elementwise semantics come from
// `UfuncOp`, so the two engines differ only in how work is scheduled.

pub mod parallel;
pub mod reference;

pub use parallel::ParallelEngine;
pub use reference::ReferenceEngine;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::core::{Array, DType, Error, Result, StaticRandom};
use crate::ufunc::UfuncOp;

/// Which engine a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Reference,
    Parallel,
}

impl EngineKind {
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Reference => "reference",
            EngineKind::Parallel => "parallel",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" | "numpy" | "false" | "0" | "no" => Ok(EngineKind::Reference),
            "parallel" | "bohrium" | "true" | "1" | "yes" => Ok(EngineKind::Parallel),
            _ => Err(Error::UnknownEngine(s.to_string())),
        }
    }
}

/// Build the engine for `kind`. `threads` only matters to the parallel one.
pub fn create_engine(kind: EngineKind, threads: Option<usize>) -> Result<Box<dyn ExecutionEngine>> {
    Ok(match kind {
        EngineKind::Reference => Box::new(ReferenceEngine::new()),
        EngineKind::Parallel => Box::new(ParallelEngine::new(threads)?),
    })
}

/// One input to a binary ufunc.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Array(&'a Array),
    Scalar(f64),
}

impl<'a> Operand<'a> {
    fn dtype(&self) -> Option<DType> {
        match self {
            Operand::Array(a) => Some(a.dtype()),
            Operand::Scalar(_) => None,
        }
    }

    #[inline]
    fn value_at(&self, index: usize) -> f64 {
        match self {
            Operand::Array(a) => a.as_slice()[index],
            Operand::Scalar(x) => *x,
        }
    }
}

impl<'a> From<&'a Array> for Operand<'a> {
    fn from(array: &'a Array) -> Self {
        Operand::Array(array)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// A runtime able to perform every array operation the drivers need.
pub trait ExecutionEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Uniform samples in `[0, 1)`. Float element types only.
    fn random(&self, shape: &[usize], dtype: DType, rng: &mut StaticRandom) -> Result<Array>;

    fn unary(&self, op: UfuncOp, input: &Array) -> Result<Array>;

    /// Same-shape arrays, or an array against a scalar.
    fn binary(&self, op: UfuncOp, lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Array>;

    /// Fold all elements with `op`, starting from its identity.
    fn reduce(&self, op: UfuncOp, input: &Array) -> Result<f64>;

    /// Doolittle factorization without pivoting: returns `(L, U)` with `L`
    /// unit lower triangular and `L·U = input`.
    fn lu(&self, input: &Array) -> Result<(Array, Array)>;

    /// Block until all issued work has completed.
    ///
    /// Both engines here evaluate eagerly, so this is a no-op unless an
    /// engine defers work.
    fn flush(&self) {}
}

fn check_random_dtype(dtype: DType) -> Result<()> {
    if dtype.is_float() {
        Ok(())
    } else {
        Err(Error::UnsupportedDType {
            dtype: dtype.to_string(),
            operation: "random".to_string(),
        })
    }
}

/// One sample in `[0, 1)` at the precision of `dtype`, so float32 arrays never
/// round up to exactly 1.0.
#[inline]
fn draw<R: Rng>(rng: &mut R, dtype: DType) -> f64 {
    if dtype == DType::Float32 {
        rng.random::<f32>() as f64
    } else {
        rng.random::<f64>()
    }
}

/// Result shape and element type of a binary op.
fn binary_layout(op: UfuncOp, lhs: &Operand<'_>, rhs: &Operand<'_>) -> Result<(Vec<usize>, DType)> {
    let shape = match (lhs, rhs) {
        (Operand::Array(a), Operand::Array(b)) => {
            if a.shape() != b.shape() {
                return Err(Error::ShapeMismatch {
                    lhs: a.shape().to_vec(),
                    rhs: b.shape().to_vec(),
                });
            }
            a.shape().to_vec()
        }
        (Operand::Array(a), Operand::Scalar(_)) | (Operand::Scalar(_), Operand::Array(a)) => {
            a.shape().to_vec()
        }
        (Operand::Scalar(_), Operand::Scalar(_)) => {
            return Err(Error::InvalidArgument(
                "binary ufunc needs at least one array operand".to_string(),
            ));
        }
    };
    Ok((shape, op.result_dtype(lhs.dtype(), rhs.dtype())))
}

fn reduce_identity(op: UfuncOp) -> Result<f64> {
    op.identity()
        .ok_or_else(|| Error::NotReducible(format!("{:?}", op)))
}

/// Element type of the factors.
fn lu_dtype(input: &Array) -> DType {
    if input.dtype().is_float() {
        input.dtype()
    } else {
        DType::Float64
    }
}

/// Eliminate column `k` from one row below the pivot row.
///
/// The multiplier is stored in place of the eliminated entry, which is how
/// the packed `L\U` layout is built up.
#[inline]
fn eliminate_row(row: &mut [f64], pivot_row: &[f64], k: usize) {
    let factor = row[k] / pivot_row[k];
    row[k] = factor;
    for (value, pivot_value) in row[k + 1..].iter_mut().zip(&pivot_row[k + 1..]) {
        *value -= factor * pivot_value;
    }
}

/// Unpack a packed `L\U` matrix into separate factors.
fn split_lu(n: usize, packed: &[f64], dtype: DType) -> Result<(Array, Array)> {
    let mut lower = vec![0.0; n * n];
    let mut upper = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            let value = packed[i * n + j];
            if j < i {
                lower[i * n + j] = value;
            } else {
                upper[i * n + j] = value;
            }
        }
        lower[i * n + i] = 1.0;
    }
    Ok((
        Array::from_vec(&[n, n], dtype, lower)?,
        Array::from_vec(&[n, n], dtype, upper)?,
    ))
}
