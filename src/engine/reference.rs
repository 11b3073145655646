// src/engine/reference.rs

use crate::core::{Array, DType, Error, Result, StaticRandom};
use crate::engine::{
    binary_layout, check_random_dtype, draw, eliminate_row, lu_dtype, reduce_identity, split_lu,
    EngineKind, ExecutionEngine, Operand,
};
use crate::ufunc::UfuncOp;

/// Single-threaded engine; the baseline every speedup is measured against.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceEngine;

impl ReferenceEngine {
    pub fn new() -> Self {
        ReferenceEngine
    }
}

impl ExecutionEngine for ReferenceEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Reference
    }

    fn random(&self, shape: &[usize], dtype: DType, rng: &mut StaticRandom) -> Result<Array> {
        check_random_dtype(dtype)?;
        let len = Array::element_count(shape)?;
        let mut stream = rng.fork();
        let data: Vec<f64> = (0..len).map(|_| draw(&mut stream, dtype)).collect();
        Array::from_vec(shape, dtype, data)
    }

    fn unary(&self, op: UfuncOp, input: &Array) -> Result<Array> {
        if op.arity() != 1 {
            return Err(Error::InvalidArgument(format!("{:?} is not a unary op", op)));
        }
        let dtype = op.result_dtype(Some(input.dtype()), None);
        let data: Vec<f64> = input.as_slice().iter().map(|x| op.apply_unary(*x)).collect();
        Array::from_vec(input.shape(), dtype, data)
    }

    fn binary(&self, op: UfuncOp, lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Array> {
        if op.arity() != 2 {
            return Err(Error::InvalidArgument(format!("{:?} is not a binary op", op)));
        }
        let (shape, dtype) = binary_layout(op, &lhs, &rhs)?;
        let len: usize = shape.iter().product();
        let data: Vec<f64> = (0..len)
            .map(|i| op.apply_binary(lhs.value_at(i), rhs.value_at(i)))
            .collect();
        Array::from_vec(&shape, dtype, data)
    }

    fn reduce(&self, op: UfuncOp, input: &Array) -> Result<f64> {
        let identity = reduce_identity(op)?;
        Ok(input
            .as_slice()
            .iter()
            .fold(identity, |acc, x| op.apply_binary(acc, *x)))
    }

    fn lu(&self, input: &Array) -> Result<(Array, Array)> {
        let n = input.square_dim()?;
        let mut packed = input.as_slice().to_vec();

        for k in 0..n {
            let (head, tail) = packed.split_at_mut((k + 1) * n);
            let pivot_row = &head[k * n..];
            if pivot_row[k] == 0.0 && !tail.is_empty() {
                return Err(Error::SingularPivot(k));
            }
            for row in tail.chunks_mut(n) {
                eliminate_row(row, pivot_row, k);
            }
        }

        split_lu(n, &packed, lu_dtype(input))
    }
}
