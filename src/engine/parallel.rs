// src/engine/parallel.rs

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use crate::core::{Array, DType, Error, Result, StaticRandom};
use crate::engine::{
    binary_layout, check_random_dtype, draw, eliminate_row, lu_dtype, reduce_identity, split_lu,
    EngineKind, ExecutionEngine, Operand,
};
use crate::ufunc::UfuncOp;

/// Elements handed to one random stream. Fixed so a seeded run produces the
/// same array whatever the thread count.
const RANDOM_CHUNK: usize = 1 << 14;

/// Rows below which LU elimination stays on the calling thread.
const LU_PARALLEL_ROWS: usize = 64;

/// Engine backed by a dedicated rayon pool.
///
/// All work runs inside `pool.install`, so the global rayon pool is never
/// touched and two engines with different thread counts can coexist.
pub struct ParallelEngine {
    pool: ThreadPool,
}

impl ParallelEngine {
    /// `None` uses one thread per logical CPU.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("arraybench-{}", i))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;

        info!("Parallel engine using {} threads (total cores: {})", threads, num_cpus::get());
        Ok(ParallelEngine { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ExecutionEngine for ParallelEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Parallel
    }

    fn random(&self, shape: &[usize], dtype: DType, rng: &mut StaticRandom) -> Result<Array> {
        check_random_dtype(dtype)?;
        let len = Array::element_count(shape)?;
        let seeds: Vec<u64> = (0..len.div_ceil(RANDOM_CHUNK)).map(|_| rng.next_u64()).collect();

        let mut data = vec![0.0; len];
        self.pool.install(|| {
            data.par_chunks_mut(RANDOM_CHUNK)
                .zip(seeds.par_iter())
                .for_each(|(chunk, seed)| {
                    let mut stream = ChaCha8Rng::seed_from_u64(*seed);
                    for value in chunk.iter_mut() {
                        *value = draw(&mut stream, dtype);
                    }
                });
        });
        Array::from_vec(shape, dtype, data)
    }

    fn unary(&self, op: UfuncOp, input: &Array) -> Result<Array> {
        if op.arity() != 1 {
            return Err(Error::InvalidArgument(format!("{:?} is not a unary op", op)));
        }
        let dtype = op.result_dtype(Some(input.dtype()), None);
        let data: Vec<f64> = self.pool.install(|| {
            input.as_slice().par_iter().map(|x| op.apply_unary(*x)).collect()
        });
        Array::from_vec(input.shape(), dtype, data)
    }

    fn binary(&self, op: UfuncOp, lhs: Operand<'_>, rhs: Operand<'_>) -> Result<Array> {
        if op.arity() != 2 {
            return Err(Error::InvalidArgument(format!("{:?} is not a binary op", op)));
        }
        let (shape, dtype) = binary_layout(op, &lhs, &rhs)?;
        let len: usize = shape.iter().product();
        let data: Vec<f64> = self.pool.install(|| {
            (0..len)
                .into_par_iter()
                .map(|i| op.apply_binary(lhs.value_at(i), rhs.value_at(i)))
                .collect()
        });
        Array::from_vec(&shape, dtype, data)
    }

    fn reduce(&self, op: UfuncOp, input: &Array) -> Result<f64> {
        let identity = reduce_identity(op)?;
        Ok(self.pool.install(|| {
            input
                .as_slice()
                .par_iter()
                .copied()
                .reduce(|| identity, |a, b| op.apply_binary(a, b))
        }))
    }

    fn lu(&self, input: &Array) -> Result<(Array, Array)> {
        let n = input.square_dim()?;
        let mut packed = input.as_slice().to_vec();

        self.pool.install(|| {
            for k in 0..n {
                let (head, tail) = packed.split_at_mut((k + 1) * n);
                let pivot_row = &head[k * n..];
                if pivot_row[k] == 0.0 && !tail.is_empty() {
                    return Err(Error::SingularPivot(k));
                }
                if n - k - 1 >= LU_PARALLEL_ROWS {
                    tail.par_chunks_mut(n)
                        .for_each(|row| eliminate_row(row, pivot_row, k));
                } else {
                    for row in tail.chunks_mut(n) {
                        eliminate_row(row, pivot_row, k);
                    }
                }
            }
            Ok(())
        })?;

        split_lu(n, &packed, lu_dtype(input))
    }
}
