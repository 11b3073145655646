// src/lib.rs

pub mod benchmark;
pub mod benchmark_cli;
pub mod config;
pub mod core;
pub mod drivers;
pub mod engine;
pub mod ufunc;

pub use crate::core::{Array, DType, Error, Result};
pub use crate::engine::{EngineKind, ExecutionEngine, Operand};
pub use crate::ufunc::{facade, Registry, Symbol, UfuncInfo, UFUNCS};
