// src/core/mod.rs

pub mod array;
pub mod dtype;
pub mod error;
pub mod static_random;

pub use array::Array;
pub use dtype::DType;
pub use error::{Error, Result};
pub use static_random::StaticRandom;
