// src/core/dtype.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::core::error::Error;

/// Element type tag carried by every array.
///
/// Variants are declared in promotion order: when two arrays meet in a
/// binary ufunc the result takes the later of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl DType {
    /// Every supported element type, in promotion order.
    pub const ALL: &'static [DType] = &[
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Uint8,
        DType::Uint16,
        DType::Uint32,
        DType::Uint64,
        DType::Float32,
        DType::Float64,
    ];

    /// Canonical name, as exposed by the facade.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Uint8 => "uint8",
            DType::Uint16 => "uint16",
            DType::Uint32 => "uint32",
            DType::Uint64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, DType::Bool)
    }

    /// Result type of combining two arrays.
    pub fn promote(self, other: DType) -> DType {
        self.max(other)
    }

    /// Coerce a value to what this type can represent.
    ///
    /// Integers truncate toward zero and saturate at the type bounds (NaN
    /// becomes 0). 64-bit integers are held in an f64 and so lose precision
    /// past 2^53.
    pub fn coerce(&self, value: f64) -> f64 {
        match self {
            DType::Bool => {
                if value != 0.0 { 1.0 } else { 0.0 }
            }
            DType::Int8 => value as i8 as f64,
            DType::Int16 => value as i16 as f64,
            DType::Int32 => value as i32 as f64,
            DType::Int64 => value as i64 as f64,
            DType::Uint8 => value as u8 as f64,
            DType::Uint16 => value as u16 as f64,
            DType::Uint32 => value as u32 as f64,
            DType::Uint64 => value as u64 as f64,
            DType::Float32 => value as f32 as f64,
            DType::Float64 => value,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // Accept the numpy spellings the old scripts passed around.
        let wanted = wanted.trim_start_matches("numpy.");
        let wanted = match wanted {
            "float" | "double" => "float64",
            "single" => "float32",
            "int" => "int64",
            "bool_" => "bool",
            other => other,
        };
        DType::ALL
            .iter()
            .copied()
            .find(|dtype| dtype.name() == wanted)
            .ok_or_else(|| Error::UnsupportedDType {
                dtype: s.to_string(),
                operation: "parsing".to_string(),
            })
    }
}
