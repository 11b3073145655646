// src/ufunc/ops.rs

use crate::core::dtype::DType;

/// The scalar operation behind a ufunc.
///
/// Engines only decide how to iterate; what happens to each element lives
/// here so both engines agree value for value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UfuncOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Maximum,
    Minimum,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LogicalAnd,
    LogicalOr,
    Negative,
    Absolute,
    Sqrt,
    Exp,
    Log,
    Sin,
    Cos,
}

fn truth(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

impl UfuncOp {
    /// Number of inputs.
    pub fn arity(&self) -> usize {
        match self {
            UfuncOp::Negative
            | UfuncOp::Absolute
            | UfuncOp::Sqrt
            | UfuncOp::Exp
            | UfuncOp::Log
            | UfuncOp::Sin
            | UfuncOp::Cos => 1,
            _ => 2,
        }
    }

    /// Comparisons and logical connectives; these always produce `bool`.
    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            UfuncOp::Equal
                | UfuncOp::NotEqual
                | UfuncOp::Less
                | UfuncOp::LessEqual
                | UfuncOp::Greater
                | UfuncOp::GreaterEqual
                | UfuncOp::LogicalAnd
                | UfuncOp::LogicalOr
        )
    }

    /// Ops whose result is not representable in an integer type.
    fn needs_float(&self) -> bool {
        matches!(
            self,
            UfuncOp::Divide | UfuncOp::Sqrt | UfuncOp::Exp | UfuncOp::Log | UfuncOp::Sin | UfuncOp::Cos
        )
    }

    /// Element type of the result. `None` stands for a scalar operand.
    pub fn result_dtype(&self, lhs: Option<DType>, rhs: Option<DType>) -> DType {
        if self.is_predicate() {
            return DType::Bool;
        }
        let base = match (lhs, rhs) {
            (Some(a), Some(b)) => a.promote(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => DType::Float64,
        };
        if base.is_bool() || (self.needs_float() && !base.is_float()) {
            DType::Float64
        } else {
            base
        }
    }

    pub fn apply_unary(&self, x: f64) -> f64 {
        match self {
            UfuncOp::Negative => -x,
            UfuncOp::Absolute => x.abs(),
            UfuncOp::Sqrt => x.sqrt(),
            UfuncOp::Exp => x.exp(),
            UfuncOp::Log => x.ln(),
            UfuncOp::Sin => x.sin(),
            UfuncOp::Cos => x.cos(),
            // Binary ops never reach here through a checked call.
            _ => f64::NAN,
        }
    }

    pub fn apply_binary(&self, a: f64, b: f64) -> f64 {
        match self {
            UfuncOp::Add => a + b,
            UfuncOp::Subtract => a - b,
            UfuncOp::Multiply => a * b,
            UfuncOp::Divide => a / b,
            UfuncOp::Power => {
                if b == 2.0 { a * a } else { a.powf(b) }
            }
            // NaN wins, unlike f64::max/min.
            UfuncOp::Maximum if a.is_nan() || b.is_nan() => f64::NAN,
            UfuncOp::Minimum if a.is_nan() || b.is_nan() => f64::NAN,
            UfuncOp::Maximum => a.max(b),
            UfuncOp::Minimum => a.min(b),
            UfuncOp::Equal => truth(a == b),
            UfuncOp::NotEqual => truth(a != b),
            UfuncOp::Less => truth(a < b),
            UfuncOp::LessEqual => truth(a <= b),
            UfuncOp::Greater => truth(a > b),
            UfuncOp::GreaterEqual => truth(a >= b),
            UfuncOp::LogicalAnd => truth(a != 0.0 && b != 0.0),
            UfuncOp::LogicalOr => truth(a != 0.0 || b != 0.0),
            _ => f64::NAN,
        }
    }

    /// Starting value for a full reduction, if the op has one.
    pub fn identity(&self) -> Option<f64> {
        match self {
            UfuncOp::Add | UfuncOp::LogicalOr => Some(0.0),
            UfuncOp::Multiply | UfuncOp::LogicalAnd => Some(1.0),
            UfuncOp::Maximum => Some(f64::NEG_INFINITY),
            UfuncOp::Minimum => Some(f64::INFINITY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_yield_bool() {
        assert_eq!(UfuncOp::LessEqual.result_dtype(Some(DType::Float32), None), DType::Bool);
        assert_eq!(UfuncOp::LessEqual.apply_binary(1.0, 1.0), 1.0);
        assert_eq!(UfuncOp::Less.apply_binary(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_float_results_for_integer_inputs() {
        assert_eq!(UfuncOp::Sqrt.result_dtype(Some(DType::Int32), None), DType::Float64);
        assert_eq!(UfuncOp::Sqrt.result_dtype(Some(DType::Float32), None), DType::Float32);
        assert_eq!(UfuncOp::Add.result_dtype(Some(DType::Int8), Some(DType::Int32)), DType::Int32);
        assert_eq!(UfuncOp::Add.result_dtype(Some(DType::Bool), None), DType::Float64);
    }

    #[test]
    fn test_identities() {
        assert_eq!(UfuncOp::Add.identity(), Some(0.0));
        assert_eq!(UfuncOp::Multiply.identity(), Some(1.0));
        assert_eq!(UfuncOp::Subtract.identity(), None);
        assert_eq!(UfuncOp::Sqrt.identity(), None);
    }

    #[test]
    fn test_extrema_propagate_nan() {
        assert_eq!(UfuncOp::Maximum.apply_binary(1.0, 2.0), 2.0);
        assert_eq!(UfuncOp::Minimum.apply_binary(1.0, 2.0), 1.0);
        assert!(UfuncOp::Maximum.apply_binary(f64::NAN, 2.0).is_nan());
        assert!(UfuncOp::Maximum.apply_binary(2.0, f64::NAN).is_nan());
        assert!(UfuncOp::Minimum.apply_binary(f64::NAN, 2.0).is_nan());
        assert!(UfuncOp::Minimum.apply_binary(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_arity() {
        assert_eq!(UfuncOp::Sqrt.arity(), 1);
        assert_eq!(UfuncOp::Power.arity(), 2);
    }
}
