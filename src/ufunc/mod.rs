// src/ufunc/mod.rs
//
// Universal functions and the facade that exposes them.
//
// Every ufunc is one row of the static `UFUNCS` table. The row carries the
// public name the function is known by, so the facade registry can be built
// from the table alone:
//
//   let sqrt = facade().ufunc("sqrt")?;
//   let r = sqrt.call(engine, &[Operand::from(&x)])?;
//   let total = facade().ufunc("add")?.reduce(engine, &r)?;

pub mod ops;
pub mod registry;

pub use ops::UfuncOp;
pub use registry::{facade, Registry, Symbol};

use log::trace;
use crate::core::{Array, Error, Result};
use crate::engine::{ExecutionEngine, Operand};

/// One universal function and its descriptive metadata.
#[derive(Debug)]
pub struct UfuncInfo {
    /// Name the function is exported under.
    pub np_name: &'static str,
    pub op: UfuncOp,
    pub doc: &'static str,
}

impl UfuncInfo {
    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.op.arity()
    }

    pub fn is_reducible(&self) -> bool {
        self.nin() == 2 && self.op.identity().is_some()
    }

    /// Apply the function elementwise on `engine`.
    pub fn call(&self, engine: &dyn ExecutionEngine, operands: &[Operand<'_>]) -> Result<Array> {
        trace!("{} on {} engine", self.np_name, engine.kind());

        match (self.nin(), operands) {
            (1, [Operand::Array(a)]) => engine.unary(self.op, a),
            (1, [Operand::Scalar(x)]) => Ok(Array::scalar(
                self.op.apply_unary(*x),
                self.op.result_dtype(None, None),
            )),
            (2, [lhs, rhs]) => engine.binary(self.op, *lhs, *rhs),
            (expected, _) => Err(Error::Arity {
                name: self.np_name.to_string(),
                expected,
                actual: operands.len(),
            }),
        }
    }

    /// Fold every element of `array` into one value.
    pub fn reduce(&self, engine: &dyn ExecutionEngine, array: &Array) -> Result<f64> {
        if !self.is_reducible() {
            return Err(Error::NotReducible(self.np_name.to_string()));
        }
        engine.reduce(self.op, array)
    }
}

/// Every ufunc the facade exports.
pub static UFUNCS: &[UfuncInfo] = &[
    UfuncInfo { np_name: "add", op: UfuncOp::Add, doc: "Add arguments element-wise." },
    UfuncInfo { np_name: "subtract", op: UfuncOp::Subtract, doc: "Subtract arguments element-wise." },
    UfuncInfo { np_name: "multiply", op: UfuncOp::Multiply, doc: "Multiply arguments element-wise." },
    UfuncInfo { np_name: "divide", op: UfuncOp::Divide, doc: "Divide arguments element-wise." },
    UfuncInfo { np_name: "power", op: UfuncOp::Power, doc: "First array raised to powers from the second." },
    UfuncInfo { np_name: "maximum", op: UfuncOp::Maximum, doc: "Element-wise maximum." },
    UfuncInfo { np_name: "minimum", op: UfuncOp::Minimum, doc: "Element-wise minimum." },
    UfuncInfo { np_name: "equal", op: UfuncOp::Equal, doc: "Return (x1 == x2) element-wise." },
    UfuncInfo { np_name: "not_equal", op: UfuncOp::NotEqual, doc: "Return (x1 != x2) element-wise." },
    UfuncInfo { np_name: "less", op: UfuncOp::Less, doc: "Return (x1 < x2) element-wise." },
    UfuncInfo { np_name: "less_equal", op: UfuncOp::LessEqual, doc: "Return (x1 <= x2) element-wise." },
    UfuncInfo { np_name: "greater", op: UfuncOp::Greater, doc: "Return (x1 > x2) element-wise." },
    UfuncInfo { np_name: "greater_equal", op: UfuncOp::GreaterEqual, doc: "Return (x1 >= x2) element-wise." },
    UfuncInfo { np_name: "logical_and", op: UfuncOp::LogicalAnd, doc: "Truth value of x1 AND x2 element-wise." },
    UfuncInfo { np_name: "logical_or", op: UfuncOp::LogicalOr, doc: "Truth value of x1 OR x2 element-wise." },
    UfuncInfo { np_name: "negative", op: UfuncOp::Negative, doc: "Numerical negative, element-wise." },
    UfuncInfo { np_name: "absolute", op: UfuncOp::Absolute, doc: "Absolute value element-wise." },
    UfuncInfo { np_name: "sqrt", op: UfuncOp::Sqrt, doc: "Non-negative square root, element-wise." },
    UfuncInfo { np_name: "exp", op: UfuncOp::Exp, doc: "Exponential of all elements." },
    UfuncInfo { np_name: "log", op: UfuncOp::Log, doc: "Natural logarithm, element-wise." },
    UfuncInfo { np_name: "sin", op: UfuncOp::Sin, doc: "Trigonometric sine, element-wise." },
    UfuncInfo { np_name: "cos", op: UfuncOp::Cos, doc: "Cosine element-wise." },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DType;
    use crate::engine::ReferenceEngine;

    fn find(name: &str) -> &'static UfuncInfo {
        UFUNCS.iter().find(|u| u.np_name == name).unwrap()
    }

    #[test]
    fn test_call_checks_arity() {
        let engine = ReferenceEngine::new();
        let a = Array::zeros(&[3], DType::Float64);
        let err = find("add").call(&engine, &[Operand::from(&a)]).unwrap_err();
        assert!(matches!(err, Error::Arity { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_call_unary_scalar() {
        let engine = ReferenceEngine::new();
        let r = find("sqrt").call(&engine, &[Operand::Scalar(16.0)]).unwrap();
        assert_eq!(r.rank(), 0);
        assert_eq!(r.as_slice(), &[4.0]);
    }

    #[test]
    fn test_reduce_rejects_non_reducible() {
        let engine = ReferenceEngine::new();
        let a = Array::zeros(&[3], DType::Float64);
        assert!(matches!(find("subtract").reduce(&engine, &a), Err(Error::NotReducible(_))));
        assert!(matches!(find("sqrt").reduce(&engine, &a), Err(Error::NotReducible(_))));
        assert_eq!(find("add").reduce(&engine, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_every_op_appears_once() {
        let mut ops: Vec<UfuncOp> = UFUNCS.iter().map(|u| u.op).collect();
        let before = ops.len();
        ops.sort_by_key(|op| format!("{:?}", op));
        ops.dedup();
        assert_eq!(ops.len(), before);
    }
}
