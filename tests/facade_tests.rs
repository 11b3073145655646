// tests/facade_tests.rs
//
// The facade registry: one name per ufunc and dtype, and every name resolves
// to the object it was registered with.

use std::collections::HashSet;
use arraybench::engine::{ParallelEngine, ReferenceEngine};
use arraybench::{facade, Array, DType, Operand, Symbol, UFUNCS};

#[cfg(test)]
mod facade_tests {
    use super::*;

    #[test]
    fn test_one_name_per_symbol() {
        let registry = facade();
        assert_eq!(registry.len(), UFUNCS.len() + DType::ALL.len());

        let names: HashSet<&str> = registry.names().collect();
        assert_eq!(names.len(), registry.len());

        for info in UFUNCS {
            assert!(registry.contains(info.np_name), "missing {}", info.np_name);
        }
        for dtype in DType::ALL {
            assert!(registry.contains(dtype.name()), "missing {}", dtype);
        }
    }

    #[test]
    fn test_ufunc_identity_preserved() {
        let registry = facade();
        for info in UFUNCS {
            let resolved = registry.ufunc(info.np_name).unwrap();
            assert!(std::ptr::eq(resolved, info), "{} resolved to another entry", info.np_name);
        }
    }

    #[test]
    fn test_dtype_identity_preserved() {
        let registry = facade();
        for dtype in DType::ALL {
            match registry.get(dtype.name()).unwrap() {
                Symbol::DType(found) => assert_eq!(found, *dtype),
                other => panic!("{} resolved to a {}", dtype, other.kind()),
            }
        }
    }

    #[test]
    fn test_calls_through_facade_match_on_both_engines() {
        let reference = ReferenceEngine::new();
        let parallel = ParallelEngine::new(Some(2)).unwrap();
        let x = Array::from_vec(&[5], DType::Float64, vec![0.0, 0.25, 1.0, 4.0, 9.0]).unwrap();

        for name in ["sqrt", "negative", "absolute", "exp", "sin", "cos"] {
            let ufunc = facade().ufunc(name).unwrap();
            let r = ufunc.call(&reference, &[Operand::from(&x)]).unwrap();
            let p = ufunc.call(&parallel, &[Operand::from(&x)]).unwrap();
            assert_eq!(r, p, "{} differs between engines", name);
        }

        let sqrt = facade().ufunc("sqrt").unwrap();
        let r = sqrt.call(&reference, &[Operand::from(&x)]).unwrap();
        assert_eq!(r.as_slice(), &[0.0, 0.5, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reductions_through_facade() {
        let engine = ReferenceEngine::new();
        let x = Array::from_vec(&[4], DType::Float64, vec![1.0, -2.0, 3.0, 4.0]).unwrap();
        let registry = facade();
        assert_eq!(registry.ufunc("add").unwrap().reduce(&engine, &x).unwrap(), 6.0);
        assert_eq!(registry.ufunc("multiply").unwrap().reduce(&engine, &x).unwrap(), -24.0);
        assert_eq!(registry.ufunc("maximum").unwrap().reduce(&engine, &x).unwrap(), 4.0);
        assert_eq!(registry.ufunc("minimum").unwrap().reduce(&engine, &x).unwrap(), -2.0);
        assert!(registry.ufunc("divide").unwrap().reduce(&engine, &x).is_err());
    }

    #[test]
    fn test_dtype_promotion_through_facade() {
        let engine = ReferenceEngine::new();
        let a = Array::from_vec(&[2], DType::Int8, vec![1.0, 2.0]).unwrap();
        let b = Array::from_vec(&[2], DType::Float32, vec![0.5, 0.5]).unwrap();
        let sum = facade().ufunc("add").unwrap()
            .call(&engine, &[Operand::from(&a), Operand::from(&b)])
            .unwrap();
        assert_eq!(sum.dtype(), DType::Float32);
        assert_eq!(sum.as_slice(), &[1.5, 2.5]);

        let root = facade().ufunc("sqrt").unwrap().call(&engine, &[Operand::from(&a)]).unwrap();
        assert_eq!(root.dtype(), DType::Float64);
    }
}
