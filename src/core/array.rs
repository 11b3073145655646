// src/core/array.rs

use std::fmt;
use crate::core::dtype::DType;
use crate::core::error::{Error, Result};

/// Dense row-major array.
///
/// Elements are stored as `f64` regardless of the element type; the type tag
/// decides how values are coerced when the array is built.
#[derive(Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    dtype: DType,
    data: Vec<f64>,
}

impl Array {
    /// Number of elements in `shape`, or `InvalidSize` if it does not fit in `usize`.
    pub fn element_count(shape: &[usize]) -> Result<usize> {
        shape
            .iter()
            .try_fold(1usize, |count, &dim| count.checked_mul(dim))
            .ok_or_else(|| Error::InvalidSize(format!("shape {:?} has too many elements", shape)))
    }

    /// Build an array from raw values, coercing each one to `dtype`.
    pub fn from_vec(shape: &[usize], dtype: DType, mut data: Vec<f64>) -> Result<Self> {
        let expected = Array::element_count(shape)?;
        if expected != data.len() {
            return Err(Error::ShapeMismatch {
                lhs: shape.to_vec(),
                rhs: vec![data.len()],
            });
        }
        if dtype != DType::Float64 {
            for value in data.iter_mut() {
                *value = dtype.coerce(*value);
            }
        }
        Ok(Array {
            shape: shape.to_vec(),
            dtype,
            data,
        })
    }

    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let len: usize = shape.iter().product();
        Array {
            shape: shape.to_vec(),
            dtype,
            data: vec![0.0; len],
        }
    }

    /// A rank-0 array holding one value.
    pub fn scalar(value: f64, dtype: DType) -> Self {
        Array {
            shape: Vec::new(),
            dtype,
            data: vec![dtype.coerce(value)],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element at a row/column position of a rank-2 array.
    pub fn get2(&self, row: usize, col: usize) -> Option<f64> {
        match self.shape.as_slice() {
            [rows, cols] if row < *rows && col < *cols => Some(self.data[row * cols + col]),
            _ => None,
        }
    }

    /// Side length of a square rank-2 array.
    pub fn square_dim(&self) -> Result<usize> {
        match self.shape.as_slice() {
            [rows, cols] if rows == cols => Ok(*rows),
            _ => Err(Error::NotSquare(self.shape.clone())),
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 6;
        write!(f, "Array(shape={:?}, dtype={}, data=[", self.shape, self.dtype)?;
        for (i, value) in self.data.iter().take(PREVIEW).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        if self.data.len() > PREVIEW {
            write!(f, ", ...")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Array::from_vec(&[2, 3], DType::Float64, vec![0.0; 5]).is_err());
        let a = Array::from_vec(&[2, 3], DType::Float64, vec![0.0; 6]).unwrap();
        assert_eq!(a.len(), 6);
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn test_from_vec_coerces() {
        let a = Array::from_vec(&[3], DType::Int32, vec![1.7, -1.7, 2.0]).unwrap();
        assert_eq!(a.as_slice(), &[1.0, -1.0, 2.0]);
    }

    #[test]
    fn test_get2_and_square_dim() {
        let a = Array::from_vec(&[2, 2], DType::Float64, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.get2(1, 0), Some(3.0));
        assert_eq!(a.get2(2, 0), None);
        assert_eq!(a.square_dim().unwrap(), 2);

        let v = Array::zeros(&[4], DType::Float64);
        assert!(matches!(v.square_dim(), Err(Error::NotSquare(_))));
    }

    #[test]
    fn test_element_count_overflow() {
        assert_eq!(Array::element_count(&[3, 4]).unwrap(), 12);
        assert_eq!(Array::element_count(&[]).unwrap(), 1);
        assert!(matches!(
            Array::element_count(&[usize::MAX, 2]),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn test_scalar_is_rank_zero() {
        let s = Array::scalar(2.5, DType::Int64);
        assert_eq!(s.rank(), 0);
        assert_eq!(s.as_slice(), &[2.0]);
    }
}
