use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense real vector — an ordered, growable sequence of scalars.
///
/// Each vector is exclusively owned; `Clone` produces an independent
/// duplicate. Indices are 0-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Scalar")]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Vector { data: Vec::new() }
    }

    /// Create a vector from a slice of entries.
    pub fn from_slice(data: &[T]) -> Self {
        Vector {
            data: data.to_vec(),
        }
    }

    /// Create a vector of `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Vector {
            data: vec![T::ZERO; dim],
        }
    }

    /// The standard basis vector e_axis in R^dim.
    pub fn standard_basis(dim: usize, axis: usize) -> LinalgResult<Self> {
        if axis >= dim {
            return Err(LinalgError::IndexOutOfBounds {
                index: axis,
                axis: 0,
                size: dim,
            });
        }
        let mut data = vec![T::ZERO; dim];
        data[axis] = T::ONE;
        Ok(Vector { data })
    }

    /// Number of entries.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, x: T) {
        self.data.push(x);
    }

    /// Remove and return the last entry.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn get(&self, index: usize) -> LinalgResult<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfBounds {
                index,
                axis: 0,
                size: self.data.len(),
            })
    }

    pub fn set(&mut self, index: usize, x: T) -> LinalgResult<()> {
        let size = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = x;
                Ok(())
            }
            None => Err(LinalgError::IndexOutOfBounds {
                index,
                axis: 0,
                size,
            }),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut v: Vector<f64> = Vector::new();
        assert!(v.is_empty());
        v.push(1.0);
        v.push(2.5);
        assert_eq!(v.dim(), 2);
        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(1).unwrap(), 2.5);
        assert!(v.get(2).is_err());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut v: Vector<f64> = Vector::from_slice(&[1.0, 2.0]);
        v.set(1, 7.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 7.0);
        assert_eq!(
            v.set(2, 0.0),
            Err(LinalgError::IndexOutOfBounds {
                index: 2,
                axis: 0,
                size: 2
            })
        );
    }

    #[test]
    fn test_standard_basis() {
        let e1: Vector<f64> = Vector::standard_basis(3, 1).unwrap();
        assert_eq!(e1.as_slice(), &[0.0, 1.0, 0.0]);
        assert!(Vector::<f64>::standard_basis(3, 3).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let v: Vector<f64> = Vector::from_slice(&[1.0, 2.0]);
        let mut w = v.clone();
        w.set(0, 9.0).unwrap();
        assert_eq!(v.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_display() {
        let v: Vector<f64> = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(format!("{}", v), "[1, 2]");
    }
}
