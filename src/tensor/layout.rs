//! Layout: shape and row-major strides of a tensor buffer

use super::shape::{checked_elem_count, Shape, STACK_DIMS};
use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Strides type: element offsets between consecutive elements along each dimension
/// NOTE: Strides are in ELEMENTS, not bytes
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes how a shape maps onto a linear buffer
///
/// Tensors are always stored contiguously in row-major order: the last
/// dimension varies fastest. The address of element `[i0, i1, ..., in]` is
/// `i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use minitensor::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape = Shape::from(shape);
        let strides = Self::compute_contiguous_strides(&shape);
        Self { shape, strides }
    }

    /// Create a contiguous layout whose element count fits in `usize`
    ///
    /// Returns None if the product of the dimensions overflows.
    pub fn try_contiguous(shape: &[usize]) -> Option<Self> {
        checked_elem_count(shape)?;
        Some(Self::contiguous(shape))
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: Shape::new(),
            strides: SmallVec::new(),
        }
    }

    /// Compute contiguous strides for a given shape (row-major order)
    ///
    /// The running product saturates: a shape holding a zero dimension can
    /// have an unrepresentable stride product, but is never addressed.
    fn compute_contiguous_strides(shape: &[usize]) -> Strides {
        let mut strides: Strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1usize;

        // Compute strides from last dimension to first
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride = stride.saturating_mul(dim);
        }

        strides.reverse();
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.numel()
    }

    /// Check if the layout is a scalar (0 dimensions)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    /// Compute the flat buffer index for the given indices
    ///
    /// Dimensions are processed from last to first so the first out-of-range
    /// index reported is the innermost one.
    pub fn index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.ndim() {
            return Err(Error::InvalidIndexArity {
                expected: self.ndim(),
                got: indices.len(),
            });
        }

        // Bounds first, so an empty dimension rejects the index before any
        // stride arithmetic. Saturation only matters for layouts whose element
        // count overflows, which no tensor carries.
        for dim in (0..self.ndim()).rev() {
            let (index, size) = (indices[dim], self.shape[dim]);
            if index >= size {
                return Err(Error::IndexOutOfBounds { dim, index, size });
            }
        }

        Ok(indices
            .iter()
            .zip(self.strides.iter())
            .fold(0usize, |acc, (&i, &st)| acc.saturating_add(i.saturating_mul(st))))
    }

    /// Create a reshaped layout
    ///
    /// Returns None if the element counts differ or the new count overflows.
    pub fn reshape(&self, new_shape: &[usize]) -> Option<Self> {
        let new_count = checked_elem_count(new_shape)?;
        if Some(new_count) != self.shape.checked_numel() {
            return None;
        }

        Some(Self::contiguous(new_shape))
    }

    /// Strides for reading this layout as if it had the `target` shape
    ///
    /// Leading dimensions missing from this layout and dimensions of size 1
    /// that the target expands get stride 0, so every coordinate along them
    /// reads the same element. Each dimension is compared against this
    /// layout's own size only.
    ///
    /// Returns None if this layout cannot broadcast to `target`.
    pub fn broadcast_strides(&self, target: &[usize]) -> Option<Strides> {
        if target.len() < self.ndim() {
            return None;
        }

        let pad = target.len() - self.ndim();
        let mut strides: Strides = SmallVec::with_capacity(target.len());
        strides.extend(std::iter::repeat(0).take(pad));

        for ((&s, &st), &t) in self
            .shape
            .iter()
            .zip(self.strides.iter())
            .zip(&target[pad..])
        {
            if s == t {
                strides.push(st);
            } else if s == 1 {
                strides.push(0);
            } else {
                return None;
            }
        }

        Some(strides)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?} }}",
            self.shape.as_slice(),
            self.strides.as_slice()
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        assert_eq!(layout.shape(), &[2, 3, 4]);
        assert_eq!(layout.strides(), &[12, 4, 1]);
        assert_eq!(layout.elem_count(), 24);
    }

    #[test]
    fn test_scalar_layout() {
        let layout = Layout::scalar();
        assert!(layout.is_scalar());
        assert_eq!(layout.elem_count(), 1);
        assert_eq!(layout.index(&[]), Ok(0));
    }

    #[test]
    fn test_index() {
        let layout = Layout::contiguous(&[2, 3]);
        assert_eq!(layout.index(&[0, 0]), Ok(0));
        assert_eq!(layout.index(&[0, 2]), Ok(2));
        assert_eq!(layout.index(&[1, 0]), Ok(3));
        assert_eq!(layout.index(&[1, 2]), Ok(5));
    }

    #[test]
    fn test_index_errors() {
        let layout = Layout::contiguous(&[2, 3]);
        assert_eq!(
            layout.index(&[2, 0]),
            Err(Error::IndexOutOfBounds {
                dim: 0,
                index: 2,
                size: 2
            })
        );
        assert_eq!(
            layout.index(&[1]),
            Err(Error::InvalidIndexArity {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_reshape() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        let reshaped = layout.reshape(&[6, 4]).unwrap();
        assert_eq!(reshaped.shape(), &[6, 4]);
        assert_eq!(reshaped.strides(), &[4, 1]);
        assert!(layout.reshape(&[5, 5]).is_none());
    }

    #[test]
    fn test_reshape_overflowing_count() {
        let layout = Layout::contiguous(&[4]);
        assert!(layout.reshape(&[usize::MAX / 4 + 1, 4]).is_none());
        assert!(layout.reshape(&[usize::MAX, usize::MAX]).is_none());

        let empty = Layout::contiguous(&[0]);
        let reshaped = empty.reshape(&[0, usize::MAX, 2]).unwrap();
        assert_eq!(reshaped.shape(), &[0, usize::MAX, 2]);
    }

    #[test]
    fn test_strides_saturate_for_empty_shapes() {
        let layout = Layout::contiguous(&[0, usize::MAX, 2]);
        assert_eq!(layout.strides(), &[usize::MAX, 2, 1]);
        assert_eq!(layout.elem_count(), 0);
    }

    #[test]
    fn test_index_into_empty_shape_with_huge_dims() {
        let layout = Layout::contiguous(&[0, usize::MAX, 2]);
        assert_eq!(
            layout.index(&[0, usize::MAX - 1, 1]),
            Err(Error::IndexOutOfBounds {
                dim: 0,
                index: 0,
                size: 0
            })
        );
    }

    #[test]
    fn test_try_contiguous() {
        assert!(Layout::try_contiguous(&[2, 3]).is_some());
        assert!(Layout::try_contiguous(&[0, usize::MAX, usize::MAX]).is_some());
        assert!(Layout::try_contiguous(&[usize::MAX, 3]).is_none());
    }

    #[test]
    fn test_broadcast_strides() {
        let layout = Layout::contiguous(&[1, 3]);
        assert_eq!(
            layout.broadcast_strides(&[2, 3]).unwrap().as_slice(),
            &[0, 1]
        );

        let layout = Layout::contiguous(&[4, 1]);
        assert_eq!(
            layout.broadcast_strides(&[2, 4, 3]).unwrap().as_slice(),
            &[0, 1, 0]
        );

        assert!(Layout::contiguous(&[3]).broadcast_strides(&[4]).is_none());
        assert!(Layout::contiguous(&[2, 3]).broadcast_strides(&[3]).is_none());
    }
}
