//! Core Tensor type

use super::Layout;
use crate::device::Device;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array owning a contiguous row-major buffer
///
/// `Tensor` consists of:
/// - **Data**: an exclusively owned `Vec<T>` of `numel()` elements
/// - **Layout**: shape and row-major strides over that buffer
/// - **Device**: an inert label propagated through arithmetic
///
/// # Ownership
///
/// Every tensor owns its buffer. `clone()` copies the data, and arithmetic
/// always allocates a new result, so two live tensors never alias. The only
/// in-place mutations are [`Tensor::at_mut`] and [`Tensor::reshape`], both of
/// which need an exclusive borrow.
///
/// # Example
///
/// ```
/// use minitensor::prelude::*;
///
/// let mut m = Tensor::new(&[2, 3], 5i32, Device::Cpu);
/// *m.at_mut(&[0, 0])? = 10;
///
/// let row = Tensor::new(&[1, 3], 2i32, Device::Cpu);
/// let sum = m.add(&row)?;
/// assert_eq!(sum.to_vec(), [12, 7, 7, 7, 7, 7]);
/// # Ok::<(), minitensor::error::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T: Element> {
    /// Element buffer, `layout.elem_count()` long
    data: Vec<T>,
    /// Shape and strides
    layout: Layout,
    /// Device label
    device: Device,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor with every element set to `value`
    ///
    /// A rank-0 shape (`&[]`) produces a tensor with exactly one element.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows `usize`.
    /// For a fallible alternative, use [`Self::try_new`].
    pub fn new(shape: &[usize], value: T, device: Device) -> Self {
        Self::try_new(shape, value, device).expect("Tensor::new failed")
    }

    /// Create a tensor with every element set to `value` (fallible version)
    ///
    /// Returns [`Error::ShapeOverflow`] if the element count of `shape` does
    /// not fit in `usize`. Shapes with a zero dimension are always accepted.
    pub fn try_new(shape: &[usize], value: T, device: Device) -> Result<Self> {
        let layout =
            Layout::try_contiguous(shape).ok_or_else(|| Error::shape_overflow(shape))?;
        let data = vec![value; layout.elem_count()];
        Ok(Self {
            data,
            layout,
            device,
        })
    }

    /// Create a CPU tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::new(shape, T::zero(), Device::Cpu)
    }

    /// Create a CPU tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::new(shape, T::one(), Device::Cpu)
    }

    /// Create a CPU tensor filled with a value
    pub fn full(shape: &[usize], value: T) -> Self {
        Self::new(shape, value, Device::Cpu)
    }

    /// Create a tensor from an existing row-major buffer
    ///
    /// Returns an error if `data.len()` does not equal the product of the
    /// `shape` dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::prelude::*;
    ///
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2], Device::Cpu)?;
    /// assert_eq!(t.at(&[1, 0])?, 3.0);
    /// # Ok::<(), minitensor::error::Error>(())
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize], device: Device) -> Result<Self> {
        let layout =
            Layout::try_contiguous(shape).ok_or_else(|| Error::shape_overflow(shape))?;
        if data.len() != layout.elem_count() {
            return Err(Error::BufferLengthMismatch {
                shape: shape.to_vec(),
                expected: layout.elem_count(),
                got: data.len(),
            });
        }

        Ok(Self {
            data,
            layout,
            device,
        })
    }

    /// Assemble a tensor whose buffer already matches the layout
    pub(crate) fn from_parts(data: Vec<T>, layout: Layout, device: Device) -> Self {
        debug_assert_eq!(data.len(), layout.elem_count());
        Self {
            data,
            layout,
            device,
        }
    }

    // ===== Accessors =====

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Get the device label
    #[inline]
    pub fn device(&self) -> Device {
        self.device
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the elements out in storage order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the tensor and return its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ===== Element access =====

    /// Read the element at `indices`
    ///
    /// Fails with [`Error::InvalidIndexArity`] if `indices.len()` differs
    /// from the rank, or [`Error::IndexOutOfBounds`] if any index is not
    /// smaller than its dimension.
    pub fn at(&self, indices: &[usize]) -> Result<T> {
        let index = self.layout.index(indices)?;
        Ok(self.data[index])
    }

    /// Mutable reference to the element at `indices`
    ///
    /// Same validation as [`Tensor::at`].
    pub fn at_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let index = self.layout.index(indices)?;
        Ok(&mut self.data[index])
    }

    // ===== Shape operations =====

    /// Reinterpret the buffer under a new shape, in place
    ///
    /// The data is never moved: element `k` in storage order stays element
    /// `k`. Fails with [`Error::ReshapeMismatch`] if the new element count
    /// differs or overflows `usize`, leaving the tensor untouched.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let layout = self
            .layout
            .reshape(shape)
            .ok_or_else(|| Error::reshape(self.shape(), shape))?;
        log::trace!("reshape {} -> {}", self.layout, layout);
        self.layout = layout;
        Ok(())
    }
}

impl<T: Element> Default for Tensor<T> {
    /// A rank-0 CPU tensor holding `T::default()`
    fn default() -> Self {
        Self::from_parts(vec![T::default()], Layout::scalar(), Device::Cpu)
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("device", &self.device)
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    /// Renders `Tensor (device: CPU, shape: [2, 3]): [v0, v1, ...]` with the
    /// elements in storage order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor (device: {}, shape: {}): [",
            self.device, self.layout
        )?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tensor::new(&[2, 3], 1.5f32, Device::Gpu);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.device(), Device::Gpu);
        assert_eq!(t.dtype(), DType::F32);
        assert!(t.as_slice().iter().all(|&v| v == 1.5));
    }

    #[test]
    fn test_scalar_tensor() {
        let t = Tensor::new(&[], 4i64, Device::Cpu);
        assert!(t.is_scalar());
        assert_eq!(t.numel(), 1);
        assert_eq!(t.at(&[]).unwrap(), 4);
    }

    #[test]
    fn test_try_new_overflow() {
        let err = Tensor::try_new(&[usize::MAX, 3], 0u8, Device::Cpu).unwrap_err();
        assert_eq!(err, Error::shape_overflow(&[usize::MAX, 3]));
    }

    #[test]
    fn test_empty_tensor_with_huge_dims() {
        let t = Tensor::new(&[0, usize::MAX, 2], 1i32, Device::Cpu);
        assert_eq!(t.numel(), 0);
        assert_eq!(t.shape(), &[0, usize::MAX, 2]);
        assert!(t.at(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_default() {
        let t = Tensor::<f64>::default();
        assert!(t.is_scalar());
        assert_eq!(t.to_vec(), [0.0]);
        assert_eq!(t.device(), Device::Cpu);
    }

    #[test]
    fn test_from_vec() {
        let t = Tensor::from_vec(vec![1i32, 2, 3, 4, 5, 6], &[2, 3], Device::Cpu).unwrap();
        assert_eq!(t.at(&[1, 1]).unwrap(), 5);

        let err = Tensor::from_vec(vec![1i32, 2, 3], &[2, 2], Device::Cpu).unwrap_err();
        assert_eq!(
            err,
            Error::BufferLengthMismatch {
                shape: vec![2, 2],
                expected: 4,
                got: 3
            }
        );

        let err = Tensor::from_vec(vec![1i32], &[usize::MAX, 2], Device::Cpu).unwrap_err();
        assert_eq!(err, Error::shape_overflow(&[usize::MAX, 2]));
    }

    #[test]
    fn test_at_mut() {
        let mut t = Tensor::<i32>::zeros(&[2, 2]);
        *t.at_mut(&[1, 0]).unwrap() = 7;
        assert_eq!(t.at(&[1, 0]).unwrap(), 7);
        assert_eq!(t.to_vec(), [0, 0, 7, 0]);
    }

    #[test]
    fn test_at_errors() {
        let mut t = Tensor::<i32>::zeros(&[2, 2]);
        assert!(matches!(
            t.at(&[2, 0]),
            Err(Error::IndexOutOfBounds { dim: 0, .. })
        ));
        assert!(matches!(
            t.at_mut(&[0, 0, 0]),
            Err(Error::InvalidIndexArity {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Tensor::<f32>::ones(&[3]);
        let mut b = a.clone();
        *b.at_mut(&[0]).unwrap() = 9.0;
        assert_eq!(a.to_vec(), [1.0, 1.0, 1.0]);
        assert_eq!(b.to_vec(), [9.0, 1.0, 1.0]);
    }

    #[test]
    fn test_reshape() {
        let mut t = Tensor::from_vec((0..6).collect::<Vec<i32>>(), &[2, 3], Device::Cpu).unwrap();
        t.reshape(&[3, 2]).unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t.to_vec(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(t.at(&[1, 0]).unwrap(), 2);
    }

    #[test]
    fn test_reshape_mismatch_leaves_tensor() {
        let mut t = Tensor::<i32>::zeros(&[2, 3]);
        let err = t.reshape(&[4, 2]).unwrap_err();
        assert_eq!(err, Error::reshape(&[2, 3], &[4, 2]));
        assert_eq!(t.shape(), &[2, 3]);
    }

    #[test]
    fn test_reshape_overflowing_shape() {
        let mut t = Tensor::new(&[4], 1i32, Device::Cpu);
        let err = t.reshape(&[usize::MAX / 4 + 1, 4]).unwrap_err();
        assert_eq!(err, Error::reshape(&[4], &[usize::MAX / 4 + 1, 4]));
        assert_eq!(t.shape(), &[4]);
        assert_eq!(t.at(&[3]).unwrap(), 1);
    }

    #[test]
    fn test_reshape_empty_to_huge_dims() {
        let mut t = Tensor::<f32>::zeros(&[0]);
        t.reshape(&[0, usize::MAX, 2]).unwrap();
        assert_eq!(t.shape(), &[0, usize::MAX, 2]);
        assert_eq!(t.numel(), 0);
    }

    #[test]
    fn test_display() {
        let mut t = Tensor::new(&[2, 3], 5i32, Device::Cpu);
        *t.at_mut(&[0, 0]).unwrap() = 10;
        assert_eq!(
            t.to_string(),
            "Tensor (device: CPU, shape: [2, 3]): [10, 5, 5, 5, 5, 5]"
        );

        let g = Tensor::new(&[2, 2], 1.5f64, Device::Gpu);
        assert_eq!(
            g.to_string(),
            "Tensor (device: GPU, shape: [2, 2]): [1.5, 1.5, 1.5, 1.5]"
        );
    }

    #[test]
    fn test_debug() {
        let t = Tensor::<f32>::zeros(&[2]);
        assert_eq!(
            format!("{:?}", t),
            "Tensor { shape: [2], dtype: F32, device: Cpu }"
        );
    }
}
