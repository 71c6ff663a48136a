//! Broadcasting binary arithmetic

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::{broadcast_shapes, Layout, Tensor};
use smallvec::{smallvec, SmallVec};

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
}

impl BinaryOp {
    #[inline]
    fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
        }
    }
}

impl<T: Element> Tensor<T> {
    /// Element-wise addition with broadcasting
    ///
    /// The result takes the broadcast shape of both operands and the device
    /// label of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::prelude::*;
    ///
    /// let a = Tensor::new(&[2, 3], 5.0f32, Device::Cpu);
    /// let b = Tensor::new(&[1, 3], 2.0f32, Device::Cpu);
    /// let c = a.add(&b)?;
    /// assert_eq!(c.shape(), &[2, 3]);
    /// assert!(c.as_slice().iter().all(|&v| v == 7.0));
    /// # Ok::<(), minitensor::error::Error>(())
    /// ```
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        binary_op(BinaryOp::Add, self, other)
    }

    /// Element-wise subtraction with broadcasting
    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        binary_op(BinaryOp::Sub, self, other)
    }
}

/// Execute a binary operation with broadcasting support
///
/// Each operand is read through strides computed against the output shape
/// (0 along broadcast dimensions), so every output coordinate maps onto each
/// operand using only that operand's own shape.
fn binary_op<T: Element>(op: BinaryOp, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let out_shape = broadcast_shapes(a.shape(), b.shape())
        .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;
    let out_layout =
        Layout::try_contiguous(&out_shape).ok_or_else(|| Error::shape_overflow(&out_shape))?;

    log::trace!(
        "{:?}: {} with {} -> {}",
        op,
        a.layout(),
        b.layout(),
        out_layout
    );

    // Fast path: identical shapes need no index mapping
    if a.shape() == b.shape() {
        let data = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(&x, &y)| op.apply(x, y))
            .collect();
        return Ok(Tensor::from_parts(data, out_layout, a.device()));
    }

    let a_strides = a
        .layout()
        .broadcast_strides(&out_shape)
        .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;
    let b_strides = b
        .layout()
        .broadcast_strides(&out_shape)
        .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let ndim = out_shape.ndim();
    let total = out_layout.elem_count();

    let mut out = Vec::with_capacity(total);
    let mut indices: SmallVec<[usize; 4]> = smallvec![0; ndim];
    let mut a_idx = 0usize;
    let mut b_idx = 0usize;

    for _ in 0..total {
        out.push(op.apply(a_data[a_idx], b_data[b_idx]));

        // Increment multi-dimensional index with incremental offset updates
        for dim in (0..ndim).rev() {
            indices[dim] += 1;
            a_idx += a_strides[dim];
            b_idx += b_strides[dim];

            if indices[dim] < out_shape[dim] {
                break;
            }

            // Reset this dimension and rewind offsets
            indices[dim] = 0;
            a_idx -= out_shape[dim] * a_strides[dim];
            b_idx -= out_shape[dim] * b_strides[dim];
        }
    }

    Ok(Tensor::from_parts(out, out_layout, a.device()))
}
