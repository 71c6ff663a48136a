//! Scalar arithmetic

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use std::ops::Mul;

/// Scalar operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScalarOp {
    /// Multiplication: a * s
    Mul,
    /// Division: a / s
    Div,
}

impl<T: Element> Tensor<T> {
    /// Multiply every element by `scalar`
    pub fn mul_scalar(&self, scalar: T) -> Tensor<T> {
        scalar_op(ScalarOp::Mul, self, scalar)
    }

    /// Divide every element by `scalar`
    ///
    /// The divisor is checked once up front: an exact zero fails with
    /// [`Error::DivisionByZero`] before any element is touched.
    pub fn div_scalar(&self, scalar: T) -> Result<Tensor<T>> {
        if scalar.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(scalar_op(ScalarOp::Div, self, scalar))
    }
}

fn scalar_op<T: Element>(op: ScalarOp, a: &Tensor<T>, scalar: T) -> Tensor<T> {
    let data = match op {
        ScalarOp::Mul => a.as_slice().iter().map(|&x| x * scalar).collect(),
        ScalarOp::Div => a.as_slice().iter().map(|&x| x / scalar).collect(),
    };
    Tensor::from_parts(data, a.layout().clone(), a.device())
}

impl<T: Element> Mul<T> for &Tensor<T> {
    type Output = Tensor<T>;

    fn mul(self, scalar: T) -> Tensor<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Element> Mul<T> for Tensor<T> {
    type Output = Tensor<T>;

    fn mul(self, scalar: T) -> Tensor<T> {
        self.mul_scalar(scalar)
    }
}
