//! Reductions

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

impl<T: Element> Tensor<T> {
    /// Inner product of two 1-D tensors of equal length
    ///
    /// Products are accumulated left to right starting from zero, so
    /// floating point results are reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::prelude::*;
    ///
    /// let a = Tensor::new(&[3], 1.0f32, Device::Cpu);
    /// let b = Tensor::new(&[3], 2.0f32, Device::Cpu);
    /// assert_eq!(a.dot(&b)?, 6.0);
    /// # Ok::<(), minitensor::error::Error>(())
    /// ```
    pub fn dot(&self, other: &Tensor<T>) -> Result<T> {
        if self.ndim() != 1 || other.ndim() != 1 || self.shape() != other.shape() {
            return Err(Error::dot(self.shape(), other.shape()));
        }

        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;

    #[test]
    fn test_dot() {
        let a = Tensor::full(&[3], 1.0f64);
        let b = Tensor::full(&[3], 2.0f64);
        assert_eq!(a.dot(&b).unwrap(), 6.0);
    }

    #[test]
    fn test_dot_values() {
        let a = Tensor::from_vec(vec![1, 2, 3], &[3], Device::Cpu).unwrap();
        let b = Tensor::from_vec(vec![4, -5, 6], &[3], Device::Gpu).unwrap();
        assert_eq!(a.dot(&b).unwrap(), 12);
    }

    #[test]
    fn test_dot_empty() {
        let a = Tensor::<f32>::zeros(&[0]);
        assert_eq!(a.dot(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_mismatch() {
        let a = Tensor::<i32>::zeros(&[3]);
        let b = Tensor::<i32>::zeros(&[4]);
        let m = Tensor::<i32>::zeros(&[3, 1]);
        assert_eq!(a.dot(&b).unwrap_err(), Error::dot(&[3], &[4]));
        assert_eq!(a.dot(&m).unwrap_err(), Error::dot(&[3], &[3, 1]));
        assert_eq!(m.dot(&m).unwrap_err(), Error::dot(&[3, 1], &[3, 1]));
    }
}
