//! # minitensor
//!
//! **Small, embeddable n-dimensional tensors for Rust.**
//!
//! minitensor provides a generic `Tensor<T>` that owns a contiguous row-major
//! buffer and a shape, with:
//!
//! - **Element access**: checked multi-dimensional indexing
//! - **Broadcasting**: element-wise `add` / `sub` across differently shaped tensors
//! - **Scalar arithmetic**: `mul_scalar` / `div_scalar`
//! - **Dot product**: for 1-D tensors
//! - **Reshape**: in place, without moving data
//!
//! Each tensor carries a [`Device`](device::Device) label. The label is
//! propagated through arithmetic but never changes how anything is computed:
//! all work happens on the host, synchronously.
//!
//! ## Quick Start
//!
//! ```
//! use minitensor::prelude::*;
//!
//! let mut m = Tensor::new(&[2, 3], 5i32, Device::Cpu);
//! *m.at_mut(&[0, 0])? = 10;
//!
//! let m = m.add(&Tensor::new(&[1, 3], 2, Device::Cpu))?;
//! let mut scaled = &m * 3;
//! scaled.reshape(&[3, 2])?;
//! assert_eq!(
//!     scaled.to_string(),
//!     "Tensor (device: CPU, shape: [3, 2]): [36, 21, 21, 21, 21, 21]"
//! );
//! # Ok::<(), minitensor::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element types (`half::f16`, `half::bf16`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod device;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::device::Device;
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{Layout, Shape, Tensor};
}
