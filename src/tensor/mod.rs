//! Tensor types and operations
//!
//! This module provides the core `Tensor` type, an n-dimensional array owning
//! a contiguous row-major buffer, along with its `Shape` and `Layout`.

mod core;
mod layout;
mod shape;

pub use self::core::Tensor;
pub use layout::{Layout, Strides};
pub use shape::{broadcast_shapes, Shape};
