//! Tensor operations
//!
//! Operations are inherent methods on [`Tensor`](crate::tensor::Tensor),
//! grouped by kind:
//!
//! ```text
//! Tensor<T>
//!   ├── add, sub               (broadcasting binary arithmetic)
//!   ├── mul_scalar, div_scalar (scalar arithmetic, plus `*` sugar)
//!   └── dot                    (1-D inner product)
//! ```
//!
//! Every operation reads its operands and returns a newly allocated tensor;
//! none of them mutate their inputs.

mod arithmetic;
mod reduce;
mod scalar;

pub use arithmetic::BinaryOp;
pub use scalar::ScalarOp;
