//! Element trait for mapping Rust types to DType

use super::DType;
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a tensor
///
/// This is the numeric capability set a tensor needs: the four arithmetic
/// operators, an exact zero test and a default value.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialEq + Default` - Zero test and default fill value
/// - `Display + Debug` - Textual rendering of tensors
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialEq
    + Default
    + Display
    + Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Whether this value compares equal to zero
    ///
    /// Negative zero counts as zero for floating point types.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! impl_element {
    ($ty:ty, $dtype:ident, $zero:expr, $one:expr) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }
        }
    };
}

impl_element!(f64, F64, 0.0, 1.0);
impl_element!(f32, F32, 0.0, 1.0);
impl_element!(i64, I64, 0, 1);
impl_element!(i32, I32, 0, 1);
impl_element!(i16, I16, 0, 1);
impl_element!(i8, I8, 0, 1);
impl_element!(u64, U64, 0, 1);
impl_element!(u32, U32, 0, 1);
impl_element!(u16, U16, 0, 1);
impl_element!(u8, U8, 0, 1);

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl_element!(half::f16, F16, half::f16::ZERO, half::f16::ONE);

#[cfg(feature = "f16")]
impl_element!(half::bf16, BF16, half::bf16::ZERO, half::bf16::ONE);
