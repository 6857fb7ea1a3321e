use std::fmt::{Debug, Display};

use num::{traits::NumAssign, Float, FromPrimitive};

/// Thresholds separating the comfortable range of a float type from the
/// edges where reciprocals and squared norms start to misbehave.
pub trait SafeConstants {
    /// Smallest value that can be used in reciprocals without producing
    /// infinities, NaNs or similar.
    fn tiny_safe() -> Self;

    /// Values below this lose precision when squared, e.g. in `norm_sqr`.
    fn small_safe() -> Self;

    /// Values above this overflow when squared.
    fn large_safe() -> Self;

    /// Is smaller in magnitude than [`SafeConstants::tiny_safe`]
    fn is_tiny(&self) -> bool;

    /// Is smaller in magnitude than [`SafeConstants::small_safe`]
    fn is_small(&self) -> bool;

    /// Is larger in magnitude than [`SafeConstants::large_safe`]
    fn is_large(&self) -> bool;
}

macro_rules! impl_safe_constants_float {
    ($t:ty) => {
        impl SafeConstants for $t {
            fn tiny_safe() -> Self {
                Self::MIN_POSITIVE
            }

            fn small_safe() -> Self {
                Self::MIN_POSITIVE.sqrt() / Self::EPSILON
            }

            fn large_safe() -> Self {
                Self::MAX * Self::small_safe()
            }

            fn is_tiny(&self) -> bool {
                self.abs() < Self::tiny_safe()
            }

            fn is_small(&self) -> bool {
                self.abs() < Self::small_safe()
            }

            fn is_large(&self) -> bool {
                self.abs() > Self::large_safe()
            }
        }
    };
}

impl_safe_constants_float!(f32);
impl_safe_constants_float!(f64);

/// The scalar type of polynomial coefficients.
///
/// Coefficients are [`num::Complex`] numbers whose parts have this type.
pub trait RealScalar:
    Float + FromPrimitive + NumAssign + SafeConstants + Debug + Display + 'static
{
}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
