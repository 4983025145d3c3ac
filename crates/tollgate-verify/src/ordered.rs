use chrono::TimeDelta;
use num_traits::Zero;
use tollgate_core::Scalar;

/// A totally ordered value with a zero, usable by the range checks.
///
/// `Into<Scalar>` is what lets a failed check record the actual value and the
/// limit in its violation.
pub trait OrderedValue: PartialOrd + Copy + Into<Scalar> {
    /// The additive identity; the exclusive lower limit of
    /// [`is_strictly_positive`](crate::is_strictly_positive).
    fn zero() -> Self;
}

macro_rules! ordered_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OrderedValue for $ty {
                #[inline]
                fn zero() -> Self {
                    <$ty as Zero>::zero()
                }
            }
        )*
    };
}

ordered_value!(i32, i64, u32, u64, usize, f32, f64);

impl OrderedValue for TimeDelta {
    #[inline]
    fn zero() -> Self {
        TimeDelta::zero()
    }
}
