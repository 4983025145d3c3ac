use tollgate_core::{messages, Violation};

use crate::ordered::OrderedValue;
use crate::report::reject;

/// Verifies that `value` is greater than zero.
///
/// Fails with `RangeLower` carrying zero as the exclusive limit. NaN is not
/// ordered against zero and passes.
#[inline]
pub fn is_strictly_positive<T: OrderedValue>(value: T, param_name: &str) -> Result<(), Violation> {
    let zero = T::zero();
    if value <= zero {
        return reject(Violation::exceeds_lower_limit(
            param_name,
            value,
            zero,
            messages::STRICTLY_POSITIVE,
        ));
    }
    Ok(())
}

/// Verifies that `lower_limit < value < upper_limit`.
///
/// The lower limit is checked first and a failure there returns without
/// looking at the upper limit. The limits themselves are not validated
/// against each other.
#[inline]
pub fn is_strictly_in_range<T: OrderedValue>(
    value: T,
    lower_limit: T,
    upper_limit: T,
    param_name: &str,
) -> Result<(), Violation> {
    if value <= lower_limit {
        return reject(Violation::exceeds_lower_limit(
            param_name,
            value,
            lower_limit,
            messages::STRICTLY_GREATER_THAN,
        ));
    }
    if value >= upper_limit {
        return reject(Violation::exceeds_upper_limit(
            param_name,
            value,
            upper_limit,
            messages::STRICTLY_LESS_THAN,
        ));
    }
    Ok(())
}
