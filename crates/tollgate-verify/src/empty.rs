use tollgate_core::{messages, Violation, ViolationKind};

use crate::report::reject;

/// Verifies that a string is present and has at least one byte.
#[inline]
pub fn not_empty_str(value: Option<&str>, param_name: &str) -> Result<(), Violation> {
    let Some(value) = value else {
        return reject(Violation::for_param_with_message(
            ViolationKind::Null,
            param_name,
            messages::NULL,
        ));
    };
    if value.is_empty() {
        return reject(Violation::for_param_with_message(
            ViolationKind::EmptyString,
            param_name,
            messages::EMPTY_STRING,
        ));
    }
    Ok(())
}

/// Verifies that a sequence is present and yields at least one element.
///
/// When the iterator reports an exact length through `size_hint` that length
/// is used as is. Otherwise one element is read to find out, which consumes
/// it: passing `&mut` to a single-pass iterator without an exact size leaves
/// that iterator one element shorter after the check.
pub fn not_empty<I>(collection: Option<I>, param_name: &str) -> Result<(), Violation>
where
    I: IntoIterator,
{
    let Some(collection) = collection else {
        return reject(Violation::for_param_with_message(
            ViolationKind::Null,
            param_name,
            messages::NULL,
        ));
    };
    let mut iter = collection.into_iter();
    let is_empty = match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => lower == 0,
        _ => iter.next().is_none(),
    };
    if is_empty {
        return reject(Violation::for_param_with_message(
            ViolationKind::EmptyCollection,
            param_name,
            messages::EMPTY_COLLECTION,
        ));
    }
    Ok(())
}
