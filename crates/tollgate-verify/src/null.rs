use tollgate_core::{messages, Violation, ViolationKind};

use crate::report::reject;

/// Verifies that a value is present.
///
/// Fails with [`ViolationKind::Null`] for `None`. Does not allocate unless it fails.
#[inline]
pub fn not_null<T: ?Sized>(value: Option<&T>, param_name: &str) -> Result<(), Violation> {
    if value.is_none() {
        return reject(Violation::for_param_with_message(
            ViolationKind::Null,
            param_name,
            messages::NULL,
        ));
    }
    Ok(())
}
