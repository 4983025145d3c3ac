use tollgate_core::Violation;

/// Logs a failed check and hands the violation back to the caller.
#[cold]
#[inline(never)]
pub(crate) fn reject(violation: Violation) -> Result<(), Violation> {
    tracing::debug!(
        target: "tollgate::verify",
        param = violation.param_name().unwrap_or_default(),
        kind = %violation.kind(),
        "{}",
        violation
    );
    Err(violation)
}
