//! Precondition checks for API boundaries.
//!
//! Each check takes the value to verify and the name of the parameter it came
//! from, returns `Ok(())` when the precondition holds and a structured
//! [`Violation`] otherwise:
//!
//! ```rust
//! use tollgate_verify::{is_strictly_in_range, not_empty_str, Violation, ViolationKind};
//!
//! fn open_pool(name: Option<&str>, size: i32) -> Result<(), Violation> {
//!     not_empty_str(name, "name")?;
//!     is_strictly_in_range(size, 0, 64, "size")?;
//!     Ok(())
//! }
//!
//! let err = open_pool(Some("primary"), 64).unwrap_err();
//! assert_eq!(err.kind(), ViolationKind::RangeUpper);
//! assert_eq!(err.param_name(), Some("size"));
//! ```
//!
//! Every check has a `debug_*!` macro twin that only exists in debug builds
//! (or with the `debug-checks` feature); see [`debug_checks_enabled`].
//!
//! Failed checks emit a `tracing` event at debug level under the
//! `tollgate::verify` target. Nothing is logged on success.
//!
#![deny(missing_docs)]

/// Debug-gated twins of every check.
pub mod debug;
/// Emptiness checks for strings and sequences.
pub mod empty;
/// Instantiability checks for type descriptors.
pub mod instantiable;
/// Null checks.
pub mod null;
/// The ordered-value capability used by the range checks.
pub mod ordered;
/// Exclusive range and positivity checks.
pub mod range;
mod report;

pub use debug::debug_checks_enabled;
pub use empty::{not_empty, not_empty_str};
pub use instantiable::is_instantiable;
pub use null::not_null;
pub use ordered::OrderedValue;
pub use range::{is_strictly_in_range, is_strictly_positive};

pub use tollgate_core::{
    messages, Cause, NotInstantiableReason, Scalar, TypeDescriptor, TypeShape, Violation,
    ViolationKind,
};
