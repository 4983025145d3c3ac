//! Violation model for Tollgate precondition checks.
//!
//! A [`Violation`] is the single failure value produced by the checks in
//! `tollgate-verify`. Its [`ViolationKind`] is a closed, exhaustively matchable
//! set; the payload fields (parameter name, actual value, limit, rejected type)
//! are optional, read-only, and survive an encode/decode round trip.
//!
#![deny(missing_docs)]

/// Inner-cause link carried by violations.
pub mod cause;
/// JSON encoding helpers and codec errors.
pub mod codec;
/// Type descriptors for instantiability checks.
pub mod descriptor;
/// Violation kinds and rejection reasons.
pub mod kind;
/// Default English message texts.
pub mod messages;
/// Numeric payload values (i32, i64, u64, f64, duration).
pub mod scalar;
/// The violation value itself.
pub mod violation;

pub use cause::{Cause, RestoredCause};
pub use codec::ViolationCodecError;
pub use descriptor::{GenericArg, TypeDescriptor, TypeShape};
pub use kind::{NotInstantiableReason, ViolationKind};
pub use scalar::Scalar;
pub use violation::Violation;
