//! Default English message texts.
//!
//! Callers that localize pass their own resolved text to the `Violation`
//! constructors; these constants are used whenever no text is supplied.

/// Absent value.
pub const NULL: &str = "Value cannot be null.";
/// Zero-length string.
pub const EMPTY_STRING: &str = "Value cannot be an empty string.";
/// Sequence without elements.
pub const EMPTY_COLLECTION: &str = "Value cannot be an empty collection.";
/// Generic range failure, used when a range violation carries no text.
pub const OUT_OF_RANGE: &str = "Specified argument was out of the range of valid values.";
/// Value at or below zero.
pub const STRICTLY_POSITIVE: &str = "Value must be strictly positive.";
/// Value at or below an exclusive lower limit.
pub const STRICTLY_GREATER_THAN: &str = "Value must be strictly greater than the lower limit.";
/// Value at or above an exclusive upper limit.
pub const STRICTLY_LESS_THAN: &str = "Value must be strictly less than the upper limit.";
/// Type descriptor that cannot be instantiated.
pub const INSTANTIABLE: &str = "Value must be a type that can be instantiated.";
/// Reason text for interfaces and abstract base types.
pub const INTERFACE_OR_ABSTRACT: &str =
    "Types representing interface or abstract base classes are invalid.";
/// Reason text for open generic definitions.
pub const OPEN_GENERIC: &str = "Open generic type definitions are invalid.";
