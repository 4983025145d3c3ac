use std::fmt;

use serde::{Deserialize, Serialize};

use crate::messages;

/// Discriminates the closed set of precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value was absent.
    Null,
    /// The string had zero length.
    EmptyString,
    /// The sequence had zero elements.
    EmptyCollection,
    /// The value was at or below an exclusive lower limit.
    RangeLower,
    /// The value was at or above an exclusive upper limit.
    RangeUpper,
    /// The type descriptor cannot be instantiated.
    NotInstantiable,
}

impl ViolationKind {
    /// Stable snake_case name, identical to the encoded form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Null => "null",
            ViolationKind::EmptyString => "empty_string",
            ViolationKind::EmptyCollection => "empty_collection",
            ViolationKind::RangeLower => "range_lower",
            ViolationKind::RangeUpper => "range_upper",
            ViolationKind::NotInstantiable => "not_instantiable",
        }
    }

    /// Text used when a violation of this kind is built without a message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ViolationKind::Null => messages::NULL,
            ViolationKind::EmptyString => messages::EMPTY_STRING,
            ViolationKind::EmptyCollection => messages::EMPTY_COLLECTION,
            ViolationKind::RangeLower | ViolationKind::RangeUpper => messages::OUT_OF_RANGE,
            ViolationKind::NotInstantiable => messages::INSTANTIABLE,
        }
    }

    /// True for the kinds that carry an actual value and a limit.
    pub fn is_range(&self) -> bool {
        matches!(self, ViolationKind::RangeLower | ViolationKind::RangeUpper)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a type descriptor was rejected as not instantiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotInstantiableReason {
    /// The descriptor denotes an interface.
    Interface,
    /// The descriptor denotes an abstract base type.
    Abstract,
    /// The descriptor has unbound type parameters.
    OpenGeneric,
}

impl NotInstantiableReason {
    /// Human-readable explanation appended to the violation message.
    pub fn describe(&self) -> &'static str {
        match self {
            NotInstantiableReason::Interface | NotInstantiableReason::Abstract => {
                messages::INTERFACE_OR_ABSTRACT
            }
            NotInstantiableReason::OpenGeneric => messages::OPEN_GENERIC,
        }
    }
}
