use std::error::Error;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::cause::Cause;
use crate::descriptor::TypeDescriptor;
use crate::kind::{NotInstantiableReason, ViolationKind};
use crate::scalar::Scalar;

/// Structured failure produced when a precondition does not hold.
///
/// The message is the resolved base text; `Display` appends the parameter
/// name and whichever payload fields are present. Fields are set once by the
/// constructor that receives them and are read-only afterwards.
#[derive(Debug, Error)]
#[error("{message}{payload}")]
pub struct Violation {
    message: String,
    payload: Payload,
    #[source]
    cause: Option<Cause>,
}

#[derive(Debug, Clone, PartialEq)]
struct Payload {
    kind: ViolationKind,
    param_name: Option<String>,
    actual_value: Option<Scalar>,
    limit: Option<Scalar>,
    type_descriptor: Option<TypeDescriptor>,
    reason: Option<NotInstantiableReason>,
}

impl Payload {
    fn bare(kind: ViolationKind) -> Self {
        Self {
            kind,
            param_name: None,
            actual_value: None,
            limit: None,
            type_descriptor: None,
            reason: None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(param_name) = &self.param_name {
            write!(f, " (Parameter '{}')", param_name)?;
        }
        if let Some(actual_value) = &self.actual_value {
            write!(f, "\nActual value was {}.", actual_value)?;
        }
        if let Some(limit) = &self.limit {
            match self.kind {
                ViolationKind::RangeUpper => write!(f, "\nUpper limit: {}", limit)?,
                _ => write!(f, "\nLower limit: {}", limit)?,
            }
        }
        if let Some(type_descriptor) = &self.type_descriptor {
            write!(f, "\nType: {}", type_descriptor)?;
        }
        if let Some(reason) = &self.reason {
            write!(f, "\n{}", reason.describe())?;
        }
        Ok(())
    }
}

fn resolve(kind: ViolationKind, message: String) -> String {
    if message.is_empty() {
        kind.default_message().to_string()
    } else {
        message
    }
}

impl Violation {
    fn assemble(
        kind: ViolationKind,
        message: String,
        payload: Payload,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            message: resolve(kind, message),
            payload,
            cause,
        }
    }

    /// Violation with the kind's default message and no payload.
    pub fn new(kind: ViolationKind) -> Self {
        Self::assemble(kind, String::new(), Payload::bare(kind), None)
    }

    /// Violation carrying only a message. An empty message falls back to the default.
    pub fn with_message(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self::assemble(kind, message.into(), Payload::bare(kind), None)
    }

    /// Violation naming the offending parameter, with the default message.
    pub fn for_param(kind: ViolationKind, param_name: impl Into<String>) -> Self {
        Self::for_param_with_message(kind, param_name, String::new())
    }

    /// Violation naming the offending parameter, with a resolved message.
    pub fn for_param_with_message(
        kind: ViolationKind,
        param_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let payload = Payload {
            param_name: Some(param_name.into()),
            ..Payload::bare(kind)
        };
        Self::assemble(kind, message.into(), payload, None)
    }

    /// Violation chained to an inner error.
    pub fn with_cause<E>(kind: ViolationKind, message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::assemble(kind, message.into(), Payload::bare(kind), Some(Cause::new(cause)))
    }

    /// `RangeLower` violation with the actual value and the exclusive lower limit.
    pub fn exceeds_lower_limit(
        param_name: impl Into<String>,
        actual_value: impl Into<Scalar>,
        lower_limit: impl Into<Scalar>,
        message: impl Into<String>,
    ) -> Self {
        Self::range(
            ViolationKind::RangeLower,
            param_name.into(),
            actual_value.into(),
            lower_limit.into(),
            message.into(),
        )
    }

    /// `RangeUpper` violation with the actual value and the exclusive upper limit.
    pub fn exceeds_upper_limit(
        param_name: impl Into<String>,
        actual_value: impl Into<Scalar>,
        upper_limit: impl Into<Scalar>,
        message: impl Into<String>,
    ) -> Self {
        Self::range(
            ViolationKind::RangeUpper,
            param_name.into(),
            actual_value.into(),
            upper_limit.into(),
            message.into(),
        )
    }

    fn range(
        kind: ViolationKind,
        param_name: String,
        actual_value: Scalar,
        limit: Scalar,
        message: String,
    ) -> Self {
        let payload = Payload {
            param_name: Some(param_name),
            actual_value: Some(actual_value),
            limit: Some(limit),
            ..Payload::bare(kind)
        };
        Self::assemble(kind, message, payload, None)
    }

    /// `NotInstantiable` violation describing the rejected type and why.
    pub fn not_instantiable(
        param_name: impl Into<String>,
        type_descriptor: TypeDescriptor,
        reason: NotInstantiableReason,
        message: impl Into<String>,
    ) -> Self {
        let kind = ViolationKind::NotInstantiable;
        let payload = Payload {
            param_name: Some(param_name.into()),
            type_descriptor: Some(type_descriptor),
            reason: Some(reason),
            ..Payload::bare(kind)
        };
        Self::assemble(kind, message.into(), payload, None)
    }

    /// Kind of the violated precondition.
    pub fn kind(&self) -> ViolationKind {
        self.payload.kind
    }

    /// Name of the checked parameter, if known.
    pub fn param_name(&self) -> Option<&str> {
        self.payload.param_name.as_deref()
    }

    /// Resolved base message, without the appended diagnostics.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending value of a range violation.
    pub fn actual_value(&self) -> Option<&Scalar> {
        self.payload.actual_value.as_ref()
    }

    /// The exclusive limit of a range violation; lower or upper per `kind()`.
    pub fn limit(&self) -> Option<&Scalar> {
        self.payload.limit.as_ref()
    }

    /// The limit, if this is a `RangeLower` violation.
    pub fn lower_limit(&self) -> Option<&Scalar> {
        match self.kind() {
            ViolationKind::RangeLower => self.limit(),
            _ => None,
        }
    }

    /// The limit, if this is a `RangeUpper` violation.
    pub fn upper_limit(&self) -> Option<&Scalar> {
        match self.kind() {
            ViolationKind::RangeUpper => self.limit(),
            _ => None,
        }
    }

    /// The rejected type of a `NotInstantiable` violation.
    pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
        self.payload.type_descriptor.as_ref()
    }

    /// Why the type was rejected.
    pub fn reason(&self) -> Option<NotInstantiableReason> {
        self.payload.reason
    }

    /// The chained inner error.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

#[derive(Serialize)]
struct ViolationRecordRef<'a> {
    kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    param_name: Option<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_value: Option<&'a Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<&'a Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_descriptor: Option<&'a TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<NotInstantiableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<&'a Cause>,
}

#[derive(Deserialize)]
struct ViolationRecord {
    kind: ViolationKind,
    param_name: Option<String>,
    #[serde(default)]
    message: String,
    actual_value: Option<Scalar>,
    limit: Option<Scalar>,
    type_descriptor: Option<TypeDescriptor>,
    reason: Option<NotInstantiableReason>,
    cause: Option<Cause>,
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ViolationRecordRef {
            kind: self.payload.kind,
            param_name: self.param_name(),
            message: &self.message,
            actual_value: self.actual_value(),
            limit: self.limit(),
            type_descriptor: self.type_descriptor(),
            reason: self.reason(),
            cause: self.cause(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Violation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ViolationRecord::deserialize(deserializer)?;
        let payload = Payload {
            kind: record.kind,
            param_name: record.param_name,
            actual_value: record.actual_value,
            limit: record.limit,
            type_descriptor: record.type_descriptor,
            reason: record.reason,
        };
        Ok(Self::assemble(record.kind, record.message, payload, record.cause))
    }
}
