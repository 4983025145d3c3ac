use std::any::type_name;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Inner error chained to a violation.
///
/// Keeps the concrete type name captured at construction so the link survives
/// an encode/decode round trip by type identity even though the error value
/// itself is not serializable.
#[derive(Debug)]
pub struct Cause {
    type_name: Cow<'static, str>,
    error: Box<dyn Error + Send + Sync + 'static>,
}

impl Cause {
    /// Wraps an error, recording its type name.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let error: Box<dyn Error + Send + Sync + 'static> = Box::new(error);
        // A decoded cause re-wrapped keeps the name of the type it stands for.
        let type_name = match error.downcast_ref::<RestoredCause>() {
            Some(restored) => Cow::Owned(restored.type_name.clone()),
            None => Cow::Borrowed(type_name::<E>()),
        };
        Self { type_name, error }
    }

    /// Fully qualified type name of the wrapped error.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Borrow the wrapped error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Borrow the wrapped error as `E`, if that is its concrete type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// True when the wrapped error is, or was decoded from, an `E`.
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.error.is::<E>() || self.type_name == type_name::<E>()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for Cause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

/// Stand-in for a cause that was decoded from its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RestoredCause {
    type_name: String,
    message: String,
}

impl RestoredCause {
    /// Type name of the original error.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Display text of the original error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize)]
struct CauseRecordRef<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    message: String,
}

#[derive(Deserialize)]
struct CauseRecord {
    #[serde(rename = "type")]
    type_name: String,
    message: String,
}

impl Serialize for Cause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CauseRecordRef {
            type_name: &self.type_name,
            message: self.error.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cause {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = CauseRecord::deserialize(deserializer)?;
        Ok(Self {
            type_name: Cow::Owned(record.type_name.clone()),
            error: Box::new(RestoredCause {
                type_name: record.type_name,
                message: record.message,
            }),
        })
    }
}
