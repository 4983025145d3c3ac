use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Numeric payload carried by range violations.
///
/// The variant records the numeric family of the checked value so that an
/// encoded violation decodes back to the same family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Scalar {
    /// 32-bit signed integer.
    #[serde(rename = "i32")]
    I32 {
        /// Value.
        v: i32,
    },
    /// 64-bit signed integer.
    #[serde(rename = "i64")]
    I64 {
        /// Value.
        v: i64,
    },
    /// Unsigned integer (`u32`, `u64` and `usize` widen into this).
    #[serde(rename = "u64")]
    U64 {
        /// Value.
        v: u64,
    },
    /// IEEE-754 binary float (`f32` widens into this).
    ///
    /// Encoded as the lowercase hex bit pattern so that infinities and NaN
    /// payloads survive formats without non-finite numbers.
    #[serde(rename = "f64")]
    F64 {
        /// Value.
        #[serde(rename = "bits", with = "f64_bits")]
        v: f64,
    },
    /// Signed duration, split the way `chrono::TimeDelta` reports it.
    #[serde(rename = "duration")]
    Duration {
        /// Whole seconds, truncated toward zero.
        secs: i64,
        /// Sub-second nanoseconds; carries the same sign as `secs`.
        nanos: i32,
    },
}

mod f64_bits {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:016x}", v.to_bits()))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = String::deserialize(deserializer)?;
        let well_formed =
            bits.len() == 16 && bits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !well_formed {
            return Err(D::Error::custom(format!(
                "f64 bits must be 16 lowercase hex digits, got '{}'",
                bits
            )));
        }
        u64::from_str_radix(&bits, 16)
            .map(f64::from_bits)
            .map_err(D::Error::custom)
    }
}

impl Scalar {
    /// Returns the duration this scalar encodes, if it is a duration in range.
    pub fn as_time_delta(&self) -> Option<TimeDelta> {
        match *self {
            Scalar::Duration { secs, nanos } => {
                TimeDelta::try_seconds(secs)?.checked_add(&TimeDelta::nanoseconds(i64::from(nanos)))
            }
            _ => None,
        }
    }

    /// Short family name used in diagnostics (`i32`, `f64`, `duration`, ...).
    pub fn family(&self) -> &'static str {
        match self {
            Scalar::I32 { .. } => "i32",
            Scalar::I64 { .. } => "i64",
            Scalar::U64 { .. } => "u64",
            Scalar::F64 { .. } => "f64",
            Scalar::Duration { .. } => "duration",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::I32 { v } => write!(f, "{}", v),
            Scalar::I64 { v } => write!(f, "{}", v),
            Scalar::U64 { v } => write!(f, "{}", v),
            Scalar::F64 { v } => write!(f, "{}", v),
            Scalar::Duration { secs, nanos } => match self.as_time_delta() {
                Some(delta) => write!(f, "{}", delta),
                None => write!(f, "{}s{:+}ns", secs, nanos),
            },
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I32 { v }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64 { v }
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::U64 { v: u64::from(v) }
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar::U64 { v }
    }
}

impl From<usize> for Scalar {
    fn from(v: usize) -> Self {
        Scalar::U64 { v: v as u64 }
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::F64 { v: f64::from(v) }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64 { v }
    }
}

impl From<TimeDelta> for Scalar {
    fn from(delta: TimeDelta) -> Self {
        Scalar::Duration {
            secs: delta.num_seconds(),
            nanos: delta.subsec_nanos(),
        }
    }
}
