//! Coordinate and count values that may be definite or uncertain.
//!
//! Used for `SequenceLocation::start`/`end` and `CopyNumberCount::copies`.
//! Modeled as a tagged sum rather than a nullable pair, per the "maybe
//! object, maybe reference" design note (§9) generalized to "maybe definite,
//! maybe ranged".

use serde::{Deserialize, Serialize};

/// A non-negative integer, or an uncertain range `[lower, upper]` with
/// `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Definite(u64),
    Range(u64, u64),
}

impl Number {
    pub fn is_definite(&self) -> bool {
        matches!(self, Number::Definite(_))
    }

    /// Returns the definite value, if this is not a range.
    pub fn as_definite(&self) -> Option<u64> {
        match self {
            Number::Definite(v) => Some(*v),
            Number::Range(_, _) => None,
        }
    }

    /// Canonical JSON form: an integer, or a two-element array.
    pub fn to_json(self) -> serde_json::Value {
        match self {
            Number::Definite(v) => serde_json::Value::from(v),
            Number::Range(lo, hi) => serde_json::json!([lo, hi]),
        }
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Number::Definite(v)
    }
}
