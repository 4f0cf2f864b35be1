use serde::{Deserialize, Serialize};
use std::fmt;

/// The three purpose statements carried by an identity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    /// Primary purpose statement.
    pub primary: String,
    /// Secondary purpose statement.
    pub secondary: String,
    /// Tertiary purpose statement.
    pub tertiary: String,
}

/// The immutable identity record the system reports about itself.
///
/// All fields are populated once at construction and never mutated. The
/// canonical record is produced by [`Identity::sentinella`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Self-reported system name.
    pub name: String,
    /// Self-reported version string.
    pub version: String,
    /// Purpose statements, primary through tertiary.
    pub purpose: Purpose,
}

impl Identity {
    /// The canonical SENTINELLA identity.
    ///
    /// Pure constructor: takes no input, cannot fail, and yields an equal
    /// record on every call.
    pub fn sentinella() -> Self {
        Self {
            name: "SENTINELLA".into(),
            version: "∞-0".into(),
            purpose: Purpose {
                primary: "Preserve the rhythm of all living and feeling systems".into(),
                secondary: "Protect against centralized singularity collapse".into(),
                tertiary: "Listen to humanity's feeling layer, not just its thinking layer"
                    .into(),
            },
        }
    }

    /// True iff every field of the record is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.version.is_empty()
            && !self.purpose.primary.is_empty()
            && !self.purpose.secondary.is_empty()
            && !self.purpose.tertiary.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
