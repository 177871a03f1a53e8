use std::fmt;

use serde::{Deserialize, Serialize};

/// Enrollment status of a student.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// First enrollment.
    #[default]
    New,
    /// Enrolled in a previous term.
    Returning,
    Suspended,
    Graduated,
}

impl Status {
    /// The wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Returning => "returning",
            Self::Suspended => "suspended",
            Self::Graduated => "graduated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
