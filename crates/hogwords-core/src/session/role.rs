use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation role of the current session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    /// No usable session. Also the fallback for anything unrecognized.
    #[default]
    Guest,
}

impl Role {
    /// Map a backend role tag to a role. Tags are case-sensitive; anything
    /// other than `STUDENT`, `TEACHER` or `ADMIN` is a guest.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "STUDENT" => Self::Student,
            "TEACHER" => Self::Teacher,
            "ADMIN" => Self::Admin,
            _ => Self::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Admin => "ADMIN",
            Self::Guest => "GUEST",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Guest)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
