//! Label - Classification outcome for a message

use serde::{Deserialize, Serialize};

/// Classification outcome
///
/// Persisted and transported as its integer code: `-1` unknown, `0` ham, `1` spam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum Label {
    #[default]
    Unknown,
    Ham,
    Spam,
}

impl Label {
    /// Integer code used on the wire and in storage
    pub fn code(self) -> i32 {
        match self {
            Label::Unknown => -1,
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

    /// Interpret a stored code, treating anything unrecognised as unknown
    pub fn from_code_lossy(code: i32) -> Self {
        Self::try_from(code).unwrap_or(Label::Unknown)
    }
}

impl TryFrom<i32> for Label {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Label::Unknown),
            0 => Ok(Label::Ham),
            1 => Ok(Label::Spam),
            other => Err(format!("Unknown label code: {}", other)),
        }
    }
}

impl From<Label> for i32 {
    fn from(label: Label) -> Self {
        label.code()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Unknown => write!(f, "unknown"),
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}
