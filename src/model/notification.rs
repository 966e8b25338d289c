//! Advisory messages
//!
//! Lookups that degrade to an empty or partial result (a failed log fetch,
//! a branch walk cut short) hand back their data together with warnings
//! instead of an error.

use std::fmt;

/// Warning shown next to a result, never in place of one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}
