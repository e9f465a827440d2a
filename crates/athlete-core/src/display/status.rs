//! Confirmation messages for completed operations.

use std::fmt;

/// A one-line confirmation printed after a command changed something.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ {}", self.message)
    }
}
