//! Operation outcomes.

/// Outcome of executing, undoing, or redoing an operation.
///
/// Expected domain failures travel through this type as values; the `Err`
/// path is reserved for programmer errors elsewhere in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    /// Successful outcome with a human-readable message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed outcome with a human-readable reason.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let result = OperationResult::ok("added");
        assert!(result.success);
        assert_eq!(result.message, "added");

        let result = OperationResult::fail("container not found");
        assert!(!result.success);
        assert_eq!(result.message, "container not found");
    }
}
