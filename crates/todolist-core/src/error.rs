//! Core domain errors.

use thiserror::Error;

/// Core domain errors for todo lists.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A value without the todo capabilities was offered as a todo.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Position-addressed access outside `[0, size)`.
    #[error("Index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias.
pub type TodoResult<T> = Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TodoError::IndexOutOfRange { index: 9, size: 3 };
        assert_eq!(err.to_string(), "Index 9 out of range for list of size 3");

        let err = TodoError::TypeMismatch {
            expected: "todo",
            found: "string",
        };
        assert_eq!(err.to_string(), "Type mismatch: expected todo, found string");

        let err = TodoError::InvalidInput("todo title cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: todo title cannot be empty");
    }
}
