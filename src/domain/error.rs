use thiserror::Error;

/// Recoverable failures of a store operation. The store is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo text is empty")]
    EmptyInput,
    #[error("a todo with the same text already exists")]
    DuplicateTodo,
    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TodoError {
    /// Text shown to the user in the status line
    pub fn user_message(&self) -> &'static str {
        match self {
            TodoError::EmptyInput => "Please enter a valid todo item.",
            TodoError::DuplicateTodo => "This todo already exists.",
            TodoError::IndexOutOfRange { .. } => "That todo no longer exists.",
        }
    }
}
