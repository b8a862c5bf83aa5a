use std::fmt::{self, Display};

/// Errors produced when parsing model values from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownMediaKind(String),
    UnknownTimeWindow(String),
    UnknownCategory(String),
    UnknownImageSize(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownMediaKind(raw) => {
                write!(f, "unknown media kind '{raw}'")
            }
            ModelError::UnknownTimeWindow(raw) => {
                write!(f, "unknown time window '{raw}' (expected day or week)")
            }
            ModelError::UnknownCategory(raw) => {
                write!(f, "unknown list category '{raw}'")
            }
            ModelError::UnknownImageSize(raw) => {
                write!(f, "unknown image size '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

