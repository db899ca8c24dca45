use serde::Serialize;
use thiserror::Error;

/// Rejection of raw bill-amount text.
///
/// Neither variant mutates engine state. The interface layer turns these into
/// a modal [`Alert`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no bill amount entered")]
    EmptyInput,
    #[error("invalid bill amount: {input:?}")]
    InvalidNumber { input: String },
}

impl ValidationError {
    /// The title/message pair shown to the user, acknowledged with a single "Ok".
    pub fn alert(&self) -> Alert {
        match self {
            ValidationError::EmptyInput => {
                Alert::new("No Amount Entered", "Please enter a bill amount.")
            }
            ValidationError::InvalidNumber { .. } => Alert::new(
                "Invalid Amount",
                "Please enter a bill amount in dollars and cents.",
            ),
        }
    }

    /// Whether the caller must wipe the raw text field so the user starts over.
    pub fn clears_input(&self) -> bool {
        matches!(self, ValidationError::InvalidNumber { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub dismiss: String,
}

impl Alert {
    fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            dismiss: "Ok".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TipError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Event error: {0}")]
    Event(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TipError>;
