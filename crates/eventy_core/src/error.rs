use std::fmt;

/// Errors raised when an attached file violates the image constraints.
///
/// Display output is the exact notification text shown to the user.
#[derive(Debug, Clone)]
pub enum FileConstraintError {
    /// MIME type is not `image/*`
    NotAnImage { mime_type: String },
    /// File exceeds the maximum image size
    TooLarge { size: u64 },
}

impl fmt::Display for FileConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileConstraintError::NotAnImage { .. } => {
                write!(f, "Please upload an image file")
            }
            FileConstraintError::TooLarge { .. } => {
                write!(f, "Image size should be less than 5MB")
            }
        }
    }
}

impl std::error::Error for FileConstraintError {}

/// A point fell outside the supported selection region.
///
/// Carries the rejected coordinates for logging; Display is the user message.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryError {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please select a location within Egypt's borders")
    }
}

impl std::error::Error for BoundaryError {}

/// Errors raised while assembling the submission payload.
///
/// A draft that passed every step validator never produces these; they guard
/// direct payload construction from an unvalidated draft.
#[derive(Debug)]
pub enum PayloadError {
    MissingField(&'static str),
    InvalidDate(jiff::Error),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::MissingField(name) => write!(f, "missing required field: {name}"),
            PayloadError::InvalidDate(e) => write!(f, "invalid event date: {e}"),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadError::InvalidDate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jiff::Error> for PayloadError {
    fn from(err: jiff::Error) -> Self {
        PayloadError::InvalidDate(err)
    }
}
