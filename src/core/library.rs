use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // A contract of the ledger was broken by the caller, e.g. lending a medium that is
    // already loaned or reserving beyond the queue capacity. No state was changed.
    PreconditionViolated {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // The event recorder rejected an event. The in-memory mutation that produced the
    // event has already been applied when this is returned.
    Recording {
        message: String,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn precondition(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::PreconditionViolated { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn recording(message: &str, retryable: bool) -> LibraryError {
        LibraryError::Recording { message: message.to_string(), retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::PreconditionViolated { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Recording { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        let retryable = matches!(err.kind(),
            std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut);
        LibraryError::recording(
            format!("protocol io {:?}", err).as_str(), retryable)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<chrono::ParseError> for LibraryError {
    fn from(err: chrono::ParseError) -> Self {
        LibraryError::validation(
            format!("date parsing {:?}", err).as_str(), Some("400".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::PreconditionViolated { message, reason_code } => {
                write!(f, "precondition violated: {} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Recording { message, retryable } => {
                write!(f, "{} {}", message, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending ledger.
pub type LibraryResult<T> = Result<T, LibraryError>;

// MediumKind classifies the physical carrier of a catalog entry
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum MediumKind {
    Book,
    Cd,
    Dvd,
    VideoGame,
    Unknown,
}

impl Display for MediumKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MediumKind::Book => write!(f, "Book"),
            MediumKind::Cd => write!(f, "Cd"),
            MediumKind::Dvd => write!(f, "Dvd"),
            MediumKind::VideoGame => write!(f, "VideoGame"),
            MediumKind::Unknown => write!(f, "Unknown"),
        }
    }
}

// MediumStatus is the availability of a medium as seen by the ledger
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum MediumStatus {
    Available,
    Reserved,
    Loaned,
}

impl Display for MediumStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MediumStatus::Available => write!(f, "Available"),
            MediumStatus::Reserved => write!(f, "Reserved"),
            MediumStatus::Loaned => write!(f, "Loaned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, MediumKind, MediumStatus};

    #[tokio::test]
    async fn test_should_create_precondition_error() {
        assert!(matches!(LibraryError::precondition("test", None), LibraryError::PreconditionViolated{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_recording_error() {
        assert!(matches!(LibraryError::recording("test", false), LibraryError::Recording{ message: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::precondition("test", None).retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::recording("test", false).retryable());
        assert_eq!(true, LibraryError::recording("test", true).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
    }

    #[tokio::test]
    async fn test_should_convert_io_error_to_recording() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, LibraryError::Recording { retryable: false, .. }));
    }

    #[tokio::test]
    async fn test_should_format_medium_kind() {
        assert_eq!("Book", MediumKind::Book.to_string().as_str());
        assert_eq!("VideoGame", MediumKind::VideoGame.to_string().as_str());
    }

    #[tokio::test]
    async fn test_should_format_medium_status() {
        assert_eq!("Available", MediumStatus::Available.to_string().as_str());
        assert_eq!("Loaned", MediumStatus::Loaned.to_string().as_str());
    }
}
