//! Top-level error type for the front ends.

use std::io;
use std::path::PathBuf;

use crate::session::{SelectionError, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("HOME is not set, settings cannot be saved")]
    NoHome,

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl From<SelectionError> for Error {
    fn from(e: SelectionError) -> Self {
        Error::Session(e.into())
    }
}

impl Error {
    /// Process exit status: 2 for rejected input, 3 for clipboard, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Session(_) => 2,
            Error::Clipboard(_) => 3,
            Error::Settings { .. } | Error::NoHome | Error::Terminal(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ValidationError;

    #[test]
    fn rejected_input_exits_with_2() {
        let err: Error = SessionError::from(ValidationError::TooLong).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Max 16 characters allowed!");

        let err: Error = SelectionError::LastEnabledClass.into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn clipboard_and_io_codes() {
        assert_eq!(Error::Clipboard("no display".into()).exit_code(), 3);
        let err = Error::Settings {
            path: PathBuf::from("/nope/settings"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("settings file /nope/settings: "));
        assert_eq!(Error::NoHome.exit_code(), 1);
    }
}
