use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Write failure: {0}")]
    WriteFailure(#[from] csv::Error),
}

impl From<io::Error> for FixtureError {
    fn from(err: io::Error) -> Self {
        FixtureError::WriteFailure(csv::Error::from(err))
    }
}

impl FixtureError {
    /// The underlying I/O error, when the failure came from the operating system.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            FixtureError::WriteFailure(err) => match err.kind() {
                csv::ErrorKind::Io(io_err) => Some(io_err),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_write_failure() {
        let err = FixtureError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, FixtureError::WriteFailure(_)));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
        assert!(err.to_string().starts_with("Write failure: "));
        assert!(err.to_string().contains("denied"));
    }
}
