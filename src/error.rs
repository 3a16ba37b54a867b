//! Driver errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the driver
pub type Result<T> = core::result::Result<T, PwmError>;

/// Errors raised by PWM channel operations
#[derive(Error, Debug)]
pub enum PwmError {
    /// A value passed to a setter or constructor was rejected
    #[error("Invalid {what}: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument
        what: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The `pwm-ctrl` directory does not exist
    #[error(
        "PWM sysfs interface {} does not exist, check that the required modules are loaded",
        .path.display()
    )]
    UnavailableDevice {
        /// Directory that was expected
        path: PathBuf,
    },

    /// Opening, reading or writing an attribute file failed
    #[error("{context} {}: {source}", .path.display())]
    Io {
        /// Operation that failed
        context: &'static str,
        /// Attribute file involved
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },
}

impl PwmError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// OS error code of an I/O failure, if there is one
    #[must_use]
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    /// Check if the error is an argument rejection
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
