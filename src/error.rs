//! Error types for conversion operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting a Markdown file to HTML
#[derive(Debug)]
pub enum ConversionError {
    /// Fewer than two positional arguments were supplied
    Usage {
        /// Program name shown in the usage line
        program: String,
    },
    /// Input path is not an existing regular file
    MissingInput(PathBuf),
    /// Reading the input or writing the output failed
    Io(io::Error),
}

impl ConversionError {
    /// Get process exit status for this error
    pub fn code(&self) -> i32 {
        match self {
            ConversionError::Usage { .. } => 1,
            ConversionError::MissingInput(_) => 1,
            ConversionError::Io(_) => 2,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Usage { program } => {
                write!(f, "Usage: {} README.md README.html", program)
            }
            ConversionError::MissingInput(path) => write!(f, "Missing {}", path.display()),
            ConversionError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConversionError {
    fn from(err: io::Error) -> Self {
        ConversionError::Io(err)
    }
}
