use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an extraction run.
#[derive(Error, Debug)]
pub enum Error {
    // ---- File access --------------------------------------------------------
    /// The level source file is missing or unreadable.
    #[error("Cannot read input file '{}': {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export directory could not be created or a level file not written.
    #[error("Cannot write '{}': {source}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ---- Extraction ---------------------------------------------------------
    /// Only raised under the strict dimension policy.
    #[error(
        "Level '{level}' holds {actual} token(s) but its inferred grid is {width}x{height} ({expected})."
    )]
    DimensionMismatch {
        level: String,
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    // ---- Config / CLI -------------------------------------------------------
    /// Any issue loading or overriding configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Bad command-line usage.
    #[error("Usage error: {0}")]
    Usage(String),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Error::Usage(msg.into())
    }

    pub fn input_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::InputAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn output_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::OutputAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
