//! Error types for msm-traj.

use std::path::PathBuf;

/// Error type for all fallible operations in the msm-traj crate.
///
/// Covers missing or unreadable files, malformed lines, labels outside the
/// configured alphabet, and empty inputs. All of these are fatal to a run:
/// a trajectory is either loaded in full or not at all.
#[derive(Debug, thiserror::Error)]
pub enum TrajError {
    /// Returned when the trajectory file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying I/O or decompression failure.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a line cannot be parsed as a state label.
    #[error("line {line}: cannot parse '{value}' as a state label")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// Returned when a label falls outside the configured alphabet range.
    #[error("line {line}: label {value} outside allowed range {min}..={max}")]
    OutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending label.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// Returned when the file (or an in-memory sequence) contains no states.
    #[error("trajectory is empty")]
    Empty,
}

impl From<std::io::Error> for TrajError {
    fn from(e: std::io::Error) -> Self {
        TrajError::Io {
            reason: e.to_string(),
        }
    }
}
