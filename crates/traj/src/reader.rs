//! Read trajectories from single-column CSV files, gzipped or plain.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::error::TrajError;
use crate::trajectory::Trajectory;

/// Gzip magic bytes; used to sniff whether the input needs decompression.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Configuration for trajectory reading.
///
/// # Example
///
/// ```
/// use msm_traj::ReaderConfig;
///
/// let config = ReaderConfig::new().with_label_range(1, 100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReaderConfig {
    label_range: Option<(u32, u32)>,
}

impl ReaderConfig {
    /// Creates a configuration with no alphabet restriction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts labels to the inclusive range `min..=max`.
    ///
    /// Labels outside the range are rejected as malformed input rather than
    /// silently kept or dropped.
    pub fn with_label_range(mut self, min: u32, max: u32) -> Self {
        self.label_range = Some((min, max));
        self
    }

    /// Returns the configured inclusive label range, if any.
    pub fn label_range(&self) -> Option<(u32, u32)> {
        self.label_range
    }
}

/// Reads a discretized trajectory from a single-column CSV file.
///
/// The file holds one integer state label per line, no header. Gzip
/// compression is detected from the magic bytes, so both `traj.csv` and
/// `traj.csv.gz` work. A trailing comma on a line is tolerated (some
/// exporters write one), as are blank lines.
///
/// # Errors
///
/// * [`TrajError::FileNotFound`] if `path` does not exist.
/// * [`TrajError::Io`] on read or decompression failure.
/// * [`TrajError::Parse`] for a non-integer line.
/// * [`TrajError::OutOfRange`] for a label outside the configured range.
/// * [`TrajError::Empty`] if no labels remain after parsing.
pub fn read_trajectory(path: &Path, config: &ReaderConfig) -> Result<Trajectory, TrajError> {
    if !path.exists() {
        return Err(TrajError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let text = decode(&bytes)?;

    let mut states = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let field = raw_line.trim().trim_end_matches(',');
        if field.is_empty() {
            continue;
        }
        let value: u32 = field.parse().map_err(|_| TrajError::Parse {
            line,
            value: field.to_string(),
        })?;
        if let Some((min, max)) = config.label_range {
            if value < min || value > max {
                return Err(TrajError::OutOfRange {
                    line,
                    value,
                    min,
                    max,
                });
            }
        }
        states.push(value);
    }

    let traj = Trajectory::from_states(states)?;
    info!(
        path = %path.display(),
        n_steps = traj.len(),
        n_states = traj.distinct_labels().len(),
        "trajectory loaded"
    );
    Ok(traj)
}

/// Decodes raw file bytes to text, decompressing gzip when detected.
fn decode(bytes: &[u8]) -> Result<String, TrajError> {
    if bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC {
        debug!(n_bytes = bytes.len(), "decompressing gzip input");
        let mut decoder = GzDecoder::new(bytes);
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;
        Ok(text)
    } else {
        String::from_utf8(bytes.to_vec()).map_err(|e| TrajError::Io {
            reason: format!("input is not valid UTF-8: {e}"),
        })
    }
}
