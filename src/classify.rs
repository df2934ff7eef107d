use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{DiffError, Result};

/// Number of leading bytes inspected, and the fixed denominator of the ratio.
pub const SAMPLE_LEN: usize = 1024;

/// Share of flagged control bytes above which a file is treated as binary.
pub const BINARY_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary,
}

/// Low control bytes that do not show up in text: everything below space
/// except NUL, BS, TAB, LF, VT, FF and CR.
fn is_flagged(byte: u8) -> bool {
    (byte > 0 && byte < 8) || (byte > 13 && byte < 32)
}

/// Decide whether `sample` looks like binary data.
///
/// The ratio is always taken over [`SAMPLE_LEN`], so short samples lean
/// towards text.
pub fn classify_bytes(sample: &[u8]) -> Classification {
    let sample = &sample[..sample.len().min(SAMPLE_LEN)];
    let flagged = sample.iter().filter(|&&b| is_flagged(b)).count();

    debug!(flagged, bytes_checked = sample.len(), "control byte scan");

    if flagged as f64 / SAMPLE_LEN as f64 > BINARY_THRESHOLD {
        Classification::Binary
    } else {
        Classification::Text
    }
}

/// Classify the file at `path` from its first [`SAMPLE_LEN`] bytes.
pub fn classify(path: &Path) -> Result<Classification> {
    let file = File::open(path).map_err(|e| DiffError::io(path, e))?;

    let mut buffer = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64)
        .read_to_end(&mut buffer)
        .map_err(|e| DiffError::io(path, e))?;

    let class = classify_bytes(&buffer);
    debug!(path = %path.display(), ?class, "classified");
    Ok(class)
}
