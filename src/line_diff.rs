use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::{ChangeKind, ChangeRecord};
use crate::utils::read_lines;

/// Compare two line sequences index by index.
///
/// No alignment is attempted: line `i` of one side is only ever compared with
/// line `i` of the other, and the shorter side is padded with empty lines.
/// A changed index yields the modified line (`Added`) before the original
/// line (`Removed`).
pub fn diff_lines<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<ChangeRecord> {
    let len = original.len().max(modified.len());
    let mut records = Vec::with_capacity(len);

    for i in 0..len {
        let o = original.get(i).map_or("", |s| s.as_ref());
        let m = modified.get(i).map_or("", |s| s.as_ref());

        if o == m {
            records.push(ChangeRecord::line(ChangeKind::Unchanged, i, o));
        } else {
            records.push(ChangeRecord::line(ChangeKind::Added, i, m));
            records.push(ChangeRecord::line(ChangeKind::Removed, i, o));
        }
    }
    records
}

/// Read both files and diff their lines.
pub fn diff_files(original: &Path, modified: &Path) -> Result<Vec<ChangeRecord>> {
    let original_lines = read_lines(original)?;
    let modified_lines = read_lines(modified)?;

    let records = diff_lines(&original_lines, &modified_lines);
    debug!(
        original = %original.display(),
        modified = %modified.display(),
        original_lines = original_lines.len(),
        modified_lines = modified_lines.len(),
        records = records.len(),
        "line diff complete"
    );
    Ok(records)
}
