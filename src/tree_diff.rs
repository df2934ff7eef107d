use std::fs;
use std::path::Path;
use std::time::SystemTime;

use glob::Pattern;
use tracing::debug;

use crate::error::{DiffError, Result};
use crate::record::{ChangeKind, ChangeRecord};
use crate::scanner::scan_dir;

#[derive(Debug, Default, Clone)]
pub struct TreeDiffOptions {
    /// Report `Newer`/`Older` instead of `Unchanged` when mtimes differ.
    pub show_version_info: bool,
    pub ignore_patterns: Vec<Pattern>,
}

fn modified_time(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| DiffError::io(path, e))
}

/// Diff two directory trees by presence and modification time.
pub fn diff_trees(
    base_root: &Path,
    compare_root: &Path,
    show_version_info: bool,
) -> Result<Vec<ChangeRecord>> {
    let opts = TreeDiffOptions {
        show_version_info,
        ..Default::default()
    };
    diff_trees_with(base_root, compare_root, &opts)
}

/// Diff two directory trees by presence and modification time.
///
/// File contents are never read: a file present on both sides is `Unchanged`
/// unless its mtimes differ and `show_version_info` is set. The result is
/// sorted by rendered text so it does not depend on traversal order.
pub fn diff_trees_with(
    base_root: &Path,
    compare_root: &Path,
    opts: &TreeDiffOptions,
) -> Result<Vec<ChangeRecord>> {
    let scan_base = scan_dir(base_root, &opts.ignore_patterns)?;
    let scan_cmp = scan_dir(compare_root, &opts.ignore_patterns)?;

    let mut records = Vec::new();

    for dir in scan_base.dirs.difference(&scan_cmp.dirs) {
        records.push(ChangeRecord::dir(ChangeKind::Removed, dir.as_str()));
    }
    for dir in scan_cmp.dirs.difference(&scan_base.dirs) {
        records.push(ChangeRecord::dir(ChangeKind::Added, dir.as_str()));
    }

    for (rel, base_file) in &scan_base.files {
        let Some(cmp_file) = scan_cmp.files.get(rel) else {
            records.push(ChangeRecord::entry(ChangeKind::Removed, rel.as_str()));
            continue;
        };

        let base_time = modified_time(base_file)?;
        let cmp_time = modified_time(cmp_file)?;

        let kind = match base_time.cmp(&cmp_time) {
            std::cmp::Ordering::Less if opts.show_version_info => ChangeKind::Newer,
            std::cmp::Ordering::Greater if opts.show_version_info => ChangeKind::Older,
            _ => ChangeKind::Unchanged,
        };
        records.push(ChangeRecord::entry(kind, rel.as_str()));
    }

    for rel in scan_cmp.files.keys() {
        if !scan_base.files.contains_key(rel) {
            records.push(ChangeRecord::entry(ChangeKind::Added, rel.as_str()));
        }
    }

    records.sort_by_cached_key(ToString::to_string);

    debug!(
        base = %scan_base.root.display(),
        compare = %scan_cmp.root.display(),
        records = records.len(),
        "tree diff complete"
    );
    Ok(records)
}
