use std::path::Path;

use tracing::{debug, info};

use crate::classify::{classify, Classification};
use crate::cli::Options;
use crate::error::Result;
use crate::line_diff::diff_files;
use crate::record::ChangeRecord;
use crate::tree_diff::diff_trees_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    Files,
    Directories,
}

fn is_text_file(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    Ok(classify(path)? == Classification::Text)
}

/// Work out which diff applies to the two inputs.
///
/// `None` means there is nothing sensible to compare: a file paired with a
/// directory, a binary file, or a path that does not exist.
pub fn resolve_mode(base: &Path, compare: &Path) -> Result<Option<DiffMode>> {
    if is_text_file(base)? && is_text_file(compare)? {
        return Ok(Some(DiffMode::Files));
    }
    if base.is_dir() && compare.is_dir() {
        return Ok(Some(DiffMode::Directories));
    }
    Ok(None)
}

pub fn run(opts: &Options) -> Result<Option<Vec<ChangeRecord>>> {
    let mode = resolve_mode(&opts.base, &opts.comparison)?;
    debug!(?mode, "resolved diff mode");

    let records = match mode {
        Some(DiffMode::Files) => diff_files(&opts.base, &opts.comparison)?,
        Some(DiffMode::Directories) => diff_trees_with(&opts.base, &opts.comparison, &opts.tree)?,
        None => return Ok(None),
    };

    info!(records = records.len(), "diff finished");
    Ok(Some(records))
}
