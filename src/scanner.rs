use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{DiffError, Result};
use crate::utils::normalize_rel;

/// Everything found below one root, keyed by `/`-separated relative path.
#[derive(Debug)]
pub struct ScanResult {
    pub files: HashMap<String, PathBuf>, // rel -> abs
    pub dirs: HashSet<String>,           // rel
    pub root: PathBuf,
}

fn is_ignored(rel: &str, name: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .any(|pat| pat.matches(rel) || pat.matches(name))
}

/// Recursively enumerate `root`.
///
/// Symlinks are listed by what they point to but never followed into; dangling
/// ones are skipped. Ignored directories are pruned. The first traversal or
/// metadata error aborts the scan.
pub fn scan_dir(root: &Path, patterns: &[Pattern]) -> Result<ScanResult> {
    let meta = fs::metadata(root).map_err(|e| DiffError::io(root, e))?;
    if !meta.is_dir() {
        return Err(DiffError::io(
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut files = HashMap::new();
    let mut dirs = HashSet::new();

    let walker = WalkDir::new(root).follow_links(false).into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 || patterns.is_empty() {
            return true;
        }
        match e.path().strip_prefix(root) {
            Ok(rel) => {
                let name = e.file_name().to_string_lossy();
                !is_ignored(&normalize_rel(rel), &name, patterns)
            }
            Err(_) => true,
        }
    }) {
        let entry = entry.map_err(|source| DiffError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let rel = normalize_rel(rel);

        let file_type = if entry.path_is_symlink() {
            match fs::metadata(path) {
                Ok(meta) => meta.file_type(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    trace!(%rel, "dangling symlink");
                    continue;
                }
                Err(e) => return Err(DiffError::io(path, e)),
            }
        } else {
            entry.file_type()
        };

        if file_type.is_dir() {
            trace!(%rel, "dir");
            dirs.insert(rel);
        } else if file_type.is_file() {
            trace!(%rel, "file");
            files.insert(rel, path.to_path_buf());
        }
    }

    debug!(
        root = %root.display(),
        files = files.len(),
        dirs = dirs.len(),
        "scan complete"
    );

    Ok(ScanResult {
        files,
        dirs,
        root: root.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn sorted<'a>(items: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
        let mut v: Vec<&str> = items.map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn collects_nested_files_and_dirs() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        temp.child("top.txt").write_str("t")?;
        temp.child("a/b/deep.txt").write_str("d")?;
        temp.child("empty").create_dir_all()?;

        let scan = scan_dir(temp.path(), &[])?;
        assert_eq!(sorted(scan.files.keys()), vec!["a/b/deep.txt", "top.txt"]);
        assert_eq!(sorted(scan.dirs.iter()), vec!["a", "a/b", "empty"]);
        assert_eq!(scan.files["top.txt"], temp.path().join("top.txt"));
        Ok(())
    }

    #[test]
    fn ignored_dirs_are_pruned() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        temp.child(".git/config").write_str("x")?;
        temp.child("src/main.rs").write_str("fn main() {}")?;
        temp.child("src/main.rs.bak").write_str("old")?;

        let patterns = vec![Pattern::new(".git")?, Pattern::new("*.bak")?];
        let scan = scan_dir(temp.path(), &patterns)?;
        assert_eq!(sorted(scan.files.keys()), vec!["src/main.rs"]);
        assert_eq!(sorted(scan.dirs.iter()), vec!["src"]);
        Ok(())
    }

    #[test]
    fn no_builtin_ignores() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        temp.child(".DS_Store").write_str("x")?;

        let scan = scan_dir(temp.path(), &[])?;
        assert_eq!(sorted(scan.files.keys()), vec![".DS_Store"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_take_their_target_kind() -> std::result::Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new()?;
        temp.child("real/inner.txt").write_str("i")?;
        temp.child("plain.txt").write_str("p")?;
        symlink(temp.path().join("real"), temp.path().join("dir-link"))?;
        symlink(temp.path().join("plain.txt"), temp.path().join("file-link"))?;
        symlink(temp.path().join("gone.txt"), temp.path().join("dangling"))?;

        let scan = scan_dir(temp.path(), &[])?;
        assert_eq!(
            sorted(scan.files.keys()),
            vec!["file-link", "plain.txt", "real/inner.txt"]
        );
        assert_eq!(sorted(scan.dirs.iter()), vec!["dir-link", "real"]);
        Ok(())
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = scan_dir(&temp.path().join("gone"), &[]).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }

    #[test]
    fn file_root_is_an_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let file = temp.child("f.txt");
        file.write_str("x")?;
        assert!(scan_dir(file.path(), &[]).is_err());
        Ok(())
    }
}
