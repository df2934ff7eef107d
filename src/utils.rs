use std::fs;
use std::path::{Component, Path};

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::error::{DiffError, Result};

/// Decode a file into text, never failing on content.
///
/// A byte-order mark picks the encoding and is dropped. Without one, valid
/// UTF-8 is taken as-is and anything else falls back to Windows-1252.
pub fn read_text_best_effort(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| DiffError::io(path, e))?;

    let content = match Encoding::for_bom(&bytes) {
        Some((encoding, bom_len)) => encoding
            .decode_without_bom_handling(&bytes[bom_len..])
            .0
            .into_owned(),
        None => match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => WINDOWS_1252
                .decode_without_bom_handling(err.as_bytes())
                .0
                .into_owned(),
        },
    };
    Ok(content)
}

/// Split text into physical lines.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. A last line without a
/// terminator is kept; the empty remainder after a final terminator is not.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// Read a file as a sequence of lines; see [`split_lines`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(split_lines(&read_text_best_effort(path)?))
}

/// Join the normal components of a relative path with `/`.
pub fn normalize_rel(rel: &Path) -> String {
    rel.components()
        .filter_map(|comp| match comp {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn split_handles_all_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_drops_only_the_final_implicit_line() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
    }

    #[test]
    fn normalize_uses_forward_slashes() {
        let rel = Path::new("a").join("b").join("c.txt");
        assert_eq!(normalize_rel(&rel), "a/b/c.txt");
        assert_eq!(normalize_rel(Path::new("./x")), "x");
    }

    #[test]
    fn reads_bom_and_legacy_encodings() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;

        let utf8_bom = temp.child("bom.txt");
        utf8_bom.write_binary(b"\xEF\xBB\xBFhello\n")?;
        assert_eq!(read_lines(utf8_bom.path())?, vec!["hello"]);

        let utf16 = temp.child("utf16.txt");
        utf16.write_binary(b"\xFF\xFEh\x00i\x00\n\x00")?;
        assert_eq!(read_lines(utf16.path())?, vec!["hi"]);

        let latin = temp.child("latin.txt");
        latin.write_binary(b"caf\xE9\n")?;
        assert_eq!(read_lines(latin.path())?, vec!["café"]);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }
}
