use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::record::{ChangeKind, ChangeRecord};

/// Color a record by kind: green for additions and newer copies, red for
/// removals and older copies.
pub fn paint(record: &ChangeRecord) -> ColoredString {
    let line = record.to_string();
    match record.kind() {
        ChangeKind::Unchanged => line.normal(),
        ChangeKind::Added | ChangeKind::Newer => line.green(),
        ChangeKind::Removed | ChangeKind::Older => line.red(),
    }
}

/// Write one line per record.
pub fn write_records<W: Write>(out: &mut W, records: &[ChangeRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", paint(record))?;
    }
    out.flush()
}
