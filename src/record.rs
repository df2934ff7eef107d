use std::fmt;

/// What happened to a line or a tree entry between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
    /// The comparison side holds the more recent copy.
    Newer,
    /// The comparison side holds the older copy.
    Older,
}

impl ChangeKind {
    pub fn marker(self) -> &'static str {
        match self {
            ChangeKind::Unchanged => "    ",
            ChangeKind::Added => "++++",
            ChangeKind::Removed => "----",
            ChangeKind::Newer => "ver+",
            ChangeKind::Older => "ver-",
        }
    }
}

/// One annotated line of diff output.
///
/// Line records carry the zero-based line index and the line content. Tree
/// records carry no index; their text is a `/`-separated path relative to the
/// compared roots. Directory records render with a trailing `/`, which is not
/// part of their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    kind: ChangeKind,
    text: String,
    line_number: Option<usize>,
    is_dir: bool,
}

impl ChangeRecord {
    pub fn line(kind: ChangeKind, line_number: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            line_number: Some(line_number),
            is_dir: false,
        }
    }

    pub fn entry(kind: ChangeKind, rel_path: impl Into<String>) -> Self {
        Self {
            kind,
            text: rel_path.into(),
            line_number: None,
            is_dir: false,
        }
    }

    pub fn dir(kind: ChangeKind, rel_path: impl Into<String>) -> Self {
        Self {
            is_dir: true,
            ..Self::entry(kind, rel_path)
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line_number, self.kind) {
            (Some(i), ChangeKind::Unchanged) => write!(f, "{i}: {}", self.text),
            (Some(i), kind) => write!(f, "{i}: {}    {}", kind.marker(), self.text),
            (None, kind) => {
                let slash = if self.is_dir { "/" } else { "" };
                write!(f, "{}    ./{}{slash}", kind.marker(), self.text)
            }
        }
    }
}
