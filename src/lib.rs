//
// lib.rs
// quickdiff
//
// Library entry that re-exports the comparison engine (classifier, line diff, tree diff) so the binary and any external users can drive it.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod classify;
pub mod cli;
pub mod driver;
pub mod error;
pub mod line_diff;
pub mod record;
pub mod render;
pub mod scanner;
pub mod tree_diff;
pub mod utils;

pub use classify::{classify, Classification};
pub use cli::{build_options, Args, Options};
pub use driver::{resolve_mode, run, DiffMode};
pub use error::{DiffError, Result};
pub use line_diff::{diff_files, diff_lines};
pub use record::{ChangeKind, ChangeRecord};
pub use scanner::{scan_dir, ScanResult};
pub use tree_diff::{diff_trees, diff_trees_with, TreeDiffOptions};
