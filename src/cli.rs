use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glob::Pattern;

use crate::tree_diff::TreeDiffOptions;

/// Malformed invocation.
pub const EXIT_INVALID_ARGS: u8 = 87;
/// The two inputs are not two text files or two directories.
pub const EXIT_NO_DIFF: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The base file or directory to compare
    pub base: PathBuf,

    /// The file or directory to compare against the base
    pub comparison: PathBuf,

    /// Report newer/older files (by modification time) when diffing directories
    #[arg(long = "file-version", visible_alias = "fv", alias = "fileVersion")]
    pub file_version: bool,

    /// Glob patterns to skip when diffing directories (can be repeated or comma separated)
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub ignore: Vec<String>,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, env = "QUICKDIFF_COLOR")]
    pub color: ColorChoice,
}

#[derive(Debug)]
pub struct Options {
    pub base: PathBuf,
    pub comparison: PathBuf,
    pub tree: TreeDiffOptions,
    pub color: bool,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let patterns = args
        .ignore
        .iter()
        .map(|s| Pattern::new(s).with_context(|| format!("Invalid glob pattern: {s}")))
        .collect::<Result<Vec<_>>>()?;

    let color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };

    Ok(Options {
        base: args.base.clone(),
        comparison: args.comparison.clone(),
        tree: TreeDiffOptions {
            show_version_info: args.file_version,
            ignore_patterns: patterns,
        },
        color,
    })
}
