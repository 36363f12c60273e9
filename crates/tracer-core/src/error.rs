//! Errors raised while reading a board.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::board::Terminal;
use crate::geom::Pos;

/// A violation of the board text format. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The header did not start with two positive integers.
    InvalidDimensions {
        /// The offending token, or `None` if the input ended early.
        token: Option<String>,
    },
    /// The input ran out before `rows * cols` cells were read.
    RowColCountMismatch { expected: usize, found: usize },
    /// A cell token was not exactly one of `O`, `X`, `1`, `2`.
    InvalidCharacter { token: String, pos: Pos },
    /// A terminal appeared more than once.
    DuplicateTerminal {
        terminal: Terminal,
        first: Pos,
        second: Pos,
    },
    /// A terminal never appeared.
    MissingTerminal { terminal: Terminal },
    /// Tokens remained after the grid was filled.
    TrailingData { expected: usize, extra: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { token: Some(t) } => {
                write!(f, "invalid board dimension \u{201c}{t}\u{201d}, expected a positive integer")
            }
            Self::InvalidDimensions { token: None } => {
                write!(f, "missing board dimensions, expected \u{201c}<rows> <cols>\u{201d}")
            }
            Self::RowColCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells but the input holds only {found}")
            }
            Self::InvalidCharacter { token, pos } => {
                write!(f, "invalid cell \u{201c}{token}\u{201d} at {pos}")
            }
            Self::DuplicateTerminal {
                terminal,
                first,
                second,
            } => write!(f, "{terminal} appears twice, at {first} and {second}"),
            Self::MissingTerminal { terminal } => write!(f, "{terminal} is missing"),
            Self::TrailingData { expected, extra } => {
                write!(f, "{extra} unexpected token(s) after the {expected} board cells")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Failure to load a board from a file.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not exist.
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file was read but is not a valid board.
    Format { path: PathBuf, source: FormatError },
}

impl LoadError {
    /// The path that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{}: file not found", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Format { path, source } => {
                write!(f, "{}: invalid board: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
        }
    }
}
