//! Errors that end a circuit-tracer run.

use std::fmt;
use std::io;

use tracer_core::LoadError;

/// A failed run. Every variant exits with status 1.
#[derive(Debug)]
pub enum CliError {
    /// A requested mode exists on the command line but is not implemented.
    Unsupported(&'static str),
    /// The board file is missing, unreadable or malformed.
    Load(LoadError),
    /// Writing results failed.
    Output(io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Unsupported(_) | Self::Load(_) | Self::Output(_) => 1,
        }
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(what) => write!(f, "{what} is not supported"),
            Self::Load(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "writing results failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsupported(_) => None,
            Self::Load(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tracer_core::{FormatError, Terminal};

    use super::*;

    #[test]
    fn messages() {
        let e = CliError::Unsupported("graphical output (-g)");
        assert_eq!(e.to_string(), "graphical output (-g) is not supported");

        let e = CliError::from(LoadError::NotFound {
            path: PathBuf::from("boards/missing.txt"),
        });
        assert_eq!(e.to_string(), "boards/missing.txt: file not found");

        let e = CliError::from(LoadError::Format {
            path: PathBuf::from("b.txt"),
            source: FormatError::MissingTerminal {
                terminal: Terminal::End,
            },
        });
        assert_eq!(
            e.to_string(),
            "b.txt: invalid board: terminal \u{2018}2\u{2019} is missing"
        );
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            CliError::Unsupported("x"),
            CliError::from(LoadError::NotFound {
                path: PathBuf::from("x"),
            }),
            CliError::Output(io::Error::other("closed")),
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 1);
        }
    }
}
