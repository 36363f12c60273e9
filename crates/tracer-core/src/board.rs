//! The circuit [`Board`]: a validated grid with exactly two terminals.
//!
//! Boards are read from whitespace-separated text:
//!
//! ```text
//! 3 4
//! 1 O O O
//! X X O X
//! O O O 2
//! ```
//!
//! The header holds the row and column counts; exactly `rows * cols`
//! single-character cell tokens follow in row-major order.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{FormatError, LoadError};
use crate::geom::Pos;
use crate::grid::Grid;

/// One of the two components a trace connects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    Start,
    End,
}

impl Terminal {
    /// The cell marking this terminal on a board.
    pub const fn cell(self) -> Cell {
        match self {
            Self::Start => Cell::Start,
            Self::End => Cell::End,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "terminal \u{2018}{}\u{2019}", self.cell().marker())
    }
}

/// A parsed, validated circuit board. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    start: Pos,
    end: Pos,
}

impl Board {
    /// Parse a board from its text form.
    ///
    /// Fails on the first format violation; see [`FormatError`].
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut tokens = text.split_whitespace();
        let rows = dimension(tokens.next())?;
        let cols = dimension(tokens.next())?;
        let expected = rows
            .checked_mul(cols)
            .filter(|&n| n <= i32::MAX as usize)
            .ok_or_else(|| FormatError::InvalidDimensions {
                token: Some(format!("{rows}x{cols}")),
            })?;

        let mut cells = Vec::with_capacity(expected.min(text.len()));
        let mut terminals = Terminals::default();
        for i in 0..expected {
            let pos = Pos::new((i / cols) as i32, (i % cols) as i32);
            let Some(token) = tokens.next() else {
                return Err(FormatError::RowColCountMismatch { expected, found: i });
            };
            let cell = single_char(token)
                .and_then(Cell::from_input)
                .ok_or_else(|| FormatError::InvalidCharacter {
                    token: token.to_string(),
                    pos,
                })?;
            match cell {
                Cell::Start => terminals.note(Terminal::Start, pos)?,
                Cell::End => terminals.note(Terminal::End, pos)?,
                _ => {}
            }
            cells.push(cell);
        }

        let extra = tokens.count();
        if extra > 0 {
            return Err(FormatError::TrailingData { expected, extra });
        }
        let (start, end) = terminals.finish()?;

        let grid = Grid::from_cells(rows, cols, cells);
        log::debug!("parsed {rows}x{cols} board, start {start}, end {end}");
        Ok(Self { grid, start, end })
    }

    /// Read and parse the board stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::parse(&text).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Position of terminal `1`.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of terminal `2`.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// The cell at `p`, or `None` off the board.
    #[inline]
    pub fn cell_at(&self, p: Pos) -> Option<Cell> {
        self.grid.at(p)
    }

    /// Whether `p` is on the board and open. Never panics.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.grid.at(p) == Some(Cell::Open)
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl FromStr for Board {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Terminal positions seen so far, checked once the grid is complete.
#[derive(Default)]
struct Terminals {
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Terminals {
    fn note(&mut self, terminal: Terminal, pos: Pos) -> Result<(), FormatError> {
        let slot = match terminal {
            Terminal::Start => &mut self.start,
            Terminal::End => &mut self.end,
        };
        if let Some(first) = *slot {
            return Err(FormatError::DuplicateTerminal {
                terminal,
                first,
                second: pos,
            });
        }
        *slot = Some(pos);
        Ok(())
    }

    fn finish(self) -> Result<(Pos, Pos), FormatError> {
        let start = self.start.ok_or(FormatError::MissingTerminal {
            terminal: Terminal::Start,
        })?;
        let end = self.end.ok_or(FormatError::MissingTerminal {
            terminal: Terminal::End,
        })?;
        Ok((start, end))
    }
}

fn dimension(token: Option<&str>) -> Result<usize, FormatError> {
    let invalid = || FormatError::InvalidDimensions {
        token: token.map(str::to_string),
    };
    let n: usize = token.ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    if n == 0 {
        return Err(invalid());
    }
    Ok(n)
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
