//! The [`Cell`] type — the contents of one board position.

use std::fmt;

/// Contents of a single board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Free to carry a trace (`O`).
    #[default]
    Open,
    /// Unavailable (`X`).
    Blocked,
    /// Part of a trace (`T`). Never accepted as input.
    Trace,
    /// The first component to connect (`1`).
    Start,
    /// The second component to connect (`2`).
    End,
}

impl Cell {
    /// The text marker of the cell.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Self::Open => 'O',
            Self::Blocked => 'X',
            Self::Trace => 'T',
            Self::Start => '1',
            Self::End => '2',
        }
    }

    /// Map an input marker to a cell. `T` is output-only and yields `None`,
    /// as does any character outside the board alphabet.
    #[inline]
    pub const fn from_input(ch: char) -> Option<Self> {
        match ch {
            'O' => Some(Self::Open),
            'X' => Some(Self::Blocked),
            '1' => Some(Self::Start),
            '2' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_markers() {
        assert_eq!(Cell::from_input('O'), Some(Cell::Open));
        assert_eq!(Cell::from_input('X'), Some(Cell::Blocked));
        assert_eq!(Cell::from_input('1'), Some(Cell::Start));
        assert_eq!(Cell::from_input('2'), Some(Cell::End));
    }

    #[test]
    fn trace_is_not_an_input_marker() {
        assert_eq!(Cell::from_input('T'), None);
        assert_eq!(Cell::from_input('o'), None);
        assert_eq!(Cell::from_input('3'), None);
    }

    #[test]
    fn marker_matches_input() {
        for cell in [Cell::Open, Cell::Blocked, Cell::Start, Cell::End] {
            assert_eq!(Cell::from_input(cell.marker()), Some(cell));
        }
        assert_eq!(Cell::Trace.to_string(), "T");
    }

    #[test]
    fn default_is_open() {
        assert_eq!(Cell::default(), Cell::Open);
    }
}
