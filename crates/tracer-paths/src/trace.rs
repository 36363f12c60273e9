//! [`TraceState`] — one immutable partial or complete trace.
//!
//! States share the board through an [`Rc`] and own only their path and a
//! per-cell membership mask. Observably a state behaves as a private copy of
//! the board with its trace cells marked [`Cell::Trace`]; extending one
//! never touches the parent, so frontier branches cannot interfere.

use std::fmt;
use std::rc::Rc;

use tracer_core::{Board, Cell, Grid, Pos};

use crate::traits::Pather;

/// Attempt to lay a trace cell on a position that is not open.
///
/// The search only extends onto cells it has just checked, so this error
/// indicates a broken invariant rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedPosition {
    pub pos: Pos,
    /// What the position holds, or `None` if it is off the board.
    pub found: Option<Cell>,
}

impl fmt::Display for OccupiedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(cell) => write!(f, "position {} is occupied by \u{2018}{cell}\u{2019}", self.pos),
            None => write!(f, "position {} is off the board", self.pos),
        }
    }
}

impl std::error::Error for OccupiedPosition {}

/// A trace in progress: the board, the cells laid so far, and the head.
#[derive(Clone)]
pub struct TraceState {
    board: Rc<Board>,
    path: Vec<Pos>,
    marked: Vec<bool>,
    head: Pos,
}

impl TraceState {
    /// Start a trace by marking `pos`, which must be open on `board`.
    pub fn seed(board: Rc<Board>, pos: Pos) -> Result<Self, OccupiedPosition> {
        let Some(i) = board.grid().index(pos).filter(|_| board.is_open(pos)) else {
            return Err(OccupiedPosition {
                pos,
                found: board.cell_at(pos),
            });
        };
        let mut marked = vec![false; board.grid().area()];
        marked[i] = true;
        Ok(Self {
            board,
            path: vec![pos],
            marked,
            head: pos,
        })
    }

    /// Return a new state with `pos` appended, leaving `self` untouched.
    ///
    /// `pos` must be open in this state's snapshot. Adjacency to the head is
    /// the caller's business.
    pub fn extend(&self, pos: Pos) -> Result<Self, OccupiedPosition> {
        let Some(i) = self.open_index(pos) else {
            return Err(OccupiedPosition {
                pos,
                found: self.cell_at(pos),
            });
        };
        let mut next = self.clone();
        next.marked[i] = true;
        next.path.push(pos);
        next.head = pos;
        Ok(next)
    }

    /// Whether the head touches the end terminal orthogonally.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.head.is_adjacent(self.board.end())
    }

    /// Number of trace cells laid, terminals excluded.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Moves from the start terminal to the end terminal along this trace
    /// once it is complete: one more than [`path_len`](Self::path_len).
    #[inline]
    pub fn step_count(&self) -> usize {
        self.path.len() + 1
    }

    /// The most recently laid trace cell.
    #[inline]
    pub fn head(&self) -> Pos {
        self.head
    }

    /// Trace cells in the order they were laid.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// The board this trace is laid on.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether `p` is open in this state's snapshot. False off the board.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.open_index(p).is_some()
    }

    /// The snapshot cell at `p`: [`Cell::Trace`] on this trace, otherwise
    /// the board cell. `None` off the board.
    pub fn cell_at(&self, p: Pos) -> Option<Cell> {
        let i = self.board.grid().index(p)?;
        if self.marked[i] {
            Some(Cell::Trace)
        } else {
            self.board.cell_at(p)
        }
    }

    /// Materialise the board with this trace marked.
    pub fn snapshot(&self) -> Grid {
        let mut grid = self.board.grid().clone();
        for &p in &self.path {
            grid.set(p, Cell::Trace);
        }
        grid
    }

    fn open_index(&self, p: Pos) -> Option<usize> {
        let i = self.board.grid().index(p)?;
        (!self.marked[i] && self.board.is_open(p)).then_some(i)
    }
}

impl Pather for TraceState {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}

impl fmt::Debug for TraceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceState")
            .field("head", &self.head)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TraceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
