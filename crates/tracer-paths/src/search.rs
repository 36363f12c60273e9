//! Exhaustive frontier-driven search for the shortest traces.
//!
//! Every simple path from the start terminal towards the end terminal is
//! enumerated: each branch carries its own trace, so different branches may
//! pass through the same cell. The [`Discipline`] only changes the order in
//! which traces are discovered, never the minimum length or the set of
//! minimal traces.

use std::rc::Rc;

use tracer_core::{Board, Pos};

use crate::collector::{BestPaths, Recorded};
use crate::frontier::{Discipline, Frontier};
use crate::trace::TraceState;
use crate::traits::Pather;

/// Counters gathered while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States removed from the frontier.
    pub popped: usize,
    /// States inserted into the frontier, seeds included.
    pub pushed: usize,
    /// Complete traces offered to the collector.
    pub completed: usize,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Result of a finished search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub discipline: Discipline,
    pub best: BestPaths,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Length of the shortest traces, `None` if the terminals are not
    /// connected.
    #[inline]
    pub fn best_len(&self) -> Option<usize> {
        self.best.best_len()
    }

    /// The shortest traces in discovery order.
    #[inline]
    pub fn paths(&self) -> &[TraceState] {
        self.best.paths()
    }

    /// Consume the outcome, keeping only the shortest traces.
    pub fn into_paths(self) -> Vec<TraceState> {
        self.best.into_paths()
    }
}

/// Run a complete search over `board`.
pub fn search(board: impl Into<Rc<Board>>, discipline: Discipline) -> SearchOutcome {
    Search::new(board, discipline).run()
}

/// A search in progress. [`step`](Search::step) advances it by one state;
/// [`run`](Search::run) drives it until the frontier is exhausted.
pub struct Search {
    frontier: Frontier<TraceState>,
    best: BestPaths,
    stats: SearchStats,
    // scratch buffer for neighbour queries
    nbuf: Vec<Pos>,
}

impl Search {
    /// Create a search whose frontier holds one seed per open neighbour of
    /// the start terminal.
    pub fn new(board: impl Into<Rc<Board>>, discipline: Discipline) -> Self {
        let board = board.into();
        log::debug!(
            "searching {}x{} board from {} to {} with a {discipline} frontier",
            board.rows(),
            board.cols(),
            board.start(),
            board.end()
        );
        let mut nbuf = Vec::with_capacity(4);
        board.neighbors(board.start(), &mut nbuf);
        let mut frontier = Frontier::new(discipline);
        frontier.extend(nbuf.iter().map(|&np| {
            TraceState::seed(Rc::clone(&board), np).unwrap_or_else(|e| invariant_violated(e))
        }));
        Self {
            frontier,
            best: BestPaths::new(),
            stats: SearchStats {
                pushed: nbuf.len(),
                ..SearchStats::default()
            },
            nbuf,
        }
    }

    /// Pop one state and either record it or expand it. Returns `false` once
    /// the frontier is empty.
    pub fn step(&mut self) -> bool {
        let Some(current) = self.frontier.pop() else {
            return false;
        };
        self.stats.popped += 1;

        if current.is_complete() {
            self.stats.completed += 1;
            let len = current.path_len();
            match self.best.record(current) {
                Recorded::First | Recorded::Improved => {
                    log::trace!("new best trace length {len}");
                }
                Recorded::Tied | Recorded::Discarded => {}
            }
            return true;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        current.neighbors(current.head(), &mut nbuf);
        self.stats.pushed += nbuf.len();
        self.frontier.extend(
            nbuf.iter()
                .map(|&np| current.extend(np).unwrap_or_else(|e| invariant_violated(e))),
        );
        self.nbuf = nbuf;
        true
    }

    /// Drive the search to completion.
    pub fn run(mut self) -> SearchOutcome {
        while self.step() {}
        self.stats.peak_frontier = self.frontier.peak();
        let discipline = self.frontier.discipline();
        log::debug!(
            "{discipline} search done: {} best trace(s) of length {:?}, {:?}",
            self.best.len(),
            self.best.best_len(),
            self.stats
        );
        SearchOutcome {
            discipline,
            best: self.best,
            stats: self.stats,
        }
    }

    /// The best traces recorded so far.
    #[inline]
    pub fn best(&self) -> &BestPaths {
        &self.best
    }
}

/// Neighbour filtering guarantees every extension targets an open cell.
fn invariant_violated(e: crate::trace::OccupiedPosition) -> ! {
    panic!("trace search extended onto a non-open cell: {e}")
}
