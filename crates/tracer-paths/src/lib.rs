//! Exhaustive shortest-trace search for circuit boards.
//!
//! Starting from the open cells next to the start terminal, every simple
//! trace is grown one cell at a time until its head touches the end
//! terminal. The exploration order is set by a [`Discipline`]:
//!
//! - **Stack** (LIFO) explores depth-first
//! - **Queue** (FIFO) explores breadth-first
//!
//! Both report the same minimum length and the same set of minimal traces
//! through [`search`], which returns a [`SearchOutcome`].
//!
//! # Building blocks
//!
//! | Type | Role |
//! |---|---|
//! | [`TraceState`] | immutable partial trace sharing the board |
//! | [`Frontier`] | pending traces, ordered by its [`Discipline`] |
//! | [`BestPaths`] | keeps only the shortest completed traces |
//! | [`Search`] | drives the frontier until it is exhausted |

mod collector;
mod frontier;
mod search;
mod trace;
mod traits;

pub use collector::{BestPaths, Recorded};
pub use frontier::{Discipline, Frontier};
pub use search::{Search, SearchOutcome, SearchStats, search};
pub use trace::{OccupiedPosition, TraceState};
pub use traits::Pather;
