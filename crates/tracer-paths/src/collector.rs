//! [`BestPaths`] — keeps only the shortest completed traces.

use crate::trace::TraceState;

/// What [`BestPaths::record`] did with a candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    /// The first completed trace.
    First,
    /// Strictly shorter than the previous best; older paths were dropped.
    Improved,
    /// As long as the current best; appended.
    Tied,
    /// Longer than the current best; ignored.
    Discarded,
}

/// The shortest completed traces seen so far, in the order they were
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct BestPaths {
    best: Option<usize>,
    paths: Vec<TraceState>,
}

impl BestPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a completed trace.
    pub fn record(&mut self, candidate: TraceState) -> Recorded {
        let len = candidate.path_len();
        let outcome = match self.best {
            None => Recorded::First,
            Some(best) if len < best => Recorded::Improved,
            Some(best) if len == best => Recorded::Tied,
            Some(_) => return Recorded::Discarded,
        };
        if outcome == Recorded::Improved {
            self.paths.clear();
        }
        self.best = Some(len);
        self.paths.push(candidate);
        outcome
    }

    /// Length of the current best traces, `None` before any completion.
    #[inline]
    pub fn best_len(&self) -> Option<usize> {
        self.best
    }

    /// The best traces in recording order.
    #[inline]
    pub fn paths(&self) -> &[TraceState] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<TraceState> {
        self.paths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tracer_core::{Board, Pos};

    use super::*;

    /// A trace of `len` cells along the top row of an open corridor.
    fn trace(len: usize) -> TraceState {
        let board = Rc::new(Board::parse("1 12 1 O O O O O O O O O O 2").unwrap());
        let mut t = TraceState::seed(board, Pos::new(0, 1)).unwrap();
        for col in 2..=len as i32 {
            t = t.extend(Pos::new(0, col)).unwrap();
        }
        t
    }

    #[test]
    fn first_candidate_is_kept() {
        let mut best = BestPaths::new();
        assert_eq!(best.best_len(), None);
        assert!(best.is_empty());
        assert_eq!(best.record(trace(5)), Recorded::First);
        assert_eq!(best.best_len(), Some(5));
        assert_eq!(best.len(), 1);
    }

    #[test]
    fn shorter_candidate_replaces_all() {
        let mut best = BestPaths::new();
        best.record(trace(5));
        best.record(trace(5));
        assert_eq!(best.record(trace(3)), Recorded::Improved);
        assert_eq!(best.best_len(), Some(3));
        assert_eq!(best.len(), 1);
        assert_eq!(best.paths()[0].path_len(), 3);
    }

    #[test]
    fn tie_is_appended_in_order() {
        let mut best = BestPaths::new();
        let a = trace(4);
        let b = trace(4);
        best.record(a);
        assert_eq!(best.record(b), Recorded::Tied);
        assert_eq!(best.len(), 2);
        assert!(best.paths().iter().all(|t| t.path_len() == 4));
    }

    #[test]
    fn longer_candidate_is_discarded() {
        let mut best = BestPaths::new();
        best.record(trace(3));
        assert_eq!(best.record(trace(7)), Recorded::Discarded);
        assert_eq!(best.best_len(), Some(3));
        assert_eq!(best.into_paths().len(), 1);
    }
}
