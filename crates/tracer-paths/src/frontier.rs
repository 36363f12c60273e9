//! The pending-work container that fixes exploration order.

use std::collections::VecDeque;
use std::fmt;

/// Removal policy of a [`Frontier`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// Last in, first out: depth-first exploration.
    Stack,
    /// First in, first out: breadth-first exploration.
    Queue,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        })
    }
}

/// Pending items, removed newest-first or oldest-first depending on the
/// configured [`Discipline`].
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    items: VecDeque<T>,
    discipline: Discipline,
    peak: usize,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            items: VecDeque::new(),
            discipline,
            peak: 0,
        }
    }

    /// Insert an item.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.peak = self.peak.max(self.items.len());
    }

    /// Remove the next item according to the discipline.
    pub fn pop(&mut self) -> Option<T> {
        match self.discipline {
            Discipline::Stack => self.items.pop_back(),
            Discipline::Queue => self.items.pop_front(),
        }
    }

    /// The configured discipline.
    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Largest number of items held at once.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}

impl<T> Extend<T> for Frontier<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(f: &mut Frontier<T>) -> Vec<T> {
        std::iter::from_fn(|| f.pop()).collect()
    }

    #[test]
    fn stack_pops_newest_first() {
        let mut f = Frontier::new(Discipline::Stack);
        f.extend([1, 2, 3]);
        assert_eq!(drain(&mut f), vec![3, 2, 1]);
    }

    #[test]
    fn queue_pops_oldest_first() {
        let mut f = Frontier::new(Discipline::Queue);
        f.extend([1, 2, 3]);
        assert_eq!(drain(&mut f), vec![1, 2, 3]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut s = Frontier::new(Discipline::Stack);
        let mut q = Frontier::new(Discipline::Queue);
        for f in [&mut s, &mut q] {
            f.push('a');
            f.push('b');
        }
        assert_eq!(s.pop(), Some('b'));
        assert_eq!(q.pop(), Some('a'));
        s.push('c');
        q.push('c');
        assert_eq!(drain(&mut s), vec!['c', 'a']);
        assert_eq!(drain(&mut q), vec!['b', 'c']);
    }

    #[test]
    fn empty_frontier() {
        let mut f: Frontier<u8> = Frontier::new(Discipline::Queue);
        assert_eq!(f.pop(), None);
        assert_eq!(f.peak(), 0);
    }

    #[test]
    fn peak_tracks_high_water_mark() {
        let mut f = Frontier::new(Discipline::Stack);
        f.extend([1, 2, 3]);
        f.pop();
        f.pop();
        f.push(4);
        assert_eq!(f.peak(), 3);
        assert_eq!(drain(&mut f), vec![4, 1]);
        assert_eq!(f.peak(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(Discipline::Stack.to_string(), "stack");
        assert_eq!(Discipline::Queue.to_string(), "queue");
    }
}
