use tracer_core::{Board, Pos};

/// Minimal search interface — provides neighbour enumeration.
pub trait Pather {
    /// Append the positions a trace may advance to from `p` into `buf`, in
    /// the fixed up, down, left, right order. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// A bare board offers its open cells; this is how the first trace cells
/// next to the start terminal are found.
impl Pather for Board {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}
