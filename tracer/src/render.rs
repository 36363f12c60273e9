//! Console rendering of search results.

use std::io::{self, Write};

use tracer_paths::TraceState;

/// Write each trace as its marked board, one row per line with cells
/// separated by spaces. Boards are separated by a blank line.
pub fn write_paths<W: Write>(out: &mut W, paths: &[TraceState]) -> io::Result<()> {
    for (i, trace) in paths.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{trace}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracer_core::Board;
    use tracer_paths::{Discipline, search};

    use super::*;

    fn render(paths: &[TraceState]) -> String {
        let mut buf = Vec::new();
        write_paths(&mut buf, paths).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn nothing_to_print() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn single_path() {
        let board = Board::parse("2 3 1 O X X O 2").unwrap();
        let out = search(board, Discipline::Stack);
        assert_eq!(render(out.paths()), "1 T X\nX T 2\n");
    }

    #[test]
    fn boards_are_separated_by_blank_lines() {
        let board = Board::parse("2 2 1 O O 2").unwrap();
        let out = search(board, Discipline::Queue);
        // Down first, then right.
        assert_eq!(render(out.paths()), "1 O\nT 2\n\n1 T\nO 2\n");
    }
}
