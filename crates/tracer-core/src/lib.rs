//! **tracer-core** — Circuit board model for the circuit tracer.
//!
//! This crate provides the types every other tracer crate builds on:
//! board positions, cell contents, an owned row-major grid, and the
//! validated [`Board`] parsed from the textual board format.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use board::{Board, Terminal};
pub use cell::Cell;
pub use error::{FormatError, LoadError};
pub use geom::Pos;
pub use grid::Grid;
