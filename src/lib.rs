//! Grid puzzles and the sparse grid they are built on.
//!
//! # High-level overview
//!
//! Each puzzle "day" reads a small text input and computes the answers to its two parts. The days
//! implemented here are the ones built on [`SparseGrid`], an unbounded
//! two-dimensional map from integer points to values:
//!
//! - day 3 walks straight slopes down a map of trees that repeats to the right;
//! - day 11 runs a cellular automaton over the seats of a waiting area;
//! - day 24 flips hexagonal floor tiles, then runs a hexagonal automaton for a hundred days.
//!
//! # Implementation notes
//!
//! Puzzle coordinates can be negative (day 24 grows in every direction from its reference tile)
//! and are often mostly empty (floor in day 11 is never stored), so a dense 2-D array would need
//! to be resized and re-offset as the puzzles evolve. The sparse grid instead stores rows in a
//! map, and the cells of each row in another map, while tracking the bounding box of everything
//! set so far.
//!
//! Both maps keep insertion order, which makes iteration order deterministic: rows in the order
//! they were first used, then cells in the order they were first set. Cells can't be removed, so
//! automata build a new grid for each generation instead of mutating the current one in place.
//!
//! Solutions never print: they take the input as a `&str` and return their answers, so they can
//! be tested against the examples from the puzzle texts.
//!
//! # Build, test and execute
//!
//! - Run the unit tests: `cargo test`
//! - Solve every day, reading `inputs/dayNN.txt`: `cargo run --release`
//! - Solve one day with some other input: `cargo run --release -- --day 11 --input seats.txt`
//! - View this documentation in the browser: `cargo doc --open --document-private-items`

pub mod days;
pub mod error;
pub mod grid;
pub mod point;

pub use crate::error::ParseError;
pub use crate::grid::SparseGrid;
pub use crate::point::{Offset, Point};
