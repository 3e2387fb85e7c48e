//! Puzzle solutions, one module per day.
//!
//! Every day takes the whole puzzle input and returns the answers to both parts.

use std::fmt::Display;

use crate::error::ParseError;

mod day03;
mod day11;
mod day24;

/// Days with a solution, in ascending order.
pub const IMPLEMENTED: [u8; 3] = [3, 11, 24];

/// The answers to both parts of a day, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part1: String,
    pub part2: String,
}

impl<A: Display, B: Display> From<(A, B)> for Answers {
    fn from((part1, part2): (A, B)) -> Self {
        Answers {
            part1: part1.to_string(),
            part2: part2.to_string(),
        }
    }
}

/// Solves `day` with `input`, or returns `None` if there's no solution for that day.
pub fn solve(day: u8, input: &str) -> Option<Result<Answers, ParseError>> {
    let answers = match day {
        3 => day03::solve(input).map(Answers::from),
        11 => day11::solve(input).map(Answers::from),
        24 => day24::solve(input).map(Answers::from),
        _ => return None,
    };
    Some(answers)
}
