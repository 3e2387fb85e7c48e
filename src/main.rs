//! Solve grid puzzles from input files.
//!
//! See the library documentation for an overview of the puzzles and the grid.

mod options;

use std::fs;
use std::time::Instant;

use advent_grid::days;
use anyhow::{bail, Context};
use clap::Parser;

use crate::options::Options;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    for day in options.days() {
        if !days::IMPLEMENTED.contains(&day) {
            bail!("no solution for day {day}");
        }

        let path = options.input_path(day);
        let input = fs::read_to_string(&path)
            .with_context(|| format!("could not read input for day {day} from {path:?}"))?;

        let start = Instant::now();
        let answers = days::solve(day, &input)
            .with_context(|| format!("no solution for day {day}"))?
            .with_context(|| format!("could not parse input for day {day}"))?;

        println!("day {day:02}: {} {}", answers.part1, answers.part2);
        eprintln!("day {day:02} solved in {:.2?}", start.elapsed());
    }

    Ok(())
}
