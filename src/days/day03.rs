//! Toboggan trajectory: count the trees on straight slopes down a map that repeats to the right.

use std::iter;

use crate::error::ParseError;
use crate::grid::SparseGrid;
use crate::point::{Offset, Point};

const SLOPE: Offset = Offset::new(3, 1);

const ALL_SLOPES: [Offset; 5] = [
    Offset::new(1, 1),
    Offset::new(3, 1),
    Offset::new(5, 1),
    Offset::new(7, 1),
    Offset::new(1, 2),
];

pub fn solve(input: &str) -> Result<(usize, usize), ParseError> {
    let map = parse(input)?;
    let part1 = trees_hit(&map, SLOPE);
    let part2 = ALL_SLOPES
        .into_iter()
        .map(|slope| trees_hit(&map, slope))
        .product();
    Ok((part1, part2))
}

/// Trees are `true`, open squares are `false`.
fn parse(input: &str) -> Result<SparseGrid<bool>, ParseError> {
    let map = SparseGrid::try_from_chars(input, |point, c| match c {
        '#' => Ok(Some(true)),
        '.' => Ok(Some(false)),
        found => Err(ParseError::UnexpectedChar { found, point }),
    })?;
    if map.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(map)
}

/// Counts the trees hit going down `slope` from the top-left corner, not counting the start.
fn trees_hit(map: &SparseGrid<bool>, slope: Offset) -> usize {
    let Some([top_left, .., bottom_right]) = map.corners() else {
        return 0;
    };
    let width = bottom_right.x - top_left.x + 1;

    iter::successors(Some(top_left), |&pos| Some(pos + slope))
        .skip(1)
        .take_while(|pos| pos.y <= bottom_right.y)
        .map(|pos| Point::new(top_left.x + (pos.x - top_left.x).rem_euclid(width), pos.y))
        .filter(|&pos| map.get(pos) == Some(&true))
        .count()
}
