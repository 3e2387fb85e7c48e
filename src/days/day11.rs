//! Seating system: a cellular automaton over the seats of a waiting area.
//!
//! Floor is never stored in the grid, so every cell in it is a seat. Rounds are applied to all
//! seats at once until nothing changes.

use crate::error::ParseError;
use crate::grid::SparseGrid;
use crate::point::{Point, ALL_DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Empty,
    Occupied,
}

pub fn solve(input: &str) -> Result<(usize, usize), ParseError> {
    let seats = parse(input)?;
    let part1 = settle(seats.clone(), 4, occupied_adjacent);
    let part2 = settle(seats, 5, occupied_visible);
    Ok((part1, part2))
}

fn parse(input: &str) -> Result<SparseGrid<Seat>, ParseError> {
    let seats = SparseGrid::try_from_chars(input, |point, c| match c {
        'L' => Ok(Some(Seat::Empty)),
        '#' => Ok(Some(Seat::Occupied)),
        '.' => Ok(None),
        found => Err(ParseError::UnexpectedChar { found, point }),
    })?;
    if seats.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(seats)
}

/// Runs rounds until the seats stop changing, and returns how many end up occupied.
///
/// An empty seat with no occupied seats around it becomes occupied; an occupied seat with at least
/// `tolerance` occupied seats around it becomes empty.
fn settle(
    mut seats: SparseGrid<Seat>,
    tolerance: usize,
    occupied_around: fn(&SparseGrid<Seat>, Point) -> usize,
) -> usize {
    loop {
        let mut changed = false;
        let next: SparseGrid<Seat> = seats
            .iter()
            .map(|(point, &seat)| {
                let around = occupied_around(&seats, point);
                let new = match seat {
                    Seat::Empty if around == 0 => Seat::Occupied,
                    Seat::Occupied if around >= tolerance => Seat::Empty,
                    unchanged => unchanged,
                };
                changed |= new != seat;
                (point, new)
            })
            .collect();

        if !changed {
            return count_occupied(&next);
        }
        seats = next;
    }
}

fn count_occupied(seats: &SparseGrid<Seat>) -> usize {
    seats
        .values()
        .filter(|&&seat| seat == Seat::Occupied)
        .count()
}

/// Occupied seats among the eight cells next to `point`.
fn occupied_adjacent(seats: &SparseGrid<Seat>, point: Point) -> usize {
    seats
        .neighbors(point, true)
        .filter(|&p| seats.get(p) == Some(&Seat::Occupied))
        .count()
}

/// Occupied seats among the first seat seen in each of the eight directions from `point`.
fn occupied_visible(seats: &SparseGrid<Seat>, point: Point) -> usize {
    let (Some(min), Some(max)) = (seats.min_values(), seats.max_values()) else {
        return 0;
    };
    let inside = |p: &Point| (min.x..=max.x).contains(&p.x) && (min.y..=max.y).contains(&p.y);

    ALL_DIRECTIONS
        .into_iter()
        .filter_map(|direction| {
            (1..)
                .map(|times| point.step(direction, times))
                .take_while(inside)
                .find_map(|p| seats.get(p))
        })
        .filter(|&&seat| seat == Seat::Occupied)
        .count()
}
