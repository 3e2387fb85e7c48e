//! Lobby layout: flip hexagonal tiles, then let them flip themselves for a hundred days.
//!
//! Hexagons are mapped to the square grid with axial coordinates: `e` and `w` move along `x`,
//! `nw` and `se` move along `y`, and `ne`/`sw` move along both.

use crate::error::ParseError;
use crate::grid::SparseGrid;
use crate::point::{Offset, Point};

const DAYS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hex {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Hex {
    const ALL: [(&'static str, Hex); 6] = [
        ("e", Hex::East),
        ("se", Hex::SouthEast),
        ("sw", Hex::SouthWest),
        ("w", Hex::West),
        ("nw", Hex::NorthWest),
        ("ne", Hex::NorthEast),
    ];

    fn offset(self) -> Offset {
        match self {
            Hex::East => Offset::new(1, 0),
            Hex::SouthEast => Offset::new(0, 1),
            Hex::SouthWest => Offset::new(-1, 1),
            Hex::West => Offset::new(-1, 0),
            Hex::NorthWest => Offset::new(0, -1),
            Hex::NorthEast => Offset::new(1, -1),
        }
    }
}

pub fn solve(input: &str) -> Result<(usize, usize), ParseError> {
    let paths = parse(input)?;
    let mut floor = flip_tiles(&paths);
    let part1 = count_black(&floor);
    for _ in 0..DAYS {
        floor = next_day(&floor);
    }
    Ok((part1, count_black(&floor)))
}

fn parse(input: &str) -> Result<Vec<Vec<Hex>>, ParseError> {
    let paths = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_path(line.trim_end(), i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    if paths.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(paths)
}

/// Parses one line of directions; columns in errors count from the start of `line`, indentation
/// included.
fn parse_path(line: &str, line_number: usize) -> Result<Vec<Hex>, ParseError> {
    let mut path = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        let Some(&(name, hex)) = Hex::ALL.iter().find(|(name, _)| rest.starts_with(name)) else {
            return Err(ParseError::UnknownDirection {
                found: rest.chars().take(2).collect(),
                line: line_number,
                column: line.len() - rest.len() + 1,
            });
        };
        path.push(hex);
        rest = &rest[name.len()..];
    }
    Ok(path)
}

/// Follows each path from the reference tile and flips the tile it ends on.
///
/// Black tiles are `true`; tiles flipped back to white stay in the grid as `false`.
fn flip_tiles(paths: &[Vec<Hex>]) -> SparseGrid<bool> {
    let mut floor = SparseGrid::<bool>::new();
    for path in paths {
        let tile = path
            .iter()
            .fold(Point::ORIGIN, |tile, hex| tile + hex.offset());
        match floor.get_mut(tile) {
            Some(black) => *black = !*black,
            None => floor.set(tile, true),
        }
    }
    floor
}

fn count_black(floor: &SparseGrid<bool>) -> usize {
    floor.values().filter(|&&black| black).count()
}

/// Applies one day of flipping to every tile at once.
///
/// Only tiles next to a black tile can be black the next day, so those are the only ones
/// considered, and only black tiles are kept in the result.
fn next_day(floor: &SparseGrid<bool>) -> SparseGrid<bool> {
    let mut black_around = SparseGrid::<u8>::new();
    for (tile, _) in floor.iter().filter(|&(_, &black)| black) {
        for (_, hex) in Hex::ALL {
            let neighbor = tile + hex.offset();
            match black_around.get_mut(neighbor) {
                Some(count) => *count += 1,
                None => black_around.set(neighbor, 1),
            }
        }
    }

    black_around
        .iter()
        .filter(|&(tile, &count)| count == 2 || (count == 1 && floor.get(tile) == Some(&true)))
        .map(|(tile, _)| (tile, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
sesenwnenenewseeswwswswwnenewsewsw
neeenesenwnwwswnenewnwwsewnenwseswesw
seswneswswsenwwnwse
nwnwneseeswswnenewneswwnewseswneseene
swweswneswnenwsewnwneneseenw
eesenwseswswnenwswnwnwsewwnwsene
sewnenenenesenwsewnenwwwse
wenwwweseeeweswwwnwwe
wsweesenenewnwwnwsenewsenwwsesesenwne
neeswseenwwswnwswswnw
nenwswwsewswnenenewsenwsenwnesesenew
enewnwewneswsewnwswenweswnenwsenwsw
sweneswneswneneenwnewenewwneswswnese
swwesenesewenwneswnwwneseswwne
enesenwswwswneneswsenwnewswseenwsese
wnwnesenesenenwwnenwsewesewsesesew
nenewswnwewswnenesenwnesewesw
eneswnwswnwsenenwnwnwwseeswneewsenese
neswnwewnwnwseenwseesewsenwsweewe
wseweeenwnesenwwwswnew";

    #[test]
    fn follow_paths() {
        let paths = parse("esew\nnwwswee").unwrap();
        assert_eq!(
            paths[0],
            vec![Hex::East, Hex::SouthEast, Hex::West]
        );

        let floor = flip_tiles(&paths);
        assert_eq!(floor.get(Point::new(0, 1)), Some(&true));
        assert_eq!(floor.get(Point::ORIGIN), Some(&true));
        assert_eq!(count_black(&floor), 2);
    }

    #[test]
    fn flip_back_to_white() {
        let floor = flip_tiles(&parse("nwwswee\nwe\nesew").unwrap());
        assert_eq!(floor.get(Point::ORIGIN), Some(&false));
        assert_eq!(count_black(&floor), 1);
    }

    #[test]
    fn black_tiles_day_by_day() {
        let mut floor = flip_tiles(&parse(INPUT).unwrap());
        assert_eq!(count_black(&floor), 10);

        let mut counts = Vec::new();
        for _ in 0..10 {
            floor = next_day(&floor);
            counts.push(count_black(&floor));
        }
        assert_eq!(counts[..3], [15, 12, 25]);
        assert_eq!(counts[9], 37);
    }

    #[test]
    fn example() {
        assert_eq!(solve(INPUT), Ok((10, 2208)));
    }

    #[test]
    fn flip_the_same_tile_twice_from_a_fresh_floor() {
        let floor = flip_tiles(&[vec![Hex::East, Hex::West], Vec::new()]);
        assert_eq!(floor.len(), 1);
        assert_eq!(floor.get(Point::ORIGIN), Some(&false));
    }

    #[test]
    fn report_columns_in_indented_lines() {
        assert_eq!(
            parse("  esew\n\teenxw  "),
            Err(ParseError::UnknownDirection {
                found: "nx".to_owned(),
                line: 2,
                column: 4
            })
        );
        assert_eq!(parse("  esew  ").unwrap()[0].len(), 3);
    }

    #[test]
    fn reject_unknown_directions() {
        assert_eq!(parse(" \n"), Err(ParseError::Empty));
        assert_eq!(
            parse("esew\neenxw"),
            Err(ParseError::UnknownDirection {
                found: "nx".to_owned(),
                line: 2,
                column: 3
            })
        );
    }
}
