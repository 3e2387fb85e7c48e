//! An unbounded, sparse 2-dimensional grid.

use ahash::{AHashSet, RandomState};
use indexmap::IndexMap;

use crate::point::{Point, DIAGONAL, ORTHOGONAL};

type Row<V> = IndexMap<i32, V, RandomState>;

/// A 2-dimensional grid of `V` values, indexed by arbitrary [`Point`]s.
///
/// Only the cells that have been set are stored, so coordinates can be far apart or negative
/// without allocating the space in between. Cells are stored per row, and both rows and the cells
/// within a row keep their insertion order: iteration goes through rows in the order they were
/// first used, and through each row in the order its cells were first set.
///
/// Cells can't be removed, so the bounding box only ever grows.
#[derive(Debug, Clone)]
pub struct SparseGrid<V> {
    rows: IndexMap<i32, Row<V>, RandomState>,
    columns: AHashSet<i32>,
    bounds: Option<(Point, Point)>,
    len: usize,
}

impl<V> SparseGrid<V> {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            rows: IndexMap::default(),
            columns: AHashSet::new(),
            bounds: None,
            len: 0,
        }
    }

    /// Creates a grid from lines of text, where `y` is the line index and `x` the char index.
    ///
    /// Cells for which `f` returns `None` are left unset.
    pub fn from_chars(input: &str, mut f: impl FnMut(char) -> Option<V>) -> Self {
        let mut grid = Self::new();
        for (y, line) in (0..).zip(input.lines()) {
            for (x, c) in (0..).zip(line.chars()) {
                if let Some(value) = f(c) {
                    grid.set(Point::new(x, y), value);
                }
            }
        }
        grid
    }

    /// Like [`SparseGrid::from_chars`], but stops at the first error returned by `f`.
    pub fn try_from_chars<E>(
        input: &str,
        mut f: impl FnMut(Point, char) -> Result<Option<V>, E>,
    ) -> Result<Self, E> {
        let mut grid = Self::new();
        for (y, line) in (0..).zip(input.lines()) {
            for (x, c) in (0..).zip(line.chars()) {
                let point = Point::new(x, y);
                if let Some(value) = f(point, c)? {
                    grid.set(point, value);
                }
            }
        }
        Ok(grid)
    }

    /// Sets the value in cell `point`, overwriting any previous value.
    pub fn set(&mut self, point: Point, value: V) {
        let row = self.rows.entry(point.y).or_default();
        if row.insert(point.x, value).is_none() {
            self.len += 1;
        }
        self.columns.insert(point.x);

        self.bounds = Some(match self.bounds {
            None => (point, point),
            Some((min, max)) => (
                Point::new(min.x.min(point.x), min.y.min(point.y)),
                Point::new(max.x.max(point.x), max.y.max(point.y)),
            ),
        });
    }

    /// Returns a reference to the value in cell `point`, or `None` if it was never set.
    pub fn get(&self, point: Point) -> Option<&V> {
        self.rows.get(&point.y)?.get(&point.x)
    }

    /// Returns a mutable reference to the value in cell `point`, or `None` if it was never set.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut V> {
        self.rows.get_mut(&point.y)?.get_mut(&point.x)
    }

    pub fn has(&self, point: Point) -> bool {
        self.get(point).is_some()
    }

    /// Number of cells that have been set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate through all set cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> {
        self.rows.iter().flat_map(|(&y, row)| {
            row.iter()
                .map(move |(&x, value)| (Point::new(x, y), value))
        })
    }

    /// Iterate through the points of all set cells, in the same order as [`SparseGrid::iter`].
    pub fn keys(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().map(|(point, _)| point)
    }

    /// Iterate through the values of all set cells, in the same order as [`SparseGrid::iter`].
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.values().flat_map(|row| row.values())
    }

    /// Returns the first point, in iteration order, whose value satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&V) -> bool) -> Option<Point> {
        self.iter()
            .find(|(_, value)| predicate(value))
            .map(|(point, _)| point)
    }

    /// Iterate through the set cells in row `y`.
    ///
    /// Cells come in the order they were first set, *not* sorted by `x`.
    pub fn row(&self, y: i32) -> impl Iterator<Item = (Point, &V)> {
        self.rows.get(&y).into_iter().flat_map(move |row| {
            row.iter()
                .map(move |(&x, value)| (Point::new(x, y), value))
        })
    }

    /// Iterate through the values set in column `x`, from the topmost row down.
    ///
    /// The rows holding a value in `x` are found and sorted up front, in `O(rows)`; the values
    /// themselves are only looked up as the iterator advances.
    pub fn column(&self, x: i32) -> impl Iterator<Item = &V> {
        let mut ys: Vec<_> = if self.columns.contains(&x) {
            self.rows
                .iter()
                .filter(|(_, row)| row.contains_key(&x))
                .map(|(&y, _)| y)
                .collect()
        } else {
            Vec::new()
        };
        ys.sort_unstable();
        ys.into_iter()
            .filter_map(move |y| self.rows.get(&y)?.get(&x))
    }

    /// Iterate through the points around `point`, whether set or not.
    ///
    /// The four orthogonal neighbors always come first; the four diagonal ones follow if
    /// `allow_diagonal` is set. Neighbors that would fall outside the `i32` range are skipped.
    pub fn neighbors(&self, point: Point, allow_diagonal: bool) -> impl Iterator<Item = Point> {
        let diagonal = DIAGONAL
            .into_iter()
            .take(if allow_diagonal { DIAGONAL.len() } else { 0 });
        ORTHOGONAL
            .into_iter()
            .chain(diagonal)
            .filter_map(move |offset| point.checked_step(offset, 1))
    }

    /// All column indices ever used, in ascending order.
    pub fn all_x(&self) -> Vec<i32> {
        let mut xs: Vec<_> = self.columns.iter().copied().collect();
        xs.sort_unstable();
        xs
    }

    /// All row indices ever used, in ascending order.
    pub fn all_y(&self) -> Vec<i32> {
        let mut ys: Vec<_> = self.rows.keys().copied().collect();
        ys.sort_unstable();
        ys
    }

    /// The top-left corner of the bounding box, or `None` if the grid is empty.
    pub fn min_values(&self) -> Option<Point> {
        self.bounds.map(|(min, _)| min)
    }

    /// The bottom-right corner of the bounding box, or `None` if the grid is empty.
    pub fn max_values(&self) -> Option<Point> {
        self.bounds.map(|(_, max)| max)
    }

    /// Top-left, bottom-left, top-right and bottom-right corners of the bounding box.
    pub fn corners(&self) -> Option<[Point; 4]> {
        let (min, max) = self.bounds?;
        Some([
            min,
            Point::new(min.x, max.y),
            Point::new(max.x, min.y),
            max,
        ])
    }

    /// Number of columns spanned by the bounding box.
    pub fn width(&self) -> usize {
        self.bounds
            .map_or(0, |(min, max)| max.x.abs_diff(min.x) as usize + 1)
    }

    /// Number of rows spanned by the bounding box.
    pub fn height(&self) -> usize {
        self.bounds
            .map_or(0, |(min, max)| max.y.abs_diff(min.y) as usize + 1)
    }

    /// Draws the bounding box, one line per row, with `f` picking the char for each cell.
    pub fn render(&self, f: impl Fn(Option<&V>) -> char) -> String {
        let Some((min, max)) = self.bounds else {
            return String::new();
        };
        let mut buf = String::with_capacity((self.width() + 1) * self.height());
        for y in min.y..=max.y {
            if y != min.y {
                buf.push('\n');
            }
            buf.extend((min.x..=max.x).map(|x| f(self.get(Point::new(x, y)))));
        }
        buf
    }
}

impl<V> Default for SparseGrid<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(Point, V)> for SparseGrid<V> {
    fn extend<T: IntoIterator<Item = (Point, V)>>(&mut self, iter: T) {
        for (point, value) in iter {
            self.set(point, value);
        }
    }
}

impl<V> FromIterator<(Point, V)> for SparseGrid<V> {
    fn from_iter<T: IntoIterator<Item = (Point, V)>>(iter: T) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}
