use error_chain::bail;

use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

pub const MIN_SIDE_LENGTH: usize = 1;
pub const MAX_SIDE_LENGTH: usize = 50;

/// The extent of a rectangular grid, always within `MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH` on
/// both sides.
///
/// Cells are stored row major: the index of `Point { x: row, y: column }` is
/// `row * columns + column`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
        if !is_valid_side_length(r) || !is_valid_side_length(c) {
            bail!(ErrorKind::InvalidDimensions(r, c));
        }
        Ok(GridDimensions { rows, columns })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.rows.0 && point.y < self.columns.0
    }

    /// Row major index of `point`, None if it is off the grid.
    #[inline]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.x * self.columns.0 + point.y)
        } else {
            None
        }
    }

    pub fn point_at(&self, index: usize) -> Option<Point> {
        if index < self.size() {
            Some(Point::new(index / self.columns.0, index % self.columns.0))
        } else {
            None
        }
    }

    /// The neighbouring cell of `point` in `dir` if that cell is on the grid.
    pub fn neighbour(&self, point: Point, dir: CompassPrimary) -> Option<Point> {
        point.offset(dir).filter(|p| self.contains(*p))
    }

    /// Fails with `OutOfBounds` unless `point` is on the grid.
    pub fn check_contains(&self, point: Point) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(ErrorKind::OutOfBounds(point, self.rows.0, self.columns.0).into())
        }
    }

    /// Every point in row major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> {
        let columns = self.columns.0;
        (0..self.size()).map(move |i| Point::new(i / columns, i % columns))
    }

    #[inline]
    pub fn is_last_row(&self, x: usize) -> bool {
        x + 1 == self.rows.0
    }

    #[inline]
    pub fn is_last_column(&self, y: usize) -> bool {
        y + 1 == self.columns.0
    }
}

#[inline]
pub fn is_valid_side_length(length: usize) -> bool {
    length >= MIN_SIDE_LENGTH && length <= MAX_SIDE_LENGTH
}
