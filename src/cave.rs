use error_chain::bail;

use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;

/// Moore neighbourhood offsets as (row, column) deltas.
const MOORE_OFFSETS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1),
                                            (0, -1), (0, 1),
                                            (1, -1), (1, 0), (1, 1)];

/// A cave: one bit per cell in row major order, `true` is blocked (alive in the automaton),
/// `false` is open floor.
///
/// Unlike a maze there is no connectivity guarantee, any layout of bits is a valid cave.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Cave {
    dimensions: GridDimensions,
    cells: Vec<bool>,
}

impl Cave {
    pub fn open(dimensions: GridDimensions) -> Cave {
        Cave {
            dimensions,
            cells: vec![false; dimensions.size()],
        }
    }

    pub fn from_cells(dimensions: GridDimensions, cells: Vec<bool>) -> Result<Cave> {
        let cave = Cave { dimensions, cells };
        cave.validate()?;
        Ok(cave)
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Points off the grid count as blocked.
    pub fn is_blocked(&self, point: Point) -> bool {
        self.dimensions.index_of(point).map_or(true, |i| self.cells[i])
    }

    pub(crate) fn set_blocked(&mut self, point: Point, blocked: bool) {
        if let Some(i) = self.dimensions.index_of(point) {
            self.cells[i] = blocked;
        }
    }

    /// Count of blocked cells in the 8 cell neighbourhood of `point`, where every neighbour
    /// outside the grid counts as blocked.
    pub fn blocked_neighbours(&self, point: Point) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let x = point.x as isize + dx;
                let y = point.y as isize + dy;
                x < 0 || y < 0 || self.is_blocked(Point::new(x as usize, y as usize))
            })
            .count()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&blocked| blocked).count()
    }
}

impl WalledGrid for Cave {
    #[inline]
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn is_open_towards(&self, from: Point, direction: CompassPrimary) -> bool {
        if !self.dimensions.contains(from) {
            return false;
        }
        self.dimensions
            .neighbour(from, direction)
            .map_or(false, |neighbour| !self.is_blocked(neighbour))
    }

    fn validate(&self) -> Result<()> {
        if self.cells.len() != self.dimensions.size() {
            bail!(ErrorKind::MalformedGrid(format!("cell array of length {} for {} cells",
                                                   self.cells.len(),
                                                   self.dimensions.size())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, cols: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(cols)).expect("valid dimensions")
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Cave::from_cells(dims(2, 2), vec![true; 4]).is_ok());
        let err = Cave::from_cells(dims(2, 2), vec![true; 5]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedGrid(_)));
    }

    #[test]
    fn neighbours_outside_the_grid_are_blocked() {
        let c = Cave::open(dims(3, 3));
        assert_eq!(c.blocked_neighbours(Point::new(1, 1)), 0);
        assert_eq!(c.blocked_neighbours(Point::new(0, 0)), 5);
        assert_eq!(c.blocked_neighbours(Point::new(0, 1)), 3);
        assert_eq!(c.blocked_neighbours(Point::new(2, 2)), 5);

        let single = Cave::open(dims(1, 1));
        assert_eq!(single.blocked_neighbours(Point::new(0, 0)), 8);
    }

    #[test]
    fn neighbour_counting_ignores_the_cell_itself() {
        let mut c = Cave::open(dims(3, 3));
        c.set_blocked(Point::new(1, 1), true);
        assert_eq!(c.blocked_neighbours(Point::new(1, 1)), 0);
        assert_eq!(c.blocked_neighbours(Point::new(0, 1)), 4);
        assert_eq!(c.blocked_count(), 1);
    }

    #[test]
    fn steps_into_blocked_cells_are_closed() {
        let mut c = Cave::open(dims(2, 2));
        c.set_blocked(Point::new(0, 1), true);
        assert!(!c.is_open_towards(Point::new(0, 0), CompassPrimary::East));
        assert!(c.is_open_towards(Point::new(0, 0), CompassPrimary::South));
        // stepping out of a blocked cell only looks at the destination
        assert!(c.is_open_towards(Point::new(0, 1), CompassPrimary::South));
        assert!(!c.is_open_towards(Point::new(0, 0), CompassPrimary::North));
    }

    #[test]
    fn non_square_layout_is_row_major() {
        let cells = vec![false, true, false, false, false, false, true, false];
        let c = Cave::from_cells(dims(2, 4), cells).unwrap();
        assert!(c.is_blocked(Point::new(0, 1)));
        assert!(c.is_blocked(Point::new(1, 2)));
        assert!(!c.is_blocked(Point::new(1, 1)));
        assert!(c.is_blocked(Point::new(2, 0)));
    }
}
