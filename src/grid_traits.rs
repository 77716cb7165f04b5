use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;

/// The capability the path finder needs from a grid: its extent and whether a single
/// orthogonal step is possible.
///
/// A maze answers from the wall bit between the two cells, a cave from the blocked bit of
/// the cell being stepped into.
pub trait WalledGrid {
    fn dimensions(&self) -> GridDimensions;

    /// Can we step from `from` to its neighbour in `direction`?
    ///
    /// False when the neighbour is off the grid or `from` itself is.
    fn is_open_towards(&self, from: Point, direction: CompassPrimary) -> bool;

    /// Check the internal invariants of the grid's storage.
    fn validate(&self) -> Result<()>;

    /// Neighbours reachable in one step from `from`, in `CompassPrimary::ALL` order.
    fn open_neighbours(&self, from: Point) -> smallvec::SmallVec<[Point; 4]> {
        let dimensions = self.dimensions();
        CompassPrimary::ALL
            .iter()
            .filter(|dir| self.is_open_towards(from, **dir))
            .filter_map(|dir| dimensions.neighbour(from, *dir))
            .collect()
    }
}
