// Shortest routes on either grid kind with wave propagation (Lee's algorithm).
//
// Every step costs the same, so a breadth first flood where a whole wave of cells at distance d
// is expanded before any cell at d + 1 gives each cell its shortest hop count the moment it is
// first reached. The distances then double as the visited set: a cell is never revisited once it
// holds a distance.
//
// The route is rebuilt backwards from the goal by repeatedly stepping to a neighbour exactly one
// wave closer to the start.

use error_chain::bail;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;

/// Order in which neighbours are tried when several are one step closer to the start during
/// path reconstruction: left, right, up, down.
pub const PREDECESSOR_PRIORITY: [CompassPrimary; 4] = [CompassPrimary::West,
                                                       CompassPrimary::East,
                                                       CompassPrimary::North,
                                                       CompassPrimary::South];

const UNREACHED: u32 = u32::MAX;

/// Hop counts from a start cell, row major, for the cells the waves reached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Distances {
    start: Point,
    dimensions: GridDimensions,
    distances: Vec<u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood the whole region reachable from `start`.
    pub fn for_grid<G: WalledGrid>(grid: &G, start: Point) -> Result<Distances> {
        Distances::propagate(grid, start, None)
    }

    /// Propagate waves from `start` only until `goal` is assigned a distance.
    ///
    /// Fails with `Unreachable` if the waves die out first.
    pub fn towards<G: WalledGrid>(grid: &G, start: Point, goal: Point) -> Result<Distances> {
        grid.dimensions().check_contains(goal)?;

        let distances = Distances::propagate(grid, start, Some(goal))?;
        if distances.distance_from_start_to(goal).is_none() {
            bail!(ErrorKind::Unreachable(start, goal));
        }
        Ok(distances)
    }

    fn propagate<G: WalledGrid>(grid: &G, start: Point, goal: Option<Point>) -> Result<Distances> {
        let dimensions = grid.dimensions();
        dimensions.check_contains(start)?;

        let mut distances = Distances {
            start,
            dimensions,
            distances: vec![UNREACHED; dimensions.size()],
            max_distance: 0,
        };
        distances.set(start, 0);
        if goal == Some(start) {
            return Ok(distances);
        }

        // Two alternating buffers: the wave being expanded and the one being built.
        let mut wave: Vec<Point> = vec![start];
        let mut next_wave: Vec<Point> = Vec::new();
        let mut wave_distance = 0;

        'waves: while !wave.is_empty() {
            wave_distance += 1;

            for cell in wave.drain(..) {
                let neighbours: SmallVec<[Point; 4]> = grid.open_neighbours(cell);
                for neighbour in neighbours {
                    if distances.distance_from_start_to(neighbour).is_some() {
                        continue;
                    }
                    distances.set(neighbour, wave_distance);
                    if goal == Some(neighbour) {
                        break 'waves;
                    }
                    next_wave.push(neighbour);
                }
            }

            std::mem::swap(&mut wave, &mut next_wave);
        }

        debug!("Waves from ({}, {}) stopped at distance {}",
               start.x, start.y, distances.max_distance);
        Ok(distances)
    }

    #[inline]
    fn set(&mut self, point: Point, distance: u32) {
        if let Some(i) = self.dimensions.index_of(point) {
            self.distances[i] = distance;
            if distance > self.max_distance {
                self.max_distance = distance;
            }
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Largest distance assigned so far.
    #[inline]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None if `point` is off the grid or was never reached.
    #[inline]
    pub fn distance_from_start_to(&self, point: Point) -> Option<u32> {
        self.dimensions
            .index_of(point)
            .map(|i| self.distances[i])
            .filter(|d| *d != UNREACHED)
    }

    /// The reached cells at the maximum distance, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Point; 8]> {
        let furthest_distance = self.max();
        self.dimensions
            .iter()
            .filter(|p| self.distance_from_start_to(*p) == Some(furthest_distance))
            .collect()
    }
}

/// Rebuild the route from the start of `distances` to `goal`, start and goal inclusive.
///
/// Walking back from the goal, each step goes to the first neighbour in `PREDECESSOR_PRIORITY`
/// order that is one wave closer to the start and has an open passage into the current cell.
/// Fails with `Unreachable` when the goal has no distance and with `InconsistentState` when a
/// reached cell has no such neighbour, which means the distances do not describe this grid.
pub fn shortest_path<G: WalledGrid>(grid: &G,
                                    distances: &Distances,
                                    goal: Point)
                                    -> Result<Vec<Point>> {
    let dimensions = grid.dimensions();
    if dimensions != distances.dimensions() {
        bail!(ErrorKind::MalformedGrid(format!("distances for a {}x{} grid used on a {}x{} grid",
                                               distances.dimensions().rows().0,
                                               distances.dimensions().columns().0,
                                               dimensions.rows().0,
                                               dimensions.columns().0)));
    }
    dimensions.check_contains(goal)?;

    let mut current_distance = distances.distance_from_start_to(goal)
        .ok_or_else(|| ErrorKind::Unreachable(distances.start(), goal))?;
    let mut current = goal;
    let mut path = Vec::with_capacity(current_distance as usize + 1);
    path.push(goal);

    while current_distance > 0 {
        let closer = current_distance - 1;
        let predecessor = PREDECESSOR_PRIORITY
            .iter()
            .filter_map(|dir| {
                dimensions.neighbour(current, *dir)
                    .filter(|n| distances.distance_from_start_to(*n) == Some(closer))
                    .filter(|n| grid.is_open_towards(*n, dir.opposite()))
            })
            .next();

        match predecessor {
            Some(p) => {
                current = p;
                current_distance = closer;
                path.push(p);
            }
            None => {
                warn!("No predecessor for ({}, {}) at distance {}",
                      current.x, current.y, current_distance);
                bail!(ErrorKind::InconsistentState(current, current_distance));
            }
        }
    }

    if current != distances.start() {
        bail!(ErrorKind::InconsistentState(current, 0));
    }

    path.reverse();
    Ok(path)
}

/// Find a shortest route from `from` to `to` on a maze or cave, both ends inclusive.
///
/// The grid is validated first. Errors are `MalformedGrid`, `OutOfBounds` when either point is
/// off the grid, `Unreachable` and `InconsistentState`.
pub fn solve<G: WalledGrid>(grid: &G, from: Point, to: Point) -> Result<Vec<Point>> {
    grid.validate()?;
    let dimensions = grid.dimensions();
    dimensions.check_contains(from)?;
    dimensions.check_contains(to)?;

    let distances = Distances::towards(grid, from, to)?;
    let path = shortest_path(grid, &distances, to)?;
    debug!("Route ({}, {}) -> ({}, {}) of {} cells", from.x, from.y, to.x, to.y, path.len());
    Ok(path)
}
