use error_chain::bail;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;

/// A maze as two wall bit arrays, one bit per cell in row major order.
///
/// `right_walls[i]` closes the passage east of cell `i` and `bottom_walls[i]` the passage
/// south of it. Walls to the north and west of a cell are the bottom/right walls of its
/// neighbours. The right wall of every last column cell and the bottom wall of every last row
/// cell are always closed.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Maze {
    dimensions: GridDimensions,
    right_walls: Vec<bool>,
    bottom_walls: Vec<bool>,
}

impl Maze {
    /// A maze with only the outer boundary walls closed: every interior passage is open.
    pub fn with_boundary_walls(dimensions: GridDimensions) -> Maze {
        let right_walls = dimensions.iter().map(|p| dimensions.is_last_column(p.y)).collect();
        let bottom_walls = dimensions.iter().map(|p| dimensions.is_last_row(p.x)).collect();
        Maze {
            dimensions,
            right_walls,
            bottom_walls,
        }
    }

    /// A maze with every wall closed, no cell connects to any other.
    pub fn fully_walled(dimensions: GridDimensions) -> Maze {
        Maze {
            dimensions,
            right_walls: vec![true; dimensions.size()],
            bottom_walls: vec![true; dimensions.size()],
        }
    }

    /// Build a maze from raw row major wall bits, checking the storage invariants.
    pub fn from_walls(dimensions: GridDimensions,
                      right_walls: Vec<bool>,
                      bottom_walls: Vec<bool>)
                      -> Result<Maze> {
        let maze = Maze {
            dimensions,
            right_walls,
            bottom_walls,
        };
        maze.validate()?;
        Ok(maze)
    }

    #[inline]
    pub fn right_walls(&self) -> &[bool] {
        &self.right_walls
    }

    #[inline]
    pub fn bottom_walls(&self) -> &[bool] {
        &self.bottom_walls
    }

    /// Is the east side of `point` walled? Points off the grid are all wall.
    pub fn has_right_wall(&self, point: Point) -> bool {
        self.dimensions.index_of(point).map_or(true, |i| self.right_walls[i])
    }

    /// Is the south side of `point` walled? Points off the grid are all wall.
    pub fn has_bottom_wall(&self, point: Point) -> bool {
        self.dimensions.index_of(point).map_or(true, |i| self.bottom_walls[i])
    }

    pub(crate) fn set_right_wall(&mut self, point: Point, closed: bool) {
        if let Some(i) = self.dimensions.index_of(point) {
            self.right_walls[i] = closed;
        }
    }

    pub(crate) fn set_bottom_wall(&mut self, point: Point, closed: bool) {
        if let Some(i) = self.dimensions.index_of(point) {
            self.bottom_walls[i] = closed;
        }
    }

    /// Undirected graph with a node per cell (weighted by its point, node index is the row
    /// major index) and an edge per open passage.
    pub fn passage_graph(&self) -> UnGraph<Point, ()> {
        let size = self.dimensions.size();
        let mut graph = UnGraph::with_capacity(size, 2 * size);
        for point in self.dimensions.iter() {
            let _ = graph.add_node(point);
        }

        for point in self.dimensions.iter() {
            for dir in &[CompassPrimary::East, CompassPrimary::South] {
                if !self.is_open_towards(point, *dir) {
                    continue;
                }
                let neighbour_index = self.dimensions
                    .neighbour(point, *dir)
                    .and_then(|n| self.dimensions.index_of(n));
                if let (Some(a), Some(b)) = (self.dimensions.index_of(point), neighbour_index) {
                    let _ = graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
                }
            }
        }
        graph
    }

    /// A perfect maze has exactly one route between any two cells: its passage graph is a
    /// single spanning tree.
    pub fn is_perfect(&self) -> bool {
        let graph = self.passage_graph();
        graph.edge_count() + 1 == graph.node_count() && connected_components(&graph) == 1
    }
}

impl WalledGrid for Maze {
    #[inline]
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn is_open_towards(&self, from: Point, direction: CompassPrimary) -> bool {
        let neighbour = match self.dimensions.neighbour(from, direction) {
            Some(n) if self.dimensions.contains(from) => n,
            _ => return false,
        };
        let walled = match direction {
            CompassPrimary::East => self.has_right_wall(from),
            CompassPrimary::South => self.has_bottom_wall(from),
            CompassPrimary::West => self.has_right_wall(neighbour),
            CompassPrimary::North => self.has_bottom_wall(neighbour),
        };
        !walled
    }

    fn validate(&self) -> Result<()> {
        let size = self.dimensions.size();
        if self.right_walls.len() != size || self.bottom_walls.len() != size {
            bail!(ErrorKind::MalformedGrid(format!("wall arrays of length {} and {} for {} cells",
                                                   self.right_walls.len(),
                                                   self.bottom_walls.len(),
                                                   size)));
        }

        let d = &self.dimensions;
        if let Some(p) = d.iter().find(|p| d.is_last_column(p.y) && !self.has_right_wall(*p)) {
            bail!(ErrorKind::MalformedGrid(format!("missing right boundary wall at ({}, {})",
                                                   p.x, p.y)));
        }
        if let Some(p) = d.iter().find(|p| d.is_last_row(p.x) && !self.has_bottom_wall(*p)) {
            bail!(ErrorKind::MalformedGrid(format!("missing bottom boundary wall at ({}, {})",
                                                   p.x, p.y)));
        }
        Ok(())
    }
}
