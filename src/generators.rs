use log::debug;
use rand::Rng;

use crate::cells::Point;
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::settings::MazeSettings;
use crate::utils;

/// Set label of a cell that is not yet connected to anything in the current row.
const UNSET: usize = 0;

/// Generate a perfect maze with Eller's algorithm, failing with `InvalidDimensions` if the
/// settings are out of range.
pub fn generate_maze<R: Rng + ?Sized>(settings: &MazeSettings, rng: &mut R) -> Result<Maze> {
    let dimensions = settings.dimensions()?;
    Ok(ellers(dimensions, rng))
}

/// Apply Eller's set merging algorithm to build a perfect maze one row at a time.
///
/// Only the current row is tracked: each column carries a set label naming the group of
/// cells it is already connected to, through this row or the rows above.
/// For each row, from the top:
/// - Cells without a label get a fresh set of their own.
/// - Walk the row west to east deciding on each right wall with a coin flip. Two cells in the
///   same set always keep the wall between them (removing it would create a loop), otherwise
///   an open wall merges the right hand set into the left hand one.
/// - Decide each bottom wall with a coin flip, except that a set always keeps at least one
///   open bottom wall. Without that the set, and everything connected to it, would be cut off
///   from the rest of the maze.
/// - Cells under an open bottom wall carry their label down to the next row, the rest start
///   the next row unset.
///
/// The last row keeps all its bottom walls and then opens every wall between neighbours that
/// still belong to different sets, which joins the whole grid into one connected tree.
pub fn ellers<R: Rng + ?Sized>(dimensions: GridDimensions, rng: &mut R) -> Maze {
    let mut maze = Maze::fully_walled(dimensions);
    let mut row_sets = RowSets::new(dimensions.columns().0);

    for x in 0..dimensions.rows().0 {
        row_sets.assign_fresh_sets();
        carve_right_passages(&mut maze, &mut row_sets, x, rng);

        if dimensions.is_last_row(x) {
            join_remaining_sets(&mut maze, &mut row_sets, x);
        } else {
            carve_bottom_passages(&mut maze, &row_sets, x, rng);
            row_sets.carry_down(&maze, x);
        }
    }

    debug!("Eller's maze {}x{} built using {} sets",
           dimensions.rows().0,
           dimensions.columns().0,
           row_sets.sets_created());
    maze
}

fn carve_right_passages<R: Rng + ?Sized>(maze: &mut Maze,
                                         row_sets: &mut RowSets,
                                         x: usize,
                                         rng: &mut R) {
    // The last column's right wall is the outer boundary and is never considered.
    for y in 0..row_sets.len().saturating_sub(1) {
        let keep_wall = row_sets.same_set(y, y + 1) || rng.gen::<bool>();
        if !keep_wall {
            maze.set_right_wall(Point::new(x, y), false);
            row_sets.merge(y, y + 1);
        }
    }
}

fn carve_bottom_passages<R: Rng + ?Sized>(maze: &mut Maze,
                                          row_sets: &RowSets,
                                          x: usize,
                                          rng: &mut R) {
    // Every bottom wall starts out as a candidate opening for its set.
    let mut openings = row_sets.set_sizes();

    for y in 0..row_sets.len() {
        let wants_wall = rng.gen::<bool>();
        let set_openings = openings.entry(row_sets.label(y)).or_insert(1);
        if wants_wall && *set_openings > 1 {
            *set_openings -= 1;
        } else {
            maze.set_bottom_wall(Point::new(x, y), false);
        }
    }
}

fn join_remaining_sets(maze: &mut Maze, row_sets: &mut RowSets, x: usize) {
    for y in 0..row_sets.len().saturating_sub(1) {
        if !row_sets.same_set(y, y + 1) {
            maze.set_right_wall(Point::new(x, y), false);
            row_sets.merge(y, y + 1);
        }
    }
}

/// Set labels for the columns of the row being built.
#[derive(Debug, Clone)]
struct RowSets {
    labels: Vec<usize>,
    next_label: usize,
}

impl RowSets {
    fn new(columns: usize) -> RowSets {
        RowSets {
            labels: vec![UNSET; columns],
            next_label: UNSET + 1,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    fn label(&self, column: usize) -> usize {
        self.labels[column]
    }

    #[inline]
    fn same_set(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    fn sets_created(&self) -> usize {
        self.next_label - 1
    }

    fn assign_fresh_sets(&mut self) {
        for label in self.labels.iter_mut().filter(|label| **label == UNSET) {
            *label = self.next_label;
            self.next_label += 1;
        }
    }

    /// Relabel every cell of `absorbed_column`'s set with `kept_column`'s label.
    fn merge(&mut self, kept_column: usize, absorbed_column: usize) {
        let kept = self.labels[kept_column];
        let absorbed = self.labels[absorbed_column];
        for label in self.labels.iter_mut().filter(|label| **label == absorbed) {
            *label = kept;
        }
    }

    fn set_sizes(&self) -> utils::FnvHashMap<usize, usize> {
        let mut sizes = utils::fnv_hashmap(self.labels.len());
        for label in &self.labels {
            *sizes.entry(*label).or_insert(0) += 1;
        }
        sizes
    }

    /// Cells walled off from below lose their set for the next row.
    fn carry_down(&mut self, maze: &Maze, x: usize) {
        for (y, label) in self.labels.iter_mut().enumerate() {
            if maze.has_bottom_wall(Point::new(x, y)) {
                *label = UNSET;
            }
        }
    }
}
