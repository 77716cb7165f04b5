//! Generation settings for both grid kinds.
//!
//! Settings are plain serde structs so a host application can embed them in its own
//! configuration; missing fields take the defaults below.

use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, RowsCount};

pub const DEFAULT_SIDE_LENGTH: usize = 20;
pub const DEFAULT_LIVE_CHANCE: u8 = 45;
pub const MAX_LIVE_CHANCE: u8 = 100;
/// Upper clamp for born/death limits, one below the Moore neighbourhood size.
pub const MAX_NEIGHBOUR_LIMIT: u8 = 7;
pub const DEFAULT_NEIGHBOUR_LIMIT: u8 = 3;
pub const DEFAULT_GENERATIONS: usize = 40;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct MazeSettings {
    #[serde(default = "default_side_length")]
    pub rows: usize,
    #[serde(default = "default_side_length")]
    pub cols: usize,
}

impl MazeSettings {
    pub fn new(rows: usize, cols: usize) -> MazeSettings {
        MazeSettings { rows, cols }
    }

    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(RowsCount(self.rows), ColumnsCount(self.cols))
    }
}

impl Default for MazeSettings {
    fn default() -> MazeSettings {
        MazeSettings::new(DEFAULT_SIDE_LENGTH, DEFAULT_SIDE_LENGTH)
    }
}

/// The cave automaton's rule: an alive (blocked) cell with fewer than `death_limit` alive
/// neighbours dies, a dead (open) cell with more than `born_limit` alive neighbours is born.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionRule {
    born_limit: u8,
    death_limit: u8,
}

impl EvolutionRule {
    /// Limits above `MAX_NEIGHBOUR_LIMIT` are clamped down to it.
    pub fn new(born_limit: u8, death_limit: u8) -> EvolutionRule {
        EvolutionRule {
            born_limit: born_limit.min(MAX_NEIGHBOUR_LIMIT),
            death_limit: death_limit.min(MAX_NEIGHBOUR_LIMIT),
        }
    }

    #[inline]
    pub fn born_limit(&self) -> u8 {
        self.born_limit
    }

    #[inline]
    pub fn death_limit(&self) -> u8 {
        self.death_limit
    }

    /// Next state of a cell given its current state and its alive neighbour count.
    #[inline]
    pub fn next_state(&self, alive: bool, alive_neighbours: usize) -> bool {
        if alive {
            alive_neighbours >= self.death_limit as usize
        } else {
            alive_neighbours > self.born_limit as usize
        }
    }
}

impl Default for EvolutionRule {
    fn default() -> EvolutionRule {
        EvolutionRule::new(DEFAULT_NEIGHBOUR_LIMIT, DEFAULT_NEIGHBOUR_LIMIT)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct CaveSettings {
    #[serde(default = "default_side_length")]
    pub rows: usize,
    #[serde(default = "default_side_length")]
    pub cols: usize,

    /// Percentage chance, 0 to 100, that a cell starts out blocked.
    #[serde(default = "default_live_chance")]
    live_chance: u8,

    #[serde(default)]
    rule: EvolutionRule,

    /// Number of automaton generations run after seeding.
    #[serde(default = "default_generations")]
    pub generations: usize,
}

impl CaveSettings {
    pub fn new(rows: usize, cols: usize, live_chance: u8) -> CaveSettings {
        CaveSettings {
            rows,
            cols,
            live_chance: live_chance.min(MAX_LIVE_CHANCE),
            rule: EvolutionRule::default(),
            generations: DEFAULT_GENERATIONS,
        }
    }

    pub fn with_limits(self, born_limit: u8, death_limit: u8) -> CaveSettings {
        CaveSettings { rule: EvolutionRule::new(born_limit, death_limit), ..self }
    }

    pub fn with_generations(self, generations: usize) -> CaveSettings {
        CaveSettings { generations, ..self }
    }

    /// The chance is clamped to `MAX_LIVE_CHANCE` here as deserialized settings bypass `new`.
    #[inline]
    pub fn live_chance(&self) -> u8 {
        self.live_chance.min(MAX_LIVE_CHANCE)
    }

    /// The rule, re-clamped for the same reason as `live_chance`.
    #[inline]
    pub fn rule(&self) -> EvolutionRule {
        EvolutionRule::new(self.rule.born_limit, self.rule.death_limit)
    }

    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(RowsCount(self.rows), ColumnsCount(self.cols))
    }
}

impl Default for CaveSettings {
    fn default() -> CaveSettings {
        CaveSettings::new(DEFAULT_SIDE_LENGTH, DEFAULT_SIDE_LENGTH, DEFAULT_LIVE_CHANCE)
    }
}

fn default_side_length() -> usize {
    DEFAULT_SIDE_LENGTH
}
fn default_live_chance() -> u8 {
    DEFAULT_LIVE_CHANCE
}
fn default_generations() -> usize {
    DEFAULT_GENERATIONS
}
