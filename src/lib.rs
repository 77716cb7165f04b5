//! **labyrinth** generates perfect mazes and cellular automaton caves on small rectangular
//! grids and finds shortest routes across either kind.

pub mod automata;
pub mod cave;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_traits;
pub mod grids;
pub mod maze;
pub mod pathing;
pub mod serialization;
pub mod settings;
pub mod units;
mod utils;
