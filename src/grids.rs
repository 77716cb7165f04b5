use std::fmt;
use std::str::FromStr;

use crate::cave::Cave;
use crate::cells::{CompassPrimary, Point};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;
use crate::maze::Maze;
use crate::serialization;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum GridKind {
    Maze,
    Cave,
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridKind::Maze => write!(f, "maze"),
            GridKind::Cave => write!(f, "cave"),
        }
    }
}

/// Either kind of grid, for callers that only learn the kind at run time, e.g. when loading a
/// file.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Grid {
    Maze(Maze),
    Cave(Cave),
}

impl Grid {
    pub fn kind(&self) -> GridKind {
        match *self {
            Grid::Maze(_) => GridKind::Maze,
            Grid::Cave(_) => GridKind::Cave,
        }
    }

    pub fn as_maze(&self) -> Option<&Maze> {
        match *self {
            Grid::Maze(ref maze) => Some(maze),
            Grid::Cave(_) => None,
        }
    }

    pub fn as_cave(&self) -> Option<&Cave> {
        match *self {
            Grid::Cave(ref cave) => Some(cave),
            Grid::Maze(_) => None,
        }
    }
}

impl From<Maze> for Grid {
    fn from(maze: Maze) -> Grid {
        Grid::Maze(maze)
    }
}

impl From<Cave> for Grid {
    fn from(cave: Cave) -> Grid {
        Grid::Cave(cave)
    }
}

impl WalledGrid for Grid {
    fn dimensions(&self) -> GridDimensions {
        match *self {
            Grid::Maze(ref maze) => maze.dimensions(),
            Grid::Cave(ref cave) => cave.dimensions(),
        }
    }

    fn is_open_towards(&self, from: Point, direction: CompassPrimary) -> bool {
        match *self {
            Grid::Maze(ref maze) => maze.is_open_towards(from, direction),
            Grid::Cave(ref cave) => cave.is_open_towards(from, direction),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Grid::Maze(ref maze) => maze.validate(),
            Grid::Cave(ref cave) => cave.validate(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Grid::Maze(ref maze) => maze.fmt(f),
            Grid::Cave(ref cave) => cave.fmt(f),
        }
    }
}

/// The kind is decided by the token count: a header plus one matrix is a cave, a header plus
/// two matrices is a maze.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Grid> {
        let dimensions = serialization::parse_header(&mut text.split_whitespace())?;
        let matrix_tokens = serialization::token_count(text).saturating_sub(2);
        let size = dimensions.size();

        if matrix_tokens == size {
            text.parse().map(Grid::Cave)
        } else if matrix_tokens == 2 * size {
            text.parse().map(Grid::Maze)
        } else {
            Err(ErrorKind::ParseFailure(format!("{} bits do not make one or two {}x{} matrices",
                                                matrix_tokens,
                                                dimensions.rows().0,
                                                dimensions.columns().0))
                .into())
        }
    }
}
