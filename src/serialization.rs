//! The text file layout shared by both grid kinds.
//!
//! ```text
//! <rows> <cols>
//! <rows lines of <cols> space separated 0/1 bits>
//! ```
//!
//! A maze has two matrices, right walls then bottom walls, separated by a blank line. A cave
//! has one matrix of blocked bits. When reading, any whitespace separates tokens, every bit
//! must be a lone `0` or `1` and nothing may follow the last matrix.

use itertools::Itertools;
use std::fmt;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::cave::Cave;
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount};

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dimensions = self.dimensions();
        write_header(f, dimensions)?;
        write_matrix(f, dimensions, self.right_walls())?;
        writeln!(f)?;
        write_matrix(f, dimensions, self.bottom_walls())
    }
}

impl fmt::Display for Cave {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dimensions = self.dimensions();
        write_header(f, dimensions)?;
        write_matrix(f, dimensions, self.cells())
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(text: &str) -> Result<Maze> {
        let mut tokens = text.split_whitespace();
        let dimensions = parse_header(&mut tokens)?;
        let right_walls = parse_matrix(&mut tokens, dimensions, "right wall")?;
        let bottom_walls = parse_matrix(&mut tokens, dimensions, "bottom wall")?;
        expect_end(&mut tokens)?;
        Maze::from_walls(dimensions, right_walls, bottom_walls)
    }
}

impl FromStr for Cave {
    type Err = Error;

    fn from_str(text: &str) -> Result<Cave> {
        let mut tokens = text.split_whitespace();
        let dimensions = parse_header(&mut tokens)?;
        let cells = parse_matrix(&mut tokens, dimensions, "cave")?;
        expect_end(&mut tokens)?;
        Cave::from_cells(dimensions, cells)
    }
}

/// Write a grid's text form to `file_path`, replacing any existing file.
pub fn save<T: fmt::Display, P: AsRef<Path>>(grid: &T, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    write_text_to_file(&grid.to_string(), file_path)
        .chain_err(|| format!("Failed to write grid to text file {}", file_path.display()))
}

/// Read and validate a grid from the text file at `file_path`.
pub fn load<T, P>(file_path: P) -> Result<T>
    where T: FromStr<Err = Error>,
          P: AsRef<Path>
{
    let file_path = file_path.as_ref();
    let text = fs::read_to_string(file_path)
        .chain_err(|| format!("Failed to read grid text file {}", file_path.display()))?;
    text.parse()
}

fn write_text_to_file(data: &str, file_path: &Path) -> Result<()> {
    let mut f = File::create(file_path)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn write_header(f: &mut fmt::Formatter, dimensions: GridDimensions) -> fmt::Result {
    writeln!(f, "{} {}", dimensions.rows().0, dimensions.columns().0)
}

fn write_matrix(f: &mut fmt::Formatter, dimensions: GridDimensions, bits: &[bool]) -> fmt::Result {
    for row in bits.chunks(dimensions.columns().0) {
        writeln!(f, "{}", row.iter().map(|&bit| if bit { '1' } else { '0' }).join(" "))?;
    }
    Ok(())
}

/// Count of whitespace separated tokens in the grid text, header included.
pub(crate) fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub(crate) fn parse_header(tokens: &mut SplitWhitespace) -> Result<GridDimensions> {
    let rows = parse_count(tokens, "row count")?;
    let cols = parse_count(tokens, "column count")?;
    GridDimensions::new(RowsCount(rows), ColumnsCount(cols))
}

fn parse_count(tokens: &mut SplitWhitespace, name: &str) -> Result<usize> {
    let token = tokens.next()
        .ok_or_else(|| ErrorKind::ParseFailure(format!("missing {}", name)))?;
    token.parse::<usize>()
        .chain_err(|| ErrorKind::ParseFailure(format!("{} {:?} is not a count", name, token)))
}

fn parse_matrix(tokens: &mut SplitWhitespace,
                dimensions: GridDimensions,
                name: &str)
                -> Result<Vec<bool>> {
    let size = dimensions.size();
    (0..size)
        .map(|i| match tokens.next() {
            Some("0") => Ok(false),
            Some("1") => Ok(true),
            Some(other) => {
                Err(ErrorKind::ParseFailure(format!("{:?} in the {} matrix is not 0 or 1",
                                                    other, name))
                    .into())
            }
            None => {
                Err(ErrorKind::ParseFailure(format!("the {} matrix ends after {} of {} bits",
                                                    name, i, size))
                    .into())
            }
        })
        .collect()
}

fn expect_end(tokens: &mut SplitWhitespace) -> Result<()> {
    match tokens.next() {
        Some(extra) => {
            Err(ErrorKind::ParseFailure(format!("unexpected {:?} after the last matrix", extra))
                .into())
        }
        None => Ok(()),
    }
}
