// Other modules in this crate `use crate::errors::*;` to get access to everything
// `error_chain!` creates: Error, ErrorKind, ResultExt and Result.
//
// Every fallible operation in the library reports through these types, nothing panics
// across the public api.
use error_chain::error_chain;

use crate::cells::Point;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        ParseInt(::std::num::ParseIntError);
    }

    errors {
        InvalidDimensions(rows: usize, cols: usize) {
            description("grid dimensions out of range")
            display("grid dimensions {}x{} are outside the range {}..={}",
                    rows, cols,
                    crate::grid_dimensions::MIN_SIDE_LENGTH,
                    crate::grid_dimensions::MAX_SIDE_LENGTH)
        }

        MalformedGrid(reason: String) {
            description("malformed grid")
            display("malformed grid: {}", reason)
        }

        OutOfBounds(point: Point, rows: usize, cols: usize) {
            description("point outside the grid")
            display("point ({}, {}) is outside a {}x{} grid", point.x, point.y, rows, cols)
        }

        Unreachable(from: Point, to: Point) {
            description("no route between the points")
            display("({}, {}) cannot be reached from ({}, {})", to.x, to.y, from.x, from.y)
        }

        InconsistentState(point: Point, distance: u32) {
            description("path reconstruction found no predecessor")
            display("no predecessor of ({}, {}) at distance {}", point.x, point.y, distance)
        }

        ParseFailure(reason: String) {
            description("invalid grid text")
            display("invalid grid text: {}", reason)
        }
    }
}
