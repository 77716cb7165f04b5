use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A grid address and path waypoint.
///
/// `x` is the row index and `y` the column index, both zero based.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Point {
        Point { x, y }
    }

    /// The point one step away in `dir`, or None if that would leave the first quadrant.
    ///
    /// There is no upper bound check here, that needs the grid's dimensions.
    pub fn offset(self, dir: CompassPrimary) -> Option<Point> {
        let Point { x, y } = self;
        match dir {
            CompassPrimary::North => {
                if x > 0 {
                    Some(Point::new(x - 1, y))
                } else {
                    None
                }
            }
            CompassPrimary::South => Some(Point::new(x + 1, y)),
            CompassPrimary::East => Some(Point::new(x, y + 1)),
            CompassPrimary::West => {
                if y > 0 {
                    Some(Point::new(x, y - 1))
                } else {
                    None
                }
            }
        }
    }
}

impl From<(usize, usize)> for Point {
    fn from(x_y_pair: (usize, usize)) -> Point {
        Point::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Orthogonal step directions. North is towards row 0, West towards column 0.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let p = Point::new(1, 1);
        assert_eq!(p.offset(CompassPrimary::North), Some(Point::new(0, 1)));
        assert_eq!(p.offset(CompassPrimary::South), Some(Point::new(2, 1)));
        assert_eq!(p.offset(CompassPrimary::East), Some(Point::new(1, 2)));
        assert_eq!(p.offset(CompassPrimary::West), Some(Point::new(1, 0)));
    }

    #[test]
    fn offsets_below_zero_are_unrepresentable() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), None);
        assert_eq!(origin.offset(CompassPrimary::West), None);
    }

    #[test]
    fn opposite_round_trips() {
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_ne!(dir.opposite(), *dir);
        }
    }

    #[test]
    fn point_equality_is_by_value() {
        assert_eq!(Point::new(3, 4), Point::from((3, 4)));
        assert_ne!(Point::new(3, 4), Point::new(4, 3));
    }
}
