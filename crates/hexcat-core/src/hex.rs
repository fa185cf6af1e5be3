//! Hexagonal adjacency on offset coordinates.
//!
//! Rows are "pointy-top" hexes with odd rows shifted half a cell right, so
//! the diagonal neighbours of a cell depend on the parity of its row.

use std::fmt;
use std::ops::Neg;

use crate::geom::Point;

/// One of the six hexagonal move directions.
///
/// The declaration order is the enumeration order used by every search in
/// the workspace and therefore decides tie-breaks between equal routes.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NE = 0,
    NW = 1,
    W = 2,
    SW = 3,
    SE = 4,
    E = 5,
}

impl Direction {
    /// All directions in enumeration order: NE, NW, W, SW, SE, E.
    pub const ALL: [Direction; 6] = [
        Direction::NE,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::SE,
        Direction::E,
    ];

    /// The direction pointing back the way this one came.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::W => Direction::E,
            Direction::SW => Direction::NE,
            Direction::SE => Direction::NW,
            Direction::E => Direction::W,
        }
    }

    /// The cell adjacent to `p` in this direction. No bounds checking.
    #[inline]
    pub const fn step(self, p: Point) -> Point {
        let odd = p.is_odd_row();
        match self {
            Direction::NE => {
                if odd {
                    p.shift(1, -1)
                } else {
                    p.shift(0, -1)
                }
            }
            Direction::NW => {
                if odd {
                    p.shift(0, -1)
                } else {
                    p.shift(-1, -1)
                }
            }
            Direction::W => p.shift(-1, 0),
            Direction::SW => {
                if odd {
                    p.shift(0, 1)
                } else {
                    p.shift(-1, 1)
                }
            }
            Direction::SE => {
                if odd {
                    p.shift(1, 1)
                } else {
                    p.shift(0, 1)
                }
            }
            Direction::E => p.shift(1, 0),
        }
    }

    /// Short compass name.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::NE => "NE",
            Direction::NW => "NW",
            Direction::W => "W",
            Direction::SW => "SW",
            Direction::SE => "SE",
            Direction::E => "E",
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Point {
    /// The adjacent cell in direction `dir`.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Point {
        dir.step(self)
    }

    /// The six hexagonal neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn hex_neighbors(self) -> [Point; 6] {
        Direction::ALL.map(|d| d.step(self))
    }

    /// The direction leading from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.step(self) == other)
    }

    /// Whether `other` is one hex step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.direction_to(other).is_some()
    }

    /// Axial `(q, r)` coordinates of this cell.
    #[inline]
    pub const fn axial(self) -> (i32, i32) {
        // y - (y & 1) is even, so the division floors for negative rows too.
        (self.x - (self.y - (self.y & 1)) / 2, self.y)
    }
}

/// Number of hex steps between two cells on an unobstructed board.
#[inline]
pub fn hex_distance(a: Point, b: Point) -> i32 {
    let (aq, ar) = a.axial();
    let (bq, br) = b.axial();
    let dq = aq - bq;
    let dr = ar - br;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}
