//! The hex board the cat plays on.
//!
//! A [`HexBoard`] is a square of odd side centered on the origin. Each cell
//! is either open or blocked, and exactly one cell holds the cat. The board
//! implements [`BoardOracle`] so the escape search can run on it directly.

use std::fmt;

use hexcat_core::{Point, Range, RangeIter};
use hexcat_paths::BoardOracle;

/// Text rune for an open cell.
pub const OPEN: char = '.';
/// Text rune for a blocked cell.
pub const BLOCKED: char = '#';
/// Text rune for the cat's cell.
pub const CAT: char = 'C';

/// A square hex board with permanently blocked cells and a cat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    bounds: Range,
    blocked: Vec<bool>,
    cat: Point,
}

impl HexBoard {
    /// Create an open board of the given side with the cat at the center.
    ///
    /// The side must be odd and positive so the board has a center cell.
    pub fn new(side: i32) -> Result<Self, BoardError> {
        if side < 1 || side % 2 == 0 {
            return Err(BoardError::InvalidSide(side));
        }
        let bounds = Range::centered(side / 2);
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
            cat: Point::ZERO,
        })
    }

    /// Number of cells along each edge.
    #[inline]
    pub fn side(&self) -> i32 {
        self.bounds.width()
    }

    /// Largest absolute coordinate on the board.
    #[inline]
    pub fn half(&self) -> i32 {
        self.side() / 2
    }

    /// The range of board cells.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is a cell of this board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is a board cell on the outer ring. A cat standing here
    /// is one step from freedom.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.bounds.on_edge(p)
    }

    /// Whether `p` is a blocked board cell. Cells off the board are never
    /// blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.bounds.index_of(p).is_some_and(|i| self.blocked[i])
    }

    /// The cat's current cell. Lies off the board once the cat has escaped.
    #[inline]
    pub fn cat(&self) -> Point {
        self.cat
    }

    /// Whether the cat has stepped off the board.
    #[inline]
    pub fn has_escaped(&self) -> bool {
        !self.contains(self.cat)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Row-major iterator over all board cells.
    #[inline]
    pub fn cells(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Cells that are neither blocked nor occupied by the cat.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells()
            .filter(move |&p| p != self.cat && !self.is_blocked(p))
    }

    /// Permanently block `p`.
    pub fn block(&mut self, p: Point) -> Result<(), BoardError> {
        let Some(i) = self.bounds.index_of(p) else {
            return Err(BoardError::OutOfBounds(p));
        };
        if p == self.cat {
            return Err(BoardError::Occupied(p));
        }
        if self.blocked[i] {
            return Err(BoardError::AlreadyBlocked(p));
        }
        self.blocked[i] = true;
        Ok(())
    }

    /// Reopen `p`. Returns whether it was blocked.
    pub fn unblock(&mut self, p: Point) -> bool {
        match self.bounds.index_of(p) {
            Some(i) => std::mem::replace(&mut self.blocked[i], false),
            None => false,
        }
    }

    /// Reopen every cell and put the cat back in the center.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
        self.cat = Point::ZERO;
    }

    /// Put the cat on any open board cell, ignoring adjacency.
    pub fn place_cat(&mut self, p: Point) -> Result<(), BoardError> {
        if !self.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        if self.is_blocked(p) {
            return Err(BoardError::Blocked(p));
        }
        self.cat = p;
        Ok(())
    }

    /// Move the cat one hex step to `to`.
    ///
    /// Stepping off the board is allowed and means the cat escaped; after
    /// that the cat cannot move again.
    pub fn move_cat(&mut self, to: Point) -> Result<(), BoardError> {
        if self.has_escaped() {
            return Err(BoardError::GameOver);
        }
        if !self.cat.is_adjacent(to) {
            return Err(BoardError::NotAdjacent { from: self.cat, to });
        }
        if self.is_blocked(to) {
            return Err(BoardError::Blocked(to));
        }
        self.cat = to;
        Ok(())
    }
}

impl BoardOracle for HexBoard {
    #[inline]
    fn is_interior(&self, p: Point) -> bool {
        self.contains(p)
    }

    #[inline]
    fn can_occupy(&self, p: Point) -> bool {
        self.contains(p) && p != self.cat && !self.is_blocked(p)
    }

    #[inline]
    fn agent_position(&self) -> Point {
        self.cat
    }
}

impl fmt::Display for HexBoard {
    /// One text row per board row; odd rows are indented half a cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.bounds;
        for y in r.min.y..r.max.y {
            if y & 1 != 0 {
                f.write_str(" ")?;
            }
            for x in r.min.x..r.max.x {
                let p = Point::new(x, y);
                let ch = if p == self.cat {
                    CAT
                } else if self.is_blocked(p) {
                    BLOCKED
                } else {
                    OPEN
                };
                if x > r.min.x {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors from board construction, edits and moves.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The side is not a positive odd number.
    InvalidSide(i32),
    /// A block ratio outside `0.0..=1.0`.
    InvalidRatio(f64),
    /// The cell is not on the board.
    OutOfBounds(Point),
    /// The cat sits on the cell.
    Occupied(Point),
    /// The cell is blocked already.
    AlreadyBlocked(Point),
    /// The move target is not a hex neighbour of the cat.
    NotAdjacent { from: Point, to: Point },
    /// The move target is blocked.
    Blocked(Point),
    /// The game has already been decided.
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide(side) => write!(f, "board side must be odd and positive, got {side}"),
            Self::InvalidRatio(ratio) => {
                write!(f, "block ratio must be between 0 and 1, got {ratio}")
            }
            Self::OutOfBounds(p) => write!(f, "cell {p} is not on the board"),
            Self::Occupied(p) => write!(f, "cell {p} is occupied by the cat"),
            Self::AlreadyBlocked(p) => write!(f, "cell {p} is already blocked"),
            Self::NotAdjacent { from, to } => write!(f, "cell {to} is not adjacent to {from}"),
            Self::Blocked(p) => write!(f, "cell {p} is blocked"),
            Self::GameOver => f.write_str("the game is over"),
        }
    }
}

impl std::error::Error for BoardError {}
