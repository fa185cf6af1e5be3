//! Boards described as text.
//!
//! A layout is the [`Display`](std::fmt::Display) form of a [`HexBoard`]:
//! one line per row, [`OPEN`], [`BLOCKED`] and [`CAT`] runes, and any
//! whitespace inside a line ignored, so the half-cell indentation of odd
//! rows is optional. The first line is the top row (`y = -half`).

use std::fmt;
use std::str::FromStr;

use hexcat_core::Point;

use crate::board::{BLOCKED, CAT, HexBoard, OPEN};

impl HexBoard {
    /// Parse a board from its text layout.
    ///
    /// The layout must be square with an odd side and contain exactly one
    /// cat. Leading and trailing blank lines are ignored.
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = s
            .trim()
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        if rows.len() != width {
            return Err(LayoutError::NotSquare {
                width,
                height: rows.len(),
            });
        }

        let side = width as i32;
        let mut board = HexBoard::new(side).map_err(|_| LayoutError::EvenSide(side))?;
        let half = board.half();
        let mut cat: Option<Point> = None;

        for (row, cells) in rows.iter().enumerate() {
            for (col, &ch) in cells.iter().enumerate() {
                let p = Point::new(col as i32 - half, row as i32 - half);
                match ch {
                    OPEN => {}
                    BLOCKED => {
                        // Cells are visited once each and the cat is placed
                        // afterwards, so blocking cannot fail here.
                        let _ = board.block(p);
                    }
                    CAT => {
                        if let Some(first) = cat {
                            return Err(LayoutError::MultipleCats(first, p));
                        }
                        cat = Some(p);
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos: p }),
                }
            }
        }

        let Some(cat) = cat else {
            return Err(LayoutError::MissingCat);
        };
        board
            .place_cat(cat)
            .map_err(|_| LayoutError::MissingCat)?;
        Ok(board)
    }
}

impl FromStr for HexBoard {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

/// Errors that can occur when parsing a board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row has a different number of cells than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The number of rows differs from the row length.
    NotSquare { width: usize, height: usize },
    /// The side is even (or zero), so the board has no center.
    EvenSide(i32),
    /// A character other than the board runes, at board coordinates.
    InvalidRune { ch: char, pos: Point },
    /// No cat in the layout.
    MissingCat,
    /// More than one cat; holds the first two positions found.
    MultipleCats(Point, Point),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has {found} cells, expected {expected}"
            ),
            Self::NotSquare { width, height } => {
                write!(f, "layout is {width} cells wide but {height} rows tall")
            }
            Self::EvenSide(side) => write!(f, "layout side must be odd, got {side}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingCat => write!(f, "layout has no cat ({CAT})"),
            Self::MultipleCats(a, b) => write!(f, "layout has more than one cat: {a} and {b}"),
        }
    }
}

impl std::error::Error for LayoutError {}
