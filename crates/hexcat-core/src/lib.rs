//! **hexcat-core**: hex board geometry.
//!
//! This crate provides the coordinate types shared across the *hexcat*
//! workspace: cell coordinates, rectangular ranges, and the six hexagonal
//! [`Direction`]s with their offset-row neighbour arithmetic.

pub mod geom;
pub mod hex;

pub use geom::{Point, Range, RangeIter};
pub use hex::{Direction, hex_distance};
