//! Escape-route search for hex boards.
//!
//! The cat's problem is a shortest-path search from its cell to the nearest
//! cell outside the board interior. This crate provides:
//!
//! - **Uniform-cost escape search** ([`PathFinder::find_escape_path`]), the
//!   search the cat uses every turn
//! - **BFS escape distances** ([`escape_distance_map`], [`escape_distance`]),
//!   an independent breadth-first computation of the same distances
//!
//! Both operate on any [`BoardOracle`], a read-only view of the board.

mod bfs;
mod escape;
mod frontier;
mod traits;

pub use bfs::{escape_distance, escape_distance_map};
pub use escape::{EscapeSearch, PathFinder, find_escape_path};
pub use traits::BoardOracle;

#[cfg(test)]
mod testing;
