use std::collections::HashMap;

use hexcat_core::{Direction, Point};

use crate::frontier::{Entry, Frontier};
use crate::traits::BoardOracle;

/// Outcome of one escape search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeSearch {
    /// Cells from the start (exclusive) to the escape cell (inclusive).
    /// Empty when no escape was found.
    pub path: Vec<Point>,
    /// Number of cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Whether the expansion limit stopped the search early.
    pub truncated: bool,
}

impl EscapeSearch {
    /// Whether an escape route was found.
    #[inline]
    pub fn escaped(&self) -> bool {
        !self.path.is_empty()
    }

    /// The first move along the route, if any.
    #[inline]
    pub fn first_step(&self) -> Option<Point> {
        self.path.first().copied()
    }
}

/// Uniform-cost search for the shortest route off the board.
///
/// A `PathFinder` only carries configuration. Every search allocates its own
/// cost map, predecessor map and frontier, so one finder can be shared freely
/// between boards and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFinder {
    expansion_limit: Option<usize>,
}

impl PathFinder {
    /// A finder that searches until the frontier is exhausted.
    pub const fn new() -> Self {
        Self {
            expansion_limit: None,
        }
    }

    /// A finder that gives up after expanding `limit` cells and reports no
    /// path for that search.
    pub const fn with_expansion_limit(limit: usize) -> Self {
        Self {
            expansion_limit: Some(limit),
        }
    }

    /// The configured expansion limit, if any.
    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    /// Shortest route from `start` to the first cell outside the interior.
    ///
    /// Returns the cells from `start` (exclusive) to the escape cell
    /// (inclusive), or an empty path when no escape is reachable.
    pub fn find_escape_path<B: BoardOracle>(&self, start: Point, board: &B) -> Vec<Point> {
        self.search(start, board).path
    }

    /// Run the escape search and report how it went.
    ///
    /// Directions are scanned in [`Direction::ALL`] order and the frontier
    /// pops equal costs in insertion order, so the route returned among
    /// several of equal length is fully determined by the board.
    pub fn search<B: BoardOracle>(&self, start: Point, board: &B) -> EscapeSearch {
        let mut costs: HashMap<Point, u32> = HashMap::new();
        let mut parents: HashMap<Point, Point> = HashMap::new();
        let mut frontier = Frontier::new();

        costs.insert(start, 0);
        frontier.push(0, start);

        let mut expanded = 0usize;

        while let Some(Entry { cost, pos: current, .. }) = frontier.pop() {
            // Skip stale entries: the cost map holds the best known cost.
            if costs.get(&current).is_some_and(|&best| cost > best) {
                log::trace!("skipping stale frontier entry {current} at cost {cost}");
                continue;
            }

            if let Some(limit) = self.expansion_limit {
                if expanded >= limit {
                    log::debug!(
                        "escape search from {start} stopped after {expanded} expansions \
                         ({} entries left)",
                        frontier.len()
                    );
                    return EscapeSearch {
                        path: Vec::new(),
                        expanded,
                        truncated: true,
                    };
                }
            }
            expanded += 1;

            for dir in Direction::ALL {
                let next = board.neighbor(current, dir);

                if !board.is_interior(next) {
                    let path = reconstruct(&parents, start, current, next);
                    log::debug!(
                        "escape search from {start}: {} steps via {dir} of {current}, \
                         {expanded} cells expanded",
                        path.len()
                    );
                    return EscapeSearch {
                        path,
                        expanded,
                        truncated: false,
                    };
                }

                let tentative = cost + 1;
                let improves = match costs.get(&next) {
                    None => true,
                    Some(&known) => tentative < known,
                };
                if improves && board.can_occupy(next) {
                    costs.insert(next, tentative);
                    parents.insert(next, current);
                    frontier.push(tentative, next);
                }
            }
        }

        log::debug!("escape search from {start}: no escape, {expanded} cells expanded");
        EscapeSearch {
            path: Vec::new(),
            expanded,
            truncated: false,
        }
    }
}

/// Shortest escape route for the board's agent, with no expansion limit.
pub fn find_escape_path<B: BoardOracle>(board: &B) -> Vec<Point> {
    PathFinder::new().find_escape_path(board.agent_position(), board)
}

/// Walk the predecessor chain from `current` back to `start` and return the
/// route in traversal order, ending with `escape`.
fn reconstruct(
    parents: &HashMap<Point, Point>,
    start: Point,
    current: Point,
    escape: Point,
) -> Vec<Point> {
    let mut path = vec![escape];
    let mut p = current;
    while p != start {
        path.push(p);
        let Some(&parent) = parents.get(&p) else {
            break;
        };
        p = parent;
    }
    path.reverse();
    path
}
