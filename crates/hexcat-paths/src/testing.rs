//! A minimal in-memory board for unit tests.

use std::collections::HashSet;

use hexcat_core::{Point, Range};

use crate::BoardOracle;

pub(crate) struct TestBoard {
    pub(crate) bounds: Range,
    pub(crate) blocked: HashSet<Point>,
    pub(crate) agent: Point,
}

impl TestBoard {
    /// An open board with `|x| <= half` and `|y| <= half`, agent at the center.
    pub(crate) fn open(half: i32) -> Self {
        Self {
            bounds: Range::centered(half),
            blocked: HashSet::new(),
            agent: Point::ZERO,
        }
    }

    pub(crate) fn with_blocked(mut self, cells: &[Point]) -> Self {
        self.blocked.extend(cells.iter().copied());
        self
    }

    /// Block the full hex ring at `radius` steps from the agent.
    pub(crate) fn with_ring(mut self, radius: i32) -> Self {
        for p in self.bounds {
            if hexcat_core::hex_distance(self.agent, p) == radius {
                self.blocked.insert(p);
            }
        }
        self
    }
}

impl BoardOracle for TestBoard {
    fn is_interior(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn can_occupy(&self, p: Point) -> bool {
        self.bounds.contains(p) && p != self.agent && !self.blocked.contains(&p)
    }

    fn agent_position(&self) -> Point {
        self.agent
    }
}
