//! The cat: follows its shortest escape route, and wanders once cornered.

use hexcat_core::{Direction, Point};
use hexcat_paths::{BoardOracle, PathFinder};
use rand::Rng;

/// The escaping agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat {
    finder: PathFinder,
    trapped: bool,
}

impl Cat {
    /// A cat that plans with `finder`.
    pub fn new(finder: PathFinder) -> Self {
        Self {
            finder,
            trapped: false,
        }
    }

    /// The path finder this cat plans with.
    pub fn finder(&self) -> PathFinder {
        self.finder
    }

    /// Whether the cat has found itself without any escape route.
    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    /// Forget about being trapped, for a new game.
    pub fn reset(&mut self) {
        self.trapped = false;
    }

    /// Choose the cat's next cell.
    ///
    /// This is the first step of the shortest escape route. Without a route
    /// the cat picks a random cell it can occupy next to it, and returns
    /// `None` when it cannot move at all.
    pub fn next_move<B, R>(&mut self, board: &B, rng: &mut R) -> Option<Point>
    where
        B: BoardOracle,
        R: Rng,
    {
        let at = board.agent_position();
        let search = self.finder.search(at, board);
        if let Some(step) = search.first_step() {
            return Some(step);
        }

        // A truncated search says nothing about the board, only about this
        // turn's budget.
        if !search.truncated && !self.trapped {
            log::info!("cat at {at} has no escape route");
            self.trapped = true;
        }

        let options: Vec<Point> = Direction::ALL
            .into_iter()
            .map(|d| board.neighbor(at, d))
            .filter(|&p| board.is_interior(p) && board.can_occupy(p))
            .collect();
        if options.is_empty() {
            return None;
        }
        Some(options[rng.random_range(0..options.len())])
    }
}
