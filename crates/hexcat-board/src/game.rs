//! Turn sequencing: the catcher blocks a cell, then the cat moves.

use std::fmt;

use hexcat_core::Point;
use hexcat_paths::PathFinder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{BoardError, HexBoard};
use crate::cat::Cat;
use crate::config::GameConfig;
use crate::scatter::Scatter;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// The cat is still on the board and can move.
    Ongoing,
    /// The cat reached the border (or stepped off it).
    CatEscaped,
    /// The cat has no legal move left.
    CatCaught,
}

impl GameStatus {
    /// Whether the game has been decided.
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::CatEscaped => "the cat escaped",
            GameStatus::CatCaught => "the cat was caught",
        })
    }
}

/// A game of catch-the-cat.
pub struct Game<R: Rng> {
    board: HexBoard,
    cat: Cat,
    rng: R,
    status: GameStatus,
    turn: u32,
}

impl Game<StdRng> {
    /// Start a game from `config`: a fresh board with scattered blocks and
    /// the cat in the center.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut board = HexBoard::new(config.side)?;
        let blocked = Scatter::new(&mut rng).block_random(&mut board, config.block_ratio);
        log::info!(
            "new game on a {side}x{side} board, {blocked} cells blocked",
            side = config.side
        );
        Ok(Self::with_board(board, config.finder(), rng))
    }
}

impl<R: Rng> Game<R> {
    /// Start a game on a prepared board.
    pub fn with_board(board: HexBoard, finder: PathFinder, rng: R) -> Self {
        let status = if board.has_escaped() || board.is_border(board.cat()) {
            GameStatus::CatEscaped
        } else {
            GameStatus::Ongoing
        };
        Self {
            board,
            cat: Cat::new(finder),
            rng,
            status,
            turn: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    /// The cat agent.
    pub fn cat(&self) -> &Cat {
        &self.cat
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of completed catcher turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Play one round: the catcher blocks `p`, then the cat answers.
    ///
    /// An illegal block leaves the game untouched.
    pub fn catcher_turn(&mut self, p: Point) -> Result<GameStatus, BoardError> {
        if self.status.is_over() {
            return Err(BoardError::GameOver);
        }
        self.board.block(p)?;
        self.turn += 1;
        log::debug!("turn {}: catcher blocks {p}", self.turn);

        match self.cat.next_move(&self.board, &mut self.rng) {
            None => {
                self.status = GameStatus::CatCaught;
                log::info!(
                    "turn {}: cat caught at {}",
                    self.turn,
                    self.board.cat()
                );
            }
            Some(to) => {
                self.board.move_cat(to)?;
                log::debug!("turn {}: cat moves to {to}", self.turn);
                if self.board.has_escaped() || self.board.is_border(to) {
                    self.status = GameStatus::CatEscaped;
                    log::info!("turn {}: cat escaped at {to}", self.turn);
                }
            }
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(layout: &str) -> Game<StdRng> {
        let board = HexBoard::from_layout(layout).unwrap();
        Game::with_board(board, PathFinder::new(), StdRng::seed_from_u64(11))
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let cfg = GameConfig {
            side: 11,
            block_ratio: 0.2,
            seed: Some(1234),
            expansion_limit: None,
        };
        let a = Game::new(&cfg).unwrap();
        let b = Game::new(&cfg).unwrap();
        assert_eq!(a.board(), b.board());
        assert_eq!(a.board().blocked_count(), 24);
        assert_eq!(a.status(), GameStatus::Ongoing);
        assert_eq!(a.turn(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = GameConfig {
            side: 8,
            ..GameConfig::default()
        };
        assert_eq!(Game::new(&cfg).err(), Some(BoardError::InvalidSide(8)));
    }

    #[test]
    fn cat_runs_to_the_border() {
        let mut g = game(
            "
. . . . .
 . . . . .
. . C . .
 . . . . .
. . . . .
",
        );
        // Blocking a far corner does not slow the cat: two steps out.
        assert_eq!(g.catcher_turn(Point::new(2, 2)).unwrap(), GameStatus::Ongoing);
        assert_eq!(g.board().cat(), Point::new(0, -1));
        assert_eq!(g.catcher_turn(Point::new(-2, 2)).unwrap(), GameStatus::CatEscaped);
        assert!(g.board().is_border(g.board().cat()));
        assert_eq!(g.turn(), 2);
        assert_eq!(g.catcher_turn(Point::new(-1, 2)), Err(BoardError::GameOver));
    }

    #[test]
    fn closing_the_last_gap_catches_the_cat() {
        let mut g = game(
            "
# # # # #
 # # # # #
# # C . #
 # # # # #
# # # # #
",
        );
        let status = g.catcher_turn(Point::new(1, 0)).unwrap();
        assert_eq!(status, GameStatus::CatCaught);
        assert!(g.cat().is_trapped());
        assert_eq!(g.board().cat(), Point::ZERO);
    }

    #[test]
    fn illegal_block_keeps_the_turn() {
        let mut g = game(
            "
. . . . .
 . . . . .
. . C . .
 . . . . .
. . . . .
",
        );
        assert_eq!(
            g.catcher_turn(Point::ZERO),
            Err(BoardError::Occupied(Point::ZERO))
        );
        assert_eq!(
            g.catcher_turn(Point::new(5, 0)),
            Err(BoardError::OutOfBounds(Point::new(5, 0)))
        );
        assert_eq!(g.turn(), 0);
        assert_eq!(g.board().cat(), Point::ZERO);
    }

    #[test]
    fn cat_starting_on_the_border_has_escaped() {
        let g = game("C . .\n . . .\n. . .");
        assert_eq!(g.status(), GameStatus::CatEscaped);
        assert!(g.status().is_over());
        assert_eq!(g.status().to_string(), "the cat escaped");
    }
}
