//! Catch-the-cat game rules on top of the hexcat escape search.
//!
//! A [`HexBoard`] holds the blocked cells and the cat, [`Scatter`] seeds it
//! with random obstacles, and [`Game`] alternates catcher blocks with
//! [`Cat`] moves until the cat escapes or is caught.

pub mod board;
pub mod cat;
pub mod config;
pub mod game;
pub mod layout;
pub mod scatter;

pub use board::{BoardError, HexBoard};
pub use cat::Cat;
pub use config::GameConfig;
pub use game::{Game, GameStatus};
pub use layout::LayoutError;
pub use scatter::Scatter;
