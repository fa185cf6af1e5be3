//! Random obstacle placement for new boards.

use hexcat_core::Point;
use rand::Rng;

use crate::board::HexBoard;

/// Blocks random cells of a board.
pub struct Scatter<R: Rng> {
    pub rng: R,
}

impl<R: Rng> Scatter<R> {
    /// Create a new scatterer drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Block `ratio` of all board cells (rounded down), choosing uniformly
    /// among open cells. The cat's cell is never blocked.
    ///
    /// Returns the number of cells blocked, which is smaller than requested
    /// only when the board runs out of open cells.
    pub fn block_random(&mut self, board: &mut HexBoard, ratio: f64) -> usize {
        let target = (board.bounds().len() as f64 * ratio.clamp(0.0, 1.0)) as usize;
        let mut open: Vec<Point> = board.open_cells().collect();
        let n = target.min(open.len());

        // Partial Fisher-Yates: the first `n` slots end up a uniform sample.
        let mut blocked = 0;
        for i in 0..n {
            let j = self.rng.random_range(i..open.len());
            open.swap(i, j);
            if board.block(open[i]).is_ok() {
                blocked += 1;
            }
        }

        log::debug!(
            "scattered {blocked} blocks over {} cells (ratio {ratio})",
            board.bounds().len()
        );
        blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn blocks_requested_fraction() {
        let mut board = HexBoard::new(11).unwrap();
        let mut sc = Scatter::new(StdRng::seed_from_u64(7));
        let n = sc.block_random(&mut board, 0.25);
        assert_eq!(n, 30); // 121 * 0.25, rounded down
        assert_eq!(board.blocked_count(), 30);
        assert!(!board.is_blocked(board.cat()));
    }

    #[test]
    fn same_seed_same_board() {
        let mut a = HexBoard::new(9).unwrap();
        let mut b = HexBoard::new(9).unwrap();
        Scatter::new(StdRng::seed_from_u64(42)).block_random(&mut a, 0.3);
        Scatter::new(StdRng::seed_from_u64(42)).block_random(&mut b, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn full_ratio_leaves_only_the_cat() {
        let mut board = HexBoard::new(5).unwrap();
        let n = Scatter::new(rand::rng()).block_random(&mut board, 1.0);
        assert_eq!(n, 24);
        assert_eq!(board.open_cells().count(), 0);
    }

    #[test]
    fn zero_ratio_blocks_nothing() {
        let mut board = HexBoard::new(5).unwrap();
        assert_eq!(Scatter::new(rand::rng()).block_random(&mut board, 0.0), 0);
        assert_eq!(board.blocked_count(), 0);
    }

    #[test]
    fn existing_blocks_are_kept() {
        let mut board = HexBoard::new(3).unwrap();
        board.block(Point::new(1, 0)).unwrap();
        let n = Scatter::new(StdRng::seed_from_u64(1)).block_random(&mut board, 1.0);
        assert_eq!(n, 7);
        assert!(board.is_blocked(Point::new(1, 0)));
        assert_eq!(board.blocked_count(), 8);
    }
}
