use std::collections::{HashMap, VecDeque};

use hexcat_core::{Direction, Point};

use crate::traits::BoardOracle;

/// Breadth-first move counts from `start` to every occupiable interior cell
/// it can reach.
///
/// `start` itself is always present with distance 0. The map is sparse:
/// unreachable cells are simply absent.
pub fn escape_distance_map<B: BoardOracle>(board: &B, start: Point) -> HashMap<Point, u32> {
    let mut dist: HashMap<Point, u32> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();

    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;
        for dir in Direction::ALL {
            let np = board.neighbor(cp, dir);
            if !board.is_interior(np) || !board.can_occupy(np) || dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}

/// Number of moves on the shortest route from `start` off the board, or
/// `None` if the agent is enclosed.
///
/// Computed by plain breadth-first search, independently of
/// [`PathFinder`](crate::PathFinder).
pub fn escape_distance<B: BoardOracle>(board: &B, start: Point) -> Option<u32> {
    escape_distance_map(board, start)
        .into_iter()
        .filter(|&(p, _)| {
            Direction::ALL
                .into_iter()
                .any(|d| !board.is_interior(board.neighbor(p, d)))
        })
        .map(|(_, d)| d + 1)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestBoard;
    use hexcat_core::hex_distance;

    #[test]
    fn open_board_distances_match_hex_distance() {
        let board = TestBoard::open(3);
        let dist = escape_distance_map(&board, Point::ZERO);
        assert_eq!(dist.len(), board.bounds.len());
        for (p, d) in dist {
            assert_eq!(d as i32, hex_distance(Point::ZERO, p), "{p}");
        }
    }

    #[test]
    fn blocked_cells_are_absent() {
        let wall = Point::new(1, 0);
        let board = TestBoard::open(2).with_blocked(&[wall]);
        let dist = escape_distance_map(&board, Point::ZERO);
        assert!(!dist.contains_key(&wall));
        assert_eq!(dist[&Point::new(2, 0)], 3);
    }

    #[test]
    fn escape_distance_on_open_boards() {
        assert_eq!(escape_distance(&TestBoard::open(0), Point::ZERO), Some(1));
        assert_eq!(escape_distance(&TestBoard::open(4), Point::ZERO), Some(5));
        assert_eq!(escape_distance(&TestBoard::open(4), Point::new(4, 0)), Some(1));
    }

    #[test]
    fn enclosed_start_has_no_distance() {
        let board = TestBoard::open(3).with_ring(2);
        let dist = escape_distance_map(&board, Point::ZERO);
        assert_eq!(dist.len(), 7);
        assert_eq!(escape_distance(&board, Point::ZERO), None);
    }
}
