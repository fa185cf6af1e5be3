use hexcat_core::{Direction, Point};

/// Read-only view of a board, as queried by the escape searches.
///
/// Implementations must answer consistently for the duration of a search;
/// the searches never mutate the board.
pub trait BoardOracle {
    /// Whether `p` lies inside the playable interior. Stepping onto a cell
    /// for which this is `false` counts as an escape.
    fn is_interior(&self, p: Point) -> bool;

    /// Whether the agent may currently move onto `p`.
    fn can_occupy(&self, p: Point) -> bool;

    /// The agent's current cell.
    fn agent_position(&self) -> Point;

    /// The cell adjacent to `p` in direction `dir`. Results may lie outside
    /// the board.
    #[inline]
    fn neighbor(&self, p: Point, dir: Direction) -> Point {
        p.neighbor(dir)
    }
}

impl<T: BoardOracle + ?Sized> BoardOracle for &T {
    #[inline]
    fn is_interior(&self, p: Point) -> bool {
        (**self).is_interior(p)
    }

    #[inline]
    fn can_occupy(&self, p: Point) -> bool {
        (**self).can_occupy(p)
    }

    #[inline]
    fn agent_position(&self) -> Point {
        (**self).agent_position()
    }

    #[inline]
    fn neighbor(&self, p: Point, dir: Direction) -> Point {
        (**self).neighbor(p, dir)
    }
}
