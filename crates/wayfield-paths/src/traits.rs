use wayfield_core::Point;

/// Neighbour enumeration and heuristic for uniform-cost grid search.
///
/// Every step between adjacent cells costs 1, so the trait carries no cost
/// method.
pub trait Pather {
    /// Append the walkable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling. Order must be deterministic: it decides which
    /// of several equally short paths wins.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
