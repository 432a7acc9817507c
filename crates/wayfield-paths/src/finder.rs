//! The [`PathFinder`] front-end: runs A* over a [`Field`]'s markers.

use log::{debug, trace};

use wayfield_core::{Field, Point};

use crate::PathBuffer;
use crate::distance::manhattan;
use crate::traits::Pather;

/// Adapts a [`Field`] to the search: cardinal non-Border neighbors in fixed
/// up, right, down, left order, Manhattan estimate.
struct FieldPather<'a> {
    field: &'a Field,
}

impl Pather for FieldPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.field.walkable_neighbors(p));
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Computes shortest paths between a field's Start and End markers.
///
/// All per-search state lives in the finder's [`PathBuffer`], never in the
/// field's cells, so one finder can serve many searches over the same field
/// (and differently sized fields) without resets. Concurrent searches need
/// one finder each.
#[derive(Default)]
pub struct PathFinder {
    buffer: Option<PathBuffer>,
}

impl PathFinder {
    /// Create a new finder. The search arena is allocated lazily, sized to
    /// the first field searched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the shortest walkable path between the field's Start and End
    /// markers.
    ///
    /// Returns the interior waypoints strictly between the two markers,
    /// ordered from the cell adjacent to Start to the cell adjacent to End.
    /// Adjacent (or coincident) markers yield `Some` of an empty sequence —
    /// a success. Returns `None` when either marker is unset or no path
    /// exists; emptiness alone never signals failure.
    pub fn find_path(&mut self, field: &Field) -> Option<Vec<Point>> {
        let (Some(from), Some(to)) = (field.start(), field.end()) else {
            trace!("find_path: start or end marker unset");
            return None;
        };

        let buffer = self
            .buffer
            .get_or_insert_with(|| PathBuffer::new(field.bounds()));
        if buffer.range() != field.bounds() {
            buffer.set_range(field.bounds());
        }

        let pather = FieldPather { field };
        let mut path = buffer.astar_path(&pather, from, to)?;
        debug!(
            "find_path: {from} -> {to}, {} steps",
            path.len().saturating_sub(1)
        );

        // Strip the endpoints, leaving only the interior waypoints.
        path.pop();
        if !path.is_empty() {
            path.remove(0);
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use wayfield_core::Field;

    fn assert_chain(field: &Field, path: &[Point], from: Point, to: Point) {
        if path.is_empty() {
            assert_eq!(manhattan(from, to), 1);
            return;
        }
        assert_eq!(manhattan(from, path[0]), 1);
        assert_eq!(manhattan(*path.last().unwrap(), to), 1);
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
        for &p in path {
            assert!(field.is_walkable(p), "path crosses a wall at {p}");
        }
    }

    #[test]
    fn open_five_by_five() {
        let mut field = Field::new(5, 5);
        field.place_start(Point::new(1, 1));
        field.place_end(Point::new(3, 3));
        let mut finder = PathFinder::new();
        let path = finder.find_path(&field).unwrap();
        // Interior length = Manhattan distance - 1.
        assert_eq!(path.len(), 3);
        assert_chain(&field, &path, Point::new(1, 1), Point::new(3, 3));
    }

    #[test]
    fn clear_channel_length_is_manhattan_minus_one() {
        let mut field = Field::new(12, 5);
        field.place_start(Point::new(1, 2));
        field.place_end(Point::new(10, 2));
        let mut finder = PathFinder::new();
        let path = finder.find_path(&field).unwrap();
        let dist = manhattan(Point::new(1, 2), Point::new(10, 2));
        assert_eq!(path.len() as i32, dist - 1);
        assert_chain(&field, &path, Point::new(1, 2), Point::new(10, 2));
    }

    #[test]
    fn missing_markers_return_none() {
        let mut field = Field::new(5, 5);
        let mut finder = PathFinder::new();
        assert_eq!(finder.find_path(&field), None);
        field.place_start(Point::new(1, 1));
        assert_eq!(finder.find_path(&field), None);
        field.place_end(Point::new(3, 3));
        assert!(finder.find_path(&field).is_some());
    }

    #[test]
    fn adjacent_markers_succeed_with_empty_path() {
        let mut field = Field::new(5, 5);
        field.place_start(Point::new(1, 1));
        field.place_end(Point::new(2, 1));
        let mut finder = PathFinder::new();
        // Success, not failure: the Option is the success tag.
        assert_eq!(finder.find_path(&field), Some(vec![]));
    }

    #[test]
    fn blocked_column_forces_detour() {
        let mut field = Field::new(5, 5);
        field.place_start(Point::new(1, 1));
        field.place_end(Point::new(3, 3));
        // Wall off most of the middle column; a detour remains.
        field.place_border_range(2, 1, 2, 3);
        let mut finder = PathFinder::new();
        let path = finder.find_path(&field);
        // (2,1),(2,2),(2,3) all Border blocks every interior route in a
        // 3x3 interior: column x=2 is fully walled.
        assert_eq!(path, None);

        // Open one gap and the detour must be found and be longer than the
        // unobstructed minimum of 3 interior cells.
        let mut field = Field::new(6, 6);
        field.place_start(Point::new(1, 1));
        field.place_end(Point::new(3, 3));
        field.place_border_range(2, 1, 2, 3);
        let path = finder.find_path(&field).unwrap();
        assert!(path.len() > 3);
        assert_chain(&field, &path, Point::new(1, 1), Point::new(3, 3));
    }

    #[test]
    fn full_wall_returns_none() {
        let mut field = Field::new(9, 9);
        field.place_start(Point::new(1, 4));
        field.place_end(Point::new(7, 4));
        // Complete vertical wall spanning the interior.
        field.place_border_range(4, 1, 4, 7);
        let mut finder = PathFinder::new();
        assert_eq!(finder.find_path(&field), None);
    }

    #[test]
    fn enclosed_start_returns_none() {
        let mut field = Field::new(7, 7);
        field.place_start(Point::new(3, 3));
        field.place_end(Point::new(5, 5));
        field.place_border(Point::new(3, 2));
        field.place_border(Point::new(4, 3));
        field.place_border(Point::new(3, 4));
        field.place_border(Point::new(2, 3));
        let mut finder = PathFinder::new();
        assert_eq!(finder.find_path(&field), None);
    }

    #[test]
    fn one_finder_serves_many_fields() {
        let mut finder = PathFinder::new();

        let mut small = Field::new(5, 5);
        small.place_start(Point::new(1, 1));
        small.place_end(Point::new(3, 1));
        assert_eq!(finder.find_path(&small).unwrap().len(), 1);

        let mut big = Field::new(20, 20);
        big.place_start(Point::new(1, 1));
        big.place_end(Point::new(18, 18));
        let path = finder.find_path(&big).unwrap();
        assert_eq!(path.len() as i32, manhattan(Point::new(1, 1), Point::new(18, 18)) - 1);

        // Back to the small field: stale arena entries must not leak.
        assert_eq!(finder.find_path(&small).unwrap().len(), 1);
    }

    #[test]
    fn repeated_searches_after_obstacle_edits() {
        let mut field = Field::new(8, 8);
        field.place_start(Point::new(1, 1));
        field.place_end(Point::new(6, 1));
        let mut finder = PathFinder::new();
        let direct = finder.find_path(&field).unwrap();
        assert_eq!(direct.len(), 4);

        field.place_border_range(4, 1, 4, 5);
        let detour = finder.find_path(&field).unwrap();
        assert!(detour.len() > direct.len());
        assert_chain(&field, &detour, Point::new(1, 1), Point::new(6, 1));
    }

    #[test]
    fn walled_corridor_scenario() {
        // The original 20x20 demo layout: a C-shaped wall around the start
        // with an opening to the south.
        let mut field = Field::new(20, 20);
        field.place_start(Point::new(2, 10));
        field.place_end(Point::new(17, 10));
        field.place_border_range(10, 7, 10, 14);
        field.place_border_range(0, 7, 10, 7);
        field.place_border_range(2, 14, 10, 14);
        field.place_border_range(7, 14, 7, 17);
        field.place_border_range(10, 14, 17, 14);
        field.place_border_range(12, 12, 19, 12);
        let mut finder = PathFinder::new();
        let path = finder.find_path(&field).unwrap();
        assert_chain(&field, &path, Point::new(2, 10), Point::new(17, 10));
        // The wall forces a long detour well past the Manhattan minimum.
        let dist = manhattan(Point::new(2, 10), Point::new(17, 10));
        assert!(path.len() as i32 > dist - 1);
    }
}
