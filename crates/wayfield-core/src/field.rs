//! The [`Field`] type — a bordered 2D grid of [`Cell`]s with guarded
//! placement rules.
//!
//! A `Field` owns its cells in a flat row-major buffer. The outer ring is
//! painted [`CellState::Border`] at construction and can never be
//! overwritten: every placement goes through [`Field::place_if_not_border`],
//! which refuses Border targets.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::geom::{Point, Range};

/// A fixed-size grid of cells with a Border outer ring and at most one
/// Start and one End marker.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Field {
    /// Create a new field of the given dimensions.
    ///
    /// Both dimensions are clamped to at least 3 so an interior exists
    /// inside the Border ring.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(3), height.max(3));
        let mut cells = Vec::with_capacity(bounds.len());
        for p in bounds.iter() {
            let on_ring = p.x == bounds.min.x
                || p.x == bounds.max.x - 1
                || p.y == bounds.min.y
                || p.y == bounds.max.y - 1;
            cells.push(Cell::new(if on_ring {
                CellState::Border
            } else {
                CellState::Empty
            }));
        }
        Self {
            cells,
            bounds,
            start: None,
            end: None,
        }
    }

    /// The bounding range of the field.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the field.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the field.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the field's full bounds (ring included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is strictly inside the Border ring.
    #[inline]
    pub fn is_interior(&self, p: Point) -> bool {
        p.x > self.bounds.min.x
            && p.x < self.bounds.max.x - 1
            && p.y > self.bounds.min.y
            && p.y < self.bounds.max.y - 1
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The state of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.at(p).map(|c| c.state())
    }

    /// Whether `p` can be stepped on: in bounds and not Border.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        matches!(self.state(p), Some(s) if s != CellState::Border)
    }

    /// The up-to-4 orthogonally adjacent walkable cells of `p`, in fixed
    /// up, right, down, left order.
    ///
    /// The order is deterministic on purpose: searches expand neighbours in
    /// this order, which decides which of several equally short paths wins.
    pub fn walkable_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_walkable(n))
    }

    /// Position of the Start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the End marker, if placed.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Overwrite the state at `p` unless the target is out of bounds or
    /// currently Border. Returns whether a change was made.
    ///
    /// The prior state is saved in the cell's history slot, so a later
    /// [`Cell::revert`] restores it.
    pub fn place_if_not_border(&mut self, p: Point, state: CellState) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        if self.cells[i].state() == CellState::Border {
            return false;
        }
        self.cells[i].change_state(state);
        true
    }

    /// Place the Start marker at `p`.
    ///
    /// Fails on out-of-bounds or Border targets. On success any previous
    /// Start cell is reverted to its pre-Start state, so at most one Start
    /// exists at a time.
    pub fn place_start(&mut self, p: Point) -> bool {
        if !self.place_if_not_border(p, CellState::Start) {
            return false;
        }
        let prev = self.start.take();
        self.revert_marker(prev);
        self.start = Some(p);
        true
    }

    /// Place the End marker at `p`. Same rules as [`Field::place_start`].
    pub fn place_end(&mut self, p: Point) -> bool {
        if !self.place_if_not_border(p, CellState::End) {
            return false;
        }
        let prev = self.end.take();
        self.revert_marker(prev);
        self.end = Some(p);
        true
    }

    /// Paint a Border obstacle at `p`.
    ///
    /// Fails on out-of-bounds or existing Border targets, and also refuses
    /// to overwrite a placed Start or End marker.
    pub fn place_border(&mut self, p: Point) -> bool {
        if self.start == Some(p) || self.end == Some(p) {
            return false;
        }
        self.place_if_not_border(p, CellState::Border)
    }

    /// Paint Border over the inclusive rectangle (x1, y1)..=(x2, y2).
    ///
    /// Coordinates are not normalized: the loops only run forward, so a
    /// reversed rectangle is an empty no-op.
    pub fn place_border_range(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.place_border(Point::new(x, y));
            }
        }
    }

    /// Paint the Path state over the given cells, skipping any that are
    /// Border or hold a marker.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if self.start == Some(p) || self.end == Some(p) {
                continue;
            }
            self.place_if_not_border(p, CellState::Path);
        }
    }

    // Undo the old marker cell when a Start/End is moved.
    fn revert_marker(&mut self, old: Option<Point>) {
        if let Some(i) = old.and_then(|p| self.index(p)) {
            self.cells[i].revert();
        }
    }
}

impl fmt::Display for Field {
    /// Render each row as one glyph per cell, rows separated by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.bounds.min.y..self.bounds.max.y {
            if y > self.bounds.min.y {
                writeln!(f)?;
            }
            for x in self.bounds.min.x..self.bounds.max.x {
                write!(f, "{}", self.cells[(y * self.bounds.width() + x) as usize])?;
            }
        }
        Ok(())
    }
}
