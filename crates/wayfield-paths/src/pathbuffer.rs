use wayfield_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

/// Per-cell search record: best known cost, estimate, back-pointer and
/// closed flag. Lives in the buffer's arena, never in the field's cells, so
/// repeated searches cannot corrupt each other through stale state.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the start (g-score).
    pub(crate) g: i32,
    /// g plus heuristic estimate to the goal (f-score).
    pub(crate) f: i32,
    /// Flat index of the predecessor, `usize::MAX` for the start.
    pub(crate) parent: usize,
    /// Search stamp; entries from older generations are ignored.
    pub(crate) generation: u32,
    /// Whether the node is on the open list (not yet finalized).
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathBuffer
// ---------------------------------------------------------------------------

/// Reusable search-state arena for A* queries over a grid rectangle.
///
/// `PathBuffer` owns the per-cell node records and a neighbor scratch
/// buffer, so repeated queries incur no allocations after warm-up. A
/// generation counter is bumped per search to lazily invalidate the whole
/// arena instead of clearing it.
pub struct PathBuffer {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathBuffer {
    /// Create a new `PathBuffer` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying rectangle, reallocating the arena as needed.
    ///
    /// If the new size fits within existing capacity, the arena is kept and
    /// only the generation counter is bumped so stale entries are ignored.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathBuffer::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut buf = PathBuffer::new(Range::new(0, 0, 20, 20));
        let original_cap = buf.nodes.len(); // 400

        let small = Range::new(0, 0, 5, 5);
        buf.set_range(small);
        assert_eq!(buf.range(), small);
        assert_eq!(buf.nodes.len(), original_cap); // still 400
        assert_eq!(buf.width, 5);
        // Generation bumped so stale entries are ignored.
        assert_eq!(buf.generation, 1);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut buf = PathBuffer::new(Range::new(0, 0, 5, 5));
        let old_cap = buf.nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        buf.set_range(big);
        assert_eq!(buf.range(), big);
        assert!(buf.nodes.len() > old_cap);
        assert_eq!(buf.nodes.len(), 400);
    }

    #[test]
    fn idx_point_round_trip() {
        let buf = PathBuffer::new(Range::new(0, 0, 7, 5));
        for p in buf.range().iter() {
            let i = buf.idx(p).unwrap();
            assert_eq!(buf.point(i), p);
        }
        assert_eq!(buf.idx(Point::new(7, 0)), None);
        assert_eq!(buf.idx(Point::new(0, 5)), None);
    }
}
