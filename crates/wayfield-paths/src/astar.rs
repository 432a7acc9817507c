use std::collections::BinaryHeap;

use wayfield_core::Point;

use crate::PathBuffer;
use crate::pathbuffer::NodeRef;
use crate::traits::Pather;

impl PathBuffer {
    /// Compute the shortest path from `from` to `to` using A* with unit
    /// step cost.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists within the current range.
    pub fn astar_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries: a cell may be enqueued several times, and
            // only the freshest one matters (lazy deletion).
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            // With an admissible, consistent heuristic the first pop of the
            // goal is optimal.
            if ci == goal_idx {
                found = true;
                break;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative_g >= n.g {
                    // Already reached at least as cheaply this search.
                    continue;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.generation = cur_gen;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct by walking parent links back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
