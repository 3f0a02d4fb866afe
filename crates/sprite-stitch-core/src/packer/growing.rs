use crate::error::{Result, StitchError};
use crate::model::Point;

/// One rectangle to place. The packer fills in `fit` for every block it manages to
/// place; a block left with `fit == None` could not be accommodated and the caller
/// should report it and carry on.
#[derive(Debug, Clone)]
pub struct Block {
    pub key: String,
    pub w: u32,
    pub h: u32,
    pub fit: Option<Point>,
}

impl Block {
    pub fn new(key: impl Into<String>, w: u32, h: u32) -> Self {
        Self {
            key: key.into(),
            w,
            h,
            fit: None,
        }
    }
}

/// Packing-space node: a free or split rectangle in the growing bin.
///
/// Once a node is split (`used`), its free space lives entirely in the `right` and
/// `down` children; the node itself only records the placed origin.
#[derive(Debug, Clone)]
struct Node {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    used: bool,
    right: Option<usize>,
    down: Option<usize>,
}

impl Node {
    fn free(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            used: false,
            right: None,
            down: None,
        }
    }
}

/// Growing binary-tree bin packer.
///
/// Starts the bin at the size of the first block and grows it rightward or downward
/// on demand, keeping the bin roughly square. Blocks are placed in caller order; the
/// caller is expected to pre-sort (descending height, or descending max side) — the
/// packer never reorders its input, so placement quality is the caller's contract.
///
/// Each [`fit`](GrowingBinPacker::fit) call owns a fresh node arena; there is no
/// shared or process-wide packer state.
#[derive(Debug)]
pub struct GrowingBinPacker {
    nodes: Vec<Node>,
    root: usize,
}

impl GrowingBinPacker {
    /// Places `blocks` in order, attaching a [`Point`] to every block that fits.
    ///
    /// Returns the tight bounding box of all placed blocks, which can be smaller
    /// than the grown bin (growth strips may be larger than needed). Blocks that
    /// cannot be placed even after growth keep `fit == None`; that is a per-item,
    /// non-fatal condition. An empty input is a hard error.
    pub fn fit(blocks: &mut [Block]) -> Result<(u32, u32)> {
        let first = blocks.first().ok_or(StitchError::Empty)?;
        let mut packer = GrowingBinPacker {
            nodes: vec![Node::free(0, 0, first.w, first.h)],
            root: 0,
        };
        for block in blocks.iter_mut() {
            block.fit = match packer.find_node(packer.root, block.w, block.h) {
                Some(idx) => Some(packer.split_node(idx, block.w, block.h)),
                None => packer.grow(block.w, block.h),
            };
        }

        let mut bound_w = 0u32;
        let mut bound_h = 0u32;
        for block in blocks.iter() {
            if let Some(p) = block.fit {
                bound_w = bound_w.max(p.x + block.w);
                bound_h = bound_h.max(p.y + block.h);
            }
        }
        Ok((bound_w, bound_h))
    }

    /// Depth-first search for a free node at least `w` x `h`: right subtree first,
    /// then down. Used nodes are only traversed, never candidates.
    fn find_node(&self, idx: usize, w: u32, h: u32) -> Option<usize> {
        let node = &self.nodes[idx];
        if node.used {
            if let Some(found) = node.right.and_then(|r| self.find_node(r, w, h)) {
                return Some(found);
            }
            node.down.and_then(|d| self.find_node(d, w, h))
        } else if w <= node.w && h <= node.h {
            Some(idx)
        } else {
            None
        }
    }

    /// Marks `idx` used and carves the leftover space into a down child (full node
    /// width, remaining height) and a right child (remaining width, placed height).
    /// The two children partition the leftover without overlap.
    fn split_node(&mut self, idx: usize, w: u32, h: u32) -> Point {
        let (x, y, nw, nh) = {
            let n = &self.nodes[idx];
            (n.x, n.y, n.w, n.h)
        };
        let down = self.push(Node::free(x, y + h, nw, nh - h));
        let right = self.push(Node::free(x + w, y, nw - w, h));
        let node = &mut self.nodes[idx];
        node.used = true;
        node.down = Some(down);
        node.right = Some(right);
        Point::new(x, y)
    }

    /// Grows the bin to fit a `w` x `h` block that no existing free node can hold.
    ///
    /// Growing right is preferred when the block fits the current height and the bin
    /// is taller than it would be wide after growth; growing down mirrors that. When
    /// neither is strictly preferred, whichever direction is geometrically legal
    /// wins, right before down. Returns `None` when the block exceeds the bin on
    /// both perpendicular axes and no growth is legal.
    fn grow(&mut self, w: u32, h: u32) -> Option<Point> {
        let (root_w, root_h) = {
            let r = &self.nodes[self.root];
            (r.w, r.h)
        };
        let can_grow_down = w <= root_w;
        let can_grow_right = h <= root_h;

        let should_grow_right = can_grow_right && root_h >= root_w + w;
        let should_grow_down = can_grow_down && root_w >= root_h + h;

        if should_grow_right {
            self.grow_right(w, h)
        } else if should_grow_down {
            self.grow_down(w, h)
        } else if can_grow_right {
            self.grow_right(w, h)
        } else if can_grow_down {
            self.grow_down(w, h)
        } else {
            None
        }
    }

    fn grow_right(&mut self, w: u32, h: u32) -> Option<Point> {
        let (root_w, root_h) = {
            let r = &self.nodes[self.root];
            (r.w, r.h)
        };
        let strip = self.push(Node::free(root_w, 0, w, root_h));
        let old_root = self.root;
        let new_root = self.push(Node {
            x: 0,
            y: 0,
            w: root_w + w,
            h: root_h,
            used: true,
            right: Some(strip),
            down: Some(old_root),
        });
        self.root = new_root;
        self.find_node(self.root, w, h)
            .map(|idx| self.split_node(idx, w, h))
    }

    fn grow_down(&mut self, w: u32, h: u32) -> Option<Point> {
        let (root_w, root_h) = {
            let r = &self.nodes[self.root];
            (r.w, r.h)
        };
        let strip = self.push(Node::free(0, root_h, root_w, h));
        let old_root = self.root;
        let new_root = self.push(Node {
            x: 0,
            y: 0,
            w: root_w,
            h: root_h + h,
            used: true,
            right: Some(old_root),
            down: Some(strip),
        });
        self.root = new_root;
        self.find_node(self.root, w, h)
            .map(|idx| self.split_node(idx, w, h))
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
