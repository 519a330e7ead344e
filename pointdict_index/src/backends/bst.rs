// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered binary search tree keyed by a caller-supplied total order.
//!
//! The tree is generic over the key type; the point-keyed wrapper
//! [`BstPoints`] plugs it into the dictionary facade. Range queries walk
//! the tree in order, pruning subtrees that are provably outside the
//! bound, so results come back in ascending key order.
//!
//! Tree shape is determined purely by insertion order; there is no
//! rebalancing. A sorted insertion order degrades the tree into a chain,
//! which costs O(n) per query but cannot overflow the call stack: every
//! traversal below uses an explicit worklist.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use pointdict_seq::Seq;
use smallvec::SmallVec;

use crate::backend::Backend;
use crate::types::{Point, dist_sq, point_cmp};

struct Node<K, V> {
    key: K,
    value: V,
    left: Option<u32>,
    right: Option<u32>,
}

/// Binary search tree ordered by the comparator `C`.
///
/// Ties (`Ordering::Equal`) are placed to the left, so duplicate keys
/// accumulate leftward and an exact search finds the topmost match, which
/// is the first-inserted among equals.
pub struct Bst<K, V, C> {
    nodes: Vec<Node<K, V>>,
    root: Option<u32>,
    cmp: C,
}

impl<K, V, C> Debug for Bst<K, V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bst")
            .field("len", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

/// Worklist frame for the bounded in-order walk.
enum Frame {
    Walk(u32),
    Emit(u32),
}

impl<K, V, C: Fn(&K, &K) -> Ordering> Bst<K, V, C> {
    /// Create an empty tree ordered by `cmp`.
    ///
    /// `cmp` must be a total order over keys; the ordering invariant and
    /// the range walk both depend on it being consistent.
    pub const fn new(cmp: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            cmp,
        }
    }

    /// Number of entries, O(1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert an entry at the first empty slot found on the descent path.
    ///
    /// Equal keys go left.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut cur) = self.root else {
            self.root = Some(self.push_node(key, value));
            return;
        };
        loop {
            let go_left = (self.cmp)(&key, &self.nodes[cur as usize].key) != Ordering::Greater;
            let child = if go_left {
                self.nodes[cur as usize].left
            } else {
                self.nodes[cur as usize].right
            };
            match child {
                Some(next) => cur = next,
                None => {
                    let new = self.push_node(key, value);
                    let parent = &mut self.nodes[cur as usize];
                    if go_left {
                        parent.left = Some(new);
                    } else {
                        parent.right = Some(new);
                    }
                    return;
                }
            }
        }
    }

    /// Value stored under `key`, or `None`. O(height).
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.nodes[i as usize].value)
    }

    /// Entries with `min <= key <= max`, in ascending key order.
    ///
    /// Each entry is returned as a key/value pair so callers can
    /// post-filter on the key (the ball search does). `min > max` and the
    /// empty tree both yield an empty sequence; `min == max` delegates to a
    /// single exact search.
    pub fn range(&self, min: &K, max: &K) -> Seq<(&K, &V)> {
        let mut out = Seq::new();
        let Some(root) = self.root else {
            return out;
        };
        match (self.cmp)(min, max) {
            Ordering::Greater => return out,
            Ordering::Equal => {
                if let Some(i) = self.find(min) {
                    let n = &self.nodes[i as usize];
                    out.push_front((&n.key, &n.value));
                }
                return out;
            }
            Ordering::Less => {}
        }

        // Bounded in-order walk. Frames are pushed right-emit-left so the
        // left subtree pops first.
        let mut stack: SmallVec<[Frame; 32]> = SmallVec::new();
        stack.push(Frame::Walk(root));
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Emit(i) => {
                    let n = &self.nodes[i as usize];
                    out.push_back((&n.key, &n.value));
                }
                Frame::Walk(i) => {
                    let n = &self.nodes[i as usize];
                    let cmin = (self.cmp)(min, &n.key);
                    let cmax = (self.cmp)(max, &n.key);
                    if cmax == Ordering::Greater
                        && let Some(r) = n.right
                    {
                        stack.push(Frame::Walk(r));
                    }
                    if cmin != Ordering::Greater && cmax != Ordering::Less {
                        stack.push(Frame::Emit(i));
                    }
                    if cmin != Ordering::Greater
                        && let Some(l) = n.left
                    {
                        stack.push(Frame::Walk(l));
                    }
                }
            }
        }
        out
    }

    /// Mean node depth (root = 0).
    ///
    /// Empty and single-node trees report their size (0.0 or 1.0) without
    /// traversal.
    pub fn average_depth(&self) -> f64 {
        let n = self.nodes.len();
        if n <= 1 {
            return n as f64;
        }
        let Some(root) = self.root else {
            return 0.0;
        };
        let mut sum = 0u64;
        let mut stack: SmallVec<[(u32, u32); 32]> = SmallVec::new();
        stack.push((root, 0));
        while let Some((i, depth)) = stack.pop() {
            sum += u64::from(depth);
            let node = &self.nodes[i as usize];
            if let Some(l) = node.left {
                stack.push((l, depth + 1));
            }
            if let Some(r) = node.right {
                stack.push((r, depth + 1));
            }
        }
        sum as f64 / n as f64
    }

    fn find(&self, key: &K) -> Option<u32> {
        let mut cur = self.root;
        while let Some(i) = cur {
            let n = &self.nodes[i as usize];
            match (self.cmp)(key, &n.key) {
                Ordering::Less => cur = n.left,
                Ordering::Greater => cur = n.right,
                Ordering::Equal => return Some(i),
            }
        }
        None
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node indices are intentionally u32; trees beyond u32::MAX nodes are unsupported."
    )]
    fn push_node(&mut self, key: K, value: V) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
        });
        idx
    }
}

/// Point-keyed ordered tree: the BST backend of the dictionary.
///
/// Keys are ordered x-then-y (see [`point_cmp`]). Ball queries run a range
/// scan over `[center - (r, r), center + (r, r)]` — a necessary but not
/// sufficient pre-filter under the lexicographic order — then drop every
/// survivor whose true squared distance exceeds `radius * radius`.
pub struct BstPoints<V> {
    tree: Bst<Point, V, fn(&Point, &Point) -> Ordering>,
}

impl<V> Default for BstPoints<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Debug for BstPoints<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BstPoints")
            .field("len", &self.tree.len())
            .finish_non_exhaustive()
    }
}

impl<V> BstPoints<V> {
    /// Create an empty point-keyed tree.
    pub fn new() -> Self {
        Self {
            tree: Bst::new(point_cmp),
        }
    }

    /// The underlying ordered tree.
    pub fn tree(&self) -> &Bst<Point, V, fn(&Point, &Point) -> Ordering> {
        &self.tree
    }
}

impl<V> Backend<V> for BstPoints<V> {
    fn len(&self) -> usize {
        self.tree.len()
    }

    fn insert(&mut self, point: Point, value: V) {
        self.tree.insert(point, value);
    }

    fn exact(&self, point: Point) -> Option<&V> {
        self.tree.get(&point)
    }

    fn visit_ball<'s, F: FnMut(&'s V)>(&'s self, center: Point, radius: f64, mut f: F)
    where
        V: 's,
    {
        debug_assert!(radius >= 0.0, "ball radius must be non-negative");
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        let r2 = radius * radius;
        let mut hits = self.tree.range(&min, &max);
        hits.retain(|(p, _)| dist_sq(**p, center) <= r2);
        for &(_, v) in &hits {
            f(v);
        }
    }

    fn average_depth(&self) -> f64 {
        self.tree.average_depth()
    }
}
