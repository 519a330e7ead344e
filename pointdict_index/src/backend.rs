// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait shared by the two tree implementations.

use pointdict_seq::Seq;

use crate::types::Point;

/// Tree backend abstraction used by [`PointDictGeneric`][crate::PointDictGeneric].
///
/// Both backends answer the same queries; they differ in how. The
/// two-dimensional tree prunes ball queries geometrically and needs no
/// post-filter, while the ordered tree answers them with a comparator range
/// scan followed by an exact distance filter. The facade does not care.
pub trait Backend<V> {
    /// Number of entries, O(1).
    fn len(&self) -> usize;

    /// Whether the backend holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an entry. Duplicate points are kept (left-biased ties).
    fn insert(&mut self, point: Point, value: V);

    /// Value stored at exactly `point`, if any. A miss is `None`, not a fault.
    fn exact(&self, point: Point) -> Option<&V>;

    /// Visit the value of every entry within `radius` (inclusive) of `center`.
    ///
    /// The yielded references borrow from `self`, so callers may keep them
    /// past the closure body (that is what [`ball`][Backend::ball] does).
    fn visit_ball<'s, F: FnMut(&'s V)>(&'s self, center: Point, radius: f64, f: F)
    where
        V: 's;

    /// Collect [`visit_ball`][Backend::visit_ball] into a sequence.
    fn ball<'s>(&'s self, center: Point, radius: f64) -> Seq<&'s V>
    where
        V: 's,
    {
        let mut out = Seq::new();
        self.visit_ball(center, radius, |v| out.push_back(v));
        out
    }

    /// Mean node depth (root = 0); a structural balance diagnostic.
    ///
    /// Empty and single-node trees report their size (0.0 or 1.0) by
    /// convention.
    fn average_depth(&self) -> f64;
}
