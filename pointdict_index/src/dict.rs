// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `PointDict` API and generic implementation over a pluggable backend.

use pointdict_seq::Seq;

use crate::backend::Backend;
use crate::backends::{BstPoints, Kd2d};
use crate::types::Point;

/// A point dictionary parameterized by a tree backend.
///
/// Built once from parallel sequences of points and values, then queried;
/// no mutation is exposed after construction. The dictionary owns its
/// points and values. Callers that want to keep ownership of the payloads
/// store references (`V = &T`) instead.
#[derive(Debug)]
pub struct PointDictGeneric<V, B: Backend<V>> {
    backend: B,
    _v: core::marker::PhantomData<V>,
}

impl<V, B> PointDictGeneric<V, B>
where
    B: Backend<V> + Default,
{
    /// Build a dictionary by pairing `points` and `values` in traversal order.
    ///
    /// The i-th point is keyed to the i-th value. If one input runs out
    /// before the other, pairing stops at the shorter one — mismatched
    /// lengths are silently truncated, not an error. Surprising, but the
    /// documented policy; callers that care should compare lengths first.
    pub fn from_pairs<P, I>(points: P, values: I) -> Self
    where
        P: IntoIterator<Item = Point>,
        I: IntoIterator<Item = V>,
    {
        let mut backend = B::default();
        for (p, v) in points.into_iter().zip(values) {
            backend.insert(p, v);
        }
        Self {
            backend,
            _v: core::marker::PhantomData,
        }
    }
}

impl<V, B> PointDictGeneric<V, B>
where
    B: Backend<V>,
{
    /// Wrap a pre-built backend.
    ///
    /// Useful when higher layers want to choose or configure the backend
    /// before handing it to the facade.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _v: core::marker::PhantomData,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Value stored at exactly `point`. A miss is `None`, never a fault.
    pub fn exact_search(&self, point: Point) -> Option<&V> {
        self.backend.exact(point)
    }

    /// Values of all entries within `radius` (inclusive) of `center`.
    ///
    /// Both backends return the same value set: the two-dimensional tree
    /// prunes geometrically, the ordered tree range-scans a bounding
    /// interval and post-filters by true distance. Only values come back,
    /// never points.
    pub fn ball_search(&self, center: Point, radius: f64) -> Seq<&V> {
        self.backend.ball(center, radius)
    }

    /// Mean node depth of the backend tree; a balance diagnostic.
    pub fn average_depth(&self) -> f64 {
        self.backend.average_depth()
    }

    /// The backend tree.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Default dictionary: two-dimensional tree backend (exact ball pruning).
pub type PointDict<V> = PointDictGeneric<V, Kd2d<V>>;

/// Dictionary over the ordered-tree backend (range scan plus post-filter).
pub type BstPointDict<V> = PointDictGeneric<V, BstPoints<V>>;
