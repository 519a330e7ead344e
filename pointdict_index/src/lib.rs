// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointdict Index: a 2D point dictionary with pluggable tree backends.
//!
//! Pointdict maps 2D point keys to arbitrary values and answers three
//! queries over them:
//!
//! - exact lookup of the value stored at a point,
//! - axis-aligned range queries in ascending key order (ordered backend),
//! - radius ("ball") queries returning every value within a distance.
//!
//! Two structurally different trees answer the same dictionary contract,
//! and the [`PointDict`] facade hides which one is in use:
//!
//! - [`BstPoints`]: an ordered binary search tree over the x-then-y total
//!   order. Ball queries are a bounded range scan over
//!   `[center - (r, r), center + (r, r)]` followed by an exact
//!   squared-distance post-filter.
//! - [`Kd2d`]: a two-dimensional tree alternating its splitting axis per
//!   depth. Ball queries prune half-spaces geometrically and need no
//!   post-filter.
//!
//! Neither tree rebalances: shape is decided purely by insertion order, so
//! adversarial (sorted) input degrades queries to O(n). Traversals use
//! explicit worklists, so deep chains cost time, not stack.
//!
//! # Example
//!
//! ```rust
//! use pointdict_index::{Point, PointDict};
//!
//! // Build a dictionary from parallel point/value sequences.
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(2.0, 2.0),
//! ];
//! let dict: PointDict<&str> = PointDict::from_pairs(points, ["A", "B", "C", "D"]);
//!
//! // The corners of the square are sqrt(2) from its center.
//! assert_eq!(dict.ball_search(Point::new(1.0, 1.0), 1.5).len(), 4);
//! assert!(dict.ball_search(Point::new(1.0, 1.0), 1.0).is_empty());
//! assert_eq!(dict.exact_search(Point::new(2.0, 0.0)), Some(&"B"));
//! ```
//!
//! The ordered backend answers the same queries through a different
//! algorithm; pick it with the [`BstPointDict`] alias:
//!
//! ```rust
//! use pointdict_index::{BstPointDict, Point};
//!
//! let dict: BstPointDict<u32> =
//!     BstPointDict::from_pairs([Point::new(1.0, 2.0)], [7]);
//! assert_eq!(dict.exact_search(Point::new(1.0, 2.0)), Some(&7));
//! ```
//!
//! ## Choosing a backend
//!
//! - [`Kd2d`] (default): exact geometric pruning for ball queries; the
//!   right choice when radius queries dominate.
//! - [`BstPoints`]: keeps entries in a single total order, so it also
//!   offers ordered range queries over that order; ball queries pay for a
//!   post-filter pass.
//!
//! ### Float semantics
//!
//! Coordinates are `f64`. The ordered backend uses the IEEE total order
//! (`f64::total_cmp`); the two-dimensional backend compares with plain
//! `<` / `>` and treats NaN as a tie. No NaNs is the sane regime.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod dict;
mod types;

pub use backend::Backend;
pub use backends::{Bst, BstPoints, Kd2d};
pub use dict::{BstPointDict, PointDict, PointDictGeneric};
pub use types::{Point, dist_sq, point_cmp};
