// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for the two tree strategies.
//!
//! - `bst`: ordered binary search tree over the x-then-y total order.
//!   Range queries are an order-preserving bounded in-order scan; ball
//!   queries pre-filter with a comparator range and post-filter by true
//!   squared distance.
//! - `kd`: two-dimensional tree alternating the splitting axis per depth.
//!   Ball queries prune half-spaces geometrically and are exact with no
//!   post-filter.
//!
//! The two are deliberately kept structurally distinct rather than
//! unified: their query algorithms differ in kind (ordered range scan vs.
//! half-space pruning), not just in comparator. Neither rebalances; tree
//! shape is decided entirely by insertion order, and a sorted insertion
//! order degrades either tree into a chain.

pub(crate) mod bst;
pub(crate) mod kd;

pub use bst::{Bst, BstPoints};
pub use kd::Kd2d;
