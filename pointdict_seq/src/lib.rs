// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointdict Seq: the ordered sequence used to accumulate query results.
//!
//! [`Seq`] is a thin wrapper over a deque that fixes the contract query code
//! relies on:
//!
//! - O(1) amortized insertion at the front and at the back.
//! - Front-to-back traversal in insertion order.
//! - Removal of arbitrary elements while preserving the order of survivors.
//!
//! Range searches append at the back so ascending key order is preserved;
//! post-filters drop elements in place with [`Seq::retain`].
//!
//! The sequence owns its elements. Callers that want to keep ownership of
//! the underlying data store references (`Seq<&V>`) instead.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;

/// An ordered sequence of values with cheap insertion at both ends.
#[derive(Clone, Debug)]
pub struct Seq<T> {
    items: VecDeque<T>,
}

impl<T> Seq<T> {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty sequence with room for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(n),
        }
    }

    /// Insert a value at the front.
    pub fn push_front(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Insert a value at the back.
    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Keep only the elements for which `keep` returns true.
    ///
    /// Surviving elements stay in their original relative order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.items.retain(keep);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = alloc::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Seq<T> {}
