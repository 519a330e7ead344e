// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point contract: total order and squared-distance metric over `kurbo::Point`.

use core::cmp::Ordering;

pub use kurbo::Point;

/// Total order over points: by x, then by y.
///
/// Uses [`f64::total_cmp`], so every pair of coordinates is ordered, NaNs
/// included (IEEE 754 total order). This is the comparator the ordered
/// backend is keyed by; the range pre-filter in the BST ball search relies
/// on it being exactly x-then-y.
#[inline]
pub fn point_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Squared Euclidean distance between two points.
///
/// Queries compare against `radius * radius` so no square root is taken
/// anywhere in the crate.
#[inline]
pub fn dist_sq(a: Point, b: Point) -> f64 {
    a.distance_squared(b)
}

/// Coordinate of `p` along axis `a` (0 = x, 1 = y).
#[inline]
pub(crate) fn axis_coord(p: Point, a: usize) -> f64 {
    if a == 0 { p.x } else { p.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_x_then_y() {
        let a = Point::new(1.0, 9.0);
        let b = Point::new(2.0, 0.0);
        assert_eq!(point_cmp(&a, &b), Ordering::Less);
        let c = Point::new(1.0, 10.0);
        assert_eq!(point_cmp(&a, &c), Ordering::Less);
        assert_eq!(point_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn squared_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(dist_sq(a, b), 25.0);
    }
}
