// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build both dictionary backends over the same point cloud and compare
//! their answers to a few ball and exact queries.

use pointdict_index::{BstPointDict, Point, PointDict};

fn main() {
    // A small grid of labeled sites.
    let mut points = Vec::new();
    let mut labels = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            points.push(Point::new(x as f64 * 10.0, y as f64 * 10.0));
            labels.push(format!("site-{x}-{y}"));
        }
    }

    let kd: PointDict<String> = PointDict::from_pairs(points.iter().copied(), labels.clone());
    let bst: BstPointDict<String> = BstPointDict::from_pairs(points.iter().copied(), labels);

    println!(
        "built {} entries; avg depth kd = {:.2}, bst = {:.2}",
        kd.len(),
        kd.average_depth(),
        bst.average_depth()
    );

    let center = Point::new(35.0, 35.0);
    for radius in [8.0, 15.0, 25.0] {
        let kd_hits = kd.ball_search(center, radius);
        let bst_hits = bst.ball_search(center, radius);
        assert_eq!(kd_hits.len(), bst_hits.len());
        println!("ball({center:?}, r={radius}): {} hits", kd_hits.len());
        for label in &kd_hits {
            println!("  {label}");
        }
    }

    let probe = Point::new(20.0, 30.0);
    match kd.exact_search(probe) {
        Some(label) => println!("exact {probe:?} -> {label}"),
        None => println!("exact {probe:?} -> miss"),
    }
}
