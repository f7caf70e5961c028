// File: crates/chart-core/tests/monotone.rs
// Purpose: Monotone curves never leave the y-range of the two samples they join.

use chart_core::{curve_path, CurveType, Point};

/// Pull the numbers out of every `C` command as (x1, y1, x2, y2, x, y).
fn cubic_segments(d: &str) -> Vec<[f64; 6]> {
    d.split('C')
        .skip(1)
        .map(|seg| {
            let end = seg.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(seg.len());
            let nums: Vec<f64> = seg[..end].split(',').map(|n| n.parse().expect("number")).collect();
            assert_eq!(nums.len(), 6, "segment {seg}");
            [nums[0], nums[1], nums[2], nums[3], nums[4], nums[5]]
        })
        .collect()
}

fn assert_no_overshoot(samples: &[(f64, f64)]) {
    let data: Vec<Point> = samples.iter().copied().map(Point::from).collect();
    let d = curve_path(CurveType::Monotone, &data).expect("path");
    let segments = cubic_segments(&d);
    assert_eq!(segments.len(), samples.len() - 1, "{d}");

    for (seg, pair) in segments.iter().zip(samples.windows(2)) {
        let (lo, hi) = (pair[0].1.min(pair[1].1), pair[0].1.max(pair[1].1));
        for y in [seg[1], seg[3]] {
            assert!(y >= lo - 1e-9 && y <= hi + 1e-9, "control y {y} outside [{lo}, {hi}] in {d}");
        }
        assert_eq!(seg[5], pair[1].1);
    }
}

#[test]
fn zigzag_stays_within_neighbours() {
    assert_no_overshoot(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0), (3.0, 10.0), (4.0, 0.0)]);
}

#[test]
fn plateau_then_spike_stays_flat() {
    assert_no_overshoot(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 50.0), (4.0, 49.0), (5.0, 0.0)]);
}

#[test]
fn uneven_spacing_stays_within_neighbours() {
    assert_no_overshoot(&[(0.0, 1.0), (0.5, 8.0), (4.0, 9.0), (4.2, 2.0), (10.0, 3.0)]);
}
