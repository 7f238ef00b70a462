//! One-dimensional lookups over sorted breakpoints.

/// Linear interpolation of `ys` over breakpoints `xs` at `x`.
///
/// `xs` must be sorted ascending and have the same length as `ys`. Values
/// at or before `xs[0]` return `ys[0]`; values at or after the last
/// breakpoint return the last `ys`. Otherwise the bracket is the first
/// index with `xs[i] > x`, minus one.
///
/// Repeated breakpoints are tolerated: the bracket always satisfies
/// `xs[i] <= x < xs[i + 1]`, so the denominator is never zero. This is what
/// lets [`CdfTable::invert`](crate::CdfTable::invert) run a CDF row with
/// plateaus through this function.
///
/// # Panics
///
/// Panics if `xs` or `ys` is empty.
///
/// # Examples
///
/// ```
/// use radiant_interp::interpolate;
///
/// let xs = [1.0, 2.0, 4.0];
/// let ys = [10.0, 20.0, 0.0];
/// assert_eq!(interpolate(1.5, &xs, &ys), 15.0);
/// assert_eq!(interpolate(3.0, &xs, &ys), 10.0);
/// assert_eq!(interpolate(-7.0, &xs, &ys), 10.0);
/// assert_eq!(interpolate(9.0, &xs, &ys), 0.0);
/// ```
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "breakpoint/value length mismatch");
    let upper = xs.partition_point(|&v| v <= x);
    if upper == 0 {
        return ys[0];
    }
    if upper == xs.len() {
        return ys[ys.len() - 1];
    }
    let i = upper - 1;
    ys[i] + (x - xs[i]) * (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
}

/// Linear interpolation of `ys` sampled uniformly over `[lo, hi]`.
///
/// Clamps to the end values outside the range. The bucket index is the
/// floor of the fractional position, capped at `ys.len() - 2` so rounding
/// at the upper edge can never index past the table.
///
/// # Panics
///
/// Panics if `ys` has fewer than two values.
///
/// # Examples
///
/// ```
/// use radiant_interp::interpolate_equidistant;
///
/// let ys = [0.0, 10.0, 40.0];
/// assert_eq!(interpolate_equidistant(0.5, 0.0, 2.0, &ys), 5.0);
/// assert_eq!(interpolate_equidistant(1.5, 0.0, 2.0, &ys), 25.0);
/// assert_eq!(interpolate_equidistant(5.0, 0.0, 2.0, &ys), 40.0);
/// ```
pub fn interpolate_equidistant(x: f64, lo: f64, hi: f64, ys: &[f64]) -> f64 {
    assert!(ys.len() >= 2, "equidistant table needs at least two values");
    if x <= lo {
        return ys[0];
    }
    if x >= hi {
        return ys[ys.len() - 1];
    }
    let dx = (hi - lo) / (ys.len() - 1) as f64;
    let p = (x - lo) / dx;
    let i = (p.floor() as usize).min(ys.len() - 2);
    ys[i] + (p - i as f64) * (ys[i + 1] - ys[i])
}

/// Index of the breakpoint nearest to `x`.
///
/// Lower-bound search followed by one comparison with the left neighbour;
/// ties go to the right. Values beyond either end return the end index.
///
/// # Panics
///
/// Panics if `xs` is empty.
///
/// # Examples
///
/// ```
/// use radiant_interp::closest_index;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(closest_index(1.4, &xs), 1);
/// assert_eq!(closest_index(1.6, &xs), 2);
/// assert_eq!(closest_index(-5.0, &xs), 0);
/// assert_eq!(closest_index(99.0, &xs), 3);
/// ```
pub fn closest_index(x: f64, xs: &[f64]) -> usize {
    assert!(!xs.is_empty(), "closest_index on empty breakpoints");
    let i1 = xs.partition_point(|&v| v < x);
    if i1 == 0 {
        return 0;
    }
    if i1 == xs.len() {
        return xs.len() - 1;
    }
    let i0 = i1 - 1;
    if (xs[i0] - x).abs() < (xs[i1] - x).abs() {
        i0
    } else {
        i1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];
    const YS: [f64; 4] = [1.0, 3.0, -1.0, 7.0];

    #[test]
    fn exact_breakpoints_return_table_values() {
        for (x, y) in XS.iter().zip(YS.iter()) {
            assert_eq!(interpolate(*x, &XS, &YS), *y);
        }
    }

    #[test]
    fn midpoints_are_linear() {
        assert_eq!(interpolate(1.5, &XS, &YS), 2.0);
        assert_eq!(interpolate(3.0, &XS, &YS), 1.0);
        assert_eq!(interpolate(6.0, &XS, &YS), 3.0);
    }

    #[test]
    fn clamps_outside_range() {
        assert_eq!(interpolate(0.0, &XS, &YS), 1.0);
        assert_eq!(interpolate(f64::NEG_INFINITY, &XS, &YS), 1.0);
        assert_eq!(interpolate(100.0, &XS, &YS), 7.0);
        assert_eq!(interpolate(f64::INFINITY, &XS, &YS), 7.0);
    }

    #[test]
    fn single_point_table_is_constant() {
        assert_eq!(interpolate(-1.0, &[2.0], &[5.0]), 5.0);
        assert_eq!(interpolate(3.0, &[2.0], &[5.0]), 5.0);
    }

    #[test]
    fn repeated_breakpoints_do_not_divide_by_zero() {
        let xs = [0.0, 0.5, 0.5, 1.0];
        let ys = [0.0, 1.0, 2.0, 3.0];
        let v = interpolate(0.5, &xs, &ys);
        assert!(v.is_finite());
        assert_eq!(v, 2.0);
    }

    #[test]
    fn equidistant_matches_general_interpolation() {
        let ys = [0.0, 2.0, 3.0, 10.0, 4.0];
        let xs = [0.0, 0.25, 0.5, 0.75, 1.0];
        for k in 0..=40 {
            let x = k as f64 / 40.0;
            let a = interpolate_equidistant(x, 0.0, 1.0, &ys);
            let b = interpolate(x, &xs, &ys);
            assert!((a - b).abs() < 1e-12, "x={x}: {a} vs {b}");
        }
    }

    #[test]
    fn equidistant_clamps() {
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(interpolate_equidistant(-1.0, 0.0, 1.0, &ys), 1.0);
        assert_eq!(interpolate_equidistant(1.0, 0.0, 1.0, &ys), 3.0);
        assert_eq!(interpolate_equidistant(2.0, 0.0, 1.0, &ys), 3.0);
    }

    #[test]
    fn equidistant_upper_edge_stays_in_bounds() {
        // Just below hi, floor(p) may round to n - 1 in floating point.
        let ys: Vec<f64> = (0..201).map(f64::from).collect();
        let hi = 14.0;
        let x = hi - f64::EPSILON * 8.0;
        let v = interpolate_equidistant(x, 6.0, hi, &ys);
        assert!(v <= 200.0 && v > 199.0);
    }

    #[test]
    fn closest_index_ties_go_right() {
        assert_eq!(closest_index(1.5, &[1.0, 2.0]), 1);
        assert_eq!(closest_index(2.0, &[1.0, 2.0, 3.0]), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_table() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
            (2usize..16).prop_flat_map(|n| {
                (
                    prop::collection::vec(0.01f64..10.0, n),
                    prop::collection::vec(-1e3f64..1e3, n),
                    -100.0f64..100.0,
                )
                    .prop_map(|(steps, ys, start)| {
                        let xs = steps
                            .iter()
                            .scan(start, |acc, s| {
                                *acc += s;
                                Some(*acc)
                            })
                            .collect();
                        (xs, ys)
                    })
            })
        }

        proptest! {
            #[test]
            fn result_lies_within_bracket((xs, ys) in arb_table(), t in 0.0f64..=1.0) {
                let lo = xs[0];
                let hi = xs[xs.len() - 1];
                let x = lo + t * (hi - lo);
                let v = interpolate(x, &xs, &ys);
                let upper = xs.partition_point(|&b| b <= x).clamp(1, xs.len() - 1);
                let (a, b) = (ys[upper - 1], ys[upper]);
                let eps = 1e-9 * (a.abs() + b.abs() + 1.0);
                prop_assert!(v >= a.min(b) - eps && v <= a.max(b) + eps,
                    "x={} v={} bracket=({}, {})", x, v, a, b);
            }

            #[test]
            fn clamps_at_both_ends((xs, ys) in arb_table(), d in 0.0f64..1e6) {
                prop_assert_eq!(interpolate(xs[0] - d, &xs, &ys), ys[0]);
                prop_assert_eq!(interpolate(xs[xs.len() - 1] + d, &xs, &ys), ys[ys.len() - 1]);
            }

            #[test]
            fn closest_index_is_nearest((xs, _ys) in arb_table(), x in -200.0f64..300.0) {
                let i = closest_index(x, &xs);
                let best = (x - xs[i]).abs();
                for b in &xs {
                    prop_assert!(best <= (x - b).abs() + 1e-12);
                }
            }
        }
    }
}
