//! Bilinear interpolation over a row-major grid.

/// Bilinear interpolation of `zs` over the grid spanned by `xs` × `ys`.
///
/// `zs` is row-major with `zs[j + i * ys.len()]` the value at
/// `(xs[i], ys[j])`. Both axes must be sorted ascending with at least two
/// breakpoints.
///
/// Unlike [`interpolate`](crate::interpolate), points outside either axis
/// are not clamped: the result is exactly `0.0`. A NaN coordinate is
/// treated as outside. At the exact lower and upper corners the stored
/// corner value is returned directly.
///
/// # Examples
///
/// ```
/// use radiant_interp::interpolate_2d;
///
/// let xs = [0.0, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(interpolate_2d(0.5, 0.5, &xs, &ys, &zs), 1.5);
/// assert_eq!(interpolate_2d(1.5, 0.5, &xs, &ys, &zs), 0.0);
/// ```
pub fn interpolate_2d(x: f64, y: f64, xs: &[f64], ys: &[f64], zs: &[f64]) -> f64 {
    debug_assert!(xs.len() >= 2 && ys.len() >= 2, "grid axes need two breakpoints");
    debug_assert_eq!(zs.len(), xs.len() * ys.len(), "grid size mismatch");

    let (nx, ny) = (xs.len(), ys.len());
    if !(x >= xs[0] && x <= xs[nx - 1]) || !(y >= ys[0] && y <= ys[ny - 1]) {
        return 0.0;
    }
    if x == xs[0] && y == ys[0] {
        return zs[0];
    }
    if x == xs[nx - 1] && y == ys[ny - 1] {
        return zs[zs.len() - 1];
    }

    // Upper bound is at least 1 inside the range; cap so that i + 1 stays
    // on the grid when x sits on the last breakpoint.
    let i = (xs.partition_point(|&v| v <= x) - 1).min(nx - 2);
    let j = (ys.partition_point(|&v| v <= y) - 1).min(ny - 2);
    let at = |i: usize, j: usize| zs[j + i * ny];

    let (x0, x1) = (xs[i], xs[i + 1]);
    let (y0, y1) = (ys[j], ys[j + 1]);
    let wx0 = (x1 - x) / (x1 - x0);
    let wx1 = (x - x0) / (x1 - x0);

    let r1 = wx0 * at(i, j) + wx1 * at(i + 1, j);
    let r2 = wx0 * at(i, j + 1) + wx1 * at(i + 1, j + 1);
    ((y1 - y) / (y1 - y0)) * r1 + ((y - y0) / (y1 - y0)) * r2
}

#[cfg(test)]
mod tests {
    use super::*;

    // z = 2x + 3y on a non-uniform grid; bilinear reproduces it exactly.
    fn plane() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let xs = vec![0.0, 1.0, 3.0];
        let ys = vec![-1.0, 0.0, 2.0, 5.0];
        let mut zs = Vec::new();
        for &x in &xs {
            for &y in &ys {
                zs.push(2.0 * x + 3.0 * y);
            }
        }
        (xs, ys, zs)
    }

    #[test]
    fn reproduces_a_plane() {
        let (xs, ys, zs) = plane();
        for &(x, y) in &[(0.5, -0.5), (2.0, 1.0), (2.9, 4.9), (1.0, 0.0)] {
            let v = interpolate_2d(x, y, &xs, &ys, &zs);
            assert!((v - (2.0 * x + 3.0 * y)).abs() < 1e-12, "({x}, {y}) -> {v}");
        }
    }

    #[test]
    fn corners_return_stored_values() {
        let (xs, ys, zs) = plane();
        assert_eq!(interpolate_2d(0.0, -1.0, &xs, &ys, &zs), zs[0]);
        assert_eq!(interpolate_2d(3.0, 5.0, &xs, &ys, &zs), zs[zs.len() - 1]);
    }

    #[test]
    fn upper_edges_stay_on_grid() {
        let (xs, ys, zs) = plane();
        // x on the last breakpoint, y interior (and vice versa).
        let v = interpolate_2d(3.0, 1.0, &xs, &ys, &zs);
        assert!((v - 9.0).abs() < 1e-12);
        let v = interpolate_2d(0.5, 5.0, &xs, &ys, &zs);
        assert!((v - 16.0).abs() < 1e-12);
    }

    #[test]
    fn outside_is_exactly_zero() {
        let (xs, ys, zs) = plane();
        assert_eq!(interpolate_2d(-0.1, 0.0, &xs, &ys, &zs), 0.0);
        assert_eq!(interpolate_2d(3.1, 0.0, &xs, &ys, &zs), 0.0);
        assert_eq!(interpolate_2d(1.0, -1.1, &xs, &ys, &zs), 0.0);
        assert_eq!(interpolate_2d(1.0, 5.1, &xs, &ys, &zs), 0.0);
        assert_eq!(interpolate_2d(f64::NAN, 0.0, &xs, &ys, &zs), 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn zero_outside_any_axis(
                dx in 1e-6f64..1e6,
                y in -1.0f64..=5.0,
                below in any::<bool>(),
            ) {
                let (xs, ys, zs) = plane();
                let x = if below { xs[0] - dx } else { xs[xs.len() - 1] + dx };
                let y_out = if below { ys[0] - dx } else { ys[ys.len() - 1] + dx };
                prop_assert_eq!(interpolate_2d(x, y, &xs, &ys, &zs), 0.0);
                prop_assert_eq!(interpolate_2d(y.clamp(0.0, 3.0), y_out, &xs, &ys, &zs), 0.0);
            }
        }
    }
}
