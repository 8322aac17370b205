use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns the turn angle in degrees at `curr`, in `[0, 180]`.
///
/// The angle is measured between the incoming direction `curr - prev` and
/// the outgoing direction `next - curr`: `0` for a straight continuation,
/// `180` for a full reversal.
///
/// If either direction has zero length (coincident points), returns `0.0`.
#[must_use]
pub fn turn_angle_deg(prev: &Point2, curr: &Point2, next: &Point2) -> f64 {
    let v1 = curr - prev;
    let v2 = next - curr;
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 == 0.0 || n2 == 0.0 {
        return 0.0;
    }
    // Rounding can push the ratio just outside [-1, 1] for parallel vectors.
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── distance tests ──

    #[test]
    fn distance_3_4_5() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn distance_coincident_is_zero() {
        let p = Point2::new(1.5, -2.0);
        assert!(distance(&p, &p).abs() < f64::EPSILON);
    }

    // ── turn_angle_deg tests ──

    #[test]
    fn straight_continuation_is_zero() {
        let a = turn_angle_deg(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!(a.abs() < TOL, "a={a}");
    }

    #[test]
    fn right_angle_is_90() {
        let a = turn_angle_deg(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, 1.0),
        );
        assert!((a - 90.0).abs() < TOL, "a={a}");
    }

    #[test]
    fn reversal_is_180() {
        let a = turn_angle_deg(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert!((a - 180.0).abs() < TOL, "a={a}");
    }

    #[test]
    fn zig_zag_corner_is_135() {
        let a = turn_angle_deg(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
        );
        assert!((a - 135.0).abs() < 1e-9, "a={a}");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn coincident_triple_is_exactly_zero() {
        let p = Point2::new(2.0, 3.0);
        let a = turn_angle_deg(&p, &p, &p);
        assert_eq!(a, 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_length_outgoing_is_exactly_zero() {
        let a = turn_angle_deg(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert_eq!(a, 0.0);
    }

    #[test]
    fn nearly_collinear_never_nan() {
        // Collinear triples whose cosine may round past 1.0.
        let pts = [
            (Point2::new(0.0, 0.0), Point2::new(0.1, 0.1), Point2::new(0.3, 0.3)),
            (Point2::new(0.0, 0.0), Point2::new(0.7, 0.1), Point2::new(2.1, 0.3)),
        ];
        for (p, c, n) in &pts {
            let a = turn_angle_deg(p, c, n);
            assert!(!a.is_nan());
            assert!((0.0..=180.0).contains(&a), "a={a}");
            assert!(a < 1e-3, "a={a}");
        }
    }
}
