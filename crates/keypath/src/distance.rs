/// Manhattan (L1) distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn manhattan(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).abs() + (y2 - y1).abs()
}

/// Straight-line (Euclidean, L2) distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn straight(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn chebyshev(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).abs().max((y2 - y1).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_3_4() {
        assert_eq!(manhattan(0.0, 0.0, 3.0, 4.0), 7.0);
        assert_eq!(manhattan(3.0, 4.0, 0.0, 0.0), 7.0);
    }

    #[test]
    fn straight_3_4() {
        assert_eq!(straight(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(straight(-3.0, -4.0, 0.0, 0.0), 5.0);
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        assert_eq!(chebyshev(0.0, 0.0, 3.0, 4.0), 4.0);
        assert_eq!(chebyshev(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn metrics_order() {
        // L∞ <= L2 <= L1 for any pair of points.
        let (a, b) = ((2.0, -1.0), (-5.0, 6.5));
        let c = chebyshev(a.0, a.1, b.0, b.1);
        let s = straight(a.0, a.1, b.0, b.1);
        let m = manhattan(a.0, a.1, b.0, b.1);
        assert!(c <= s && s <= m);
    }
}
