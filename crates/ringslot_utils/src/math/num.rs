use std::ops::{Add, Rem};

/// Positive modulo: the remainder always carries the sign of the divisor
///
/// # Arguments
///
/// * `dividend` - The value to reduce
/// * `divisor` - The modulus
///
/// # Returns
///
/// `dividend mod divisor`, in `[0, divisor)` for a positive divisor
#[inline(always)]
pub fn pmod<T>(dividend: T, divisor: T) -> T
where T: Copy + Add<Output = T> + Rem<Output = T> {
    ((dividend % divisor) + divisor) % divisor
}

/// Clamps a value into `[min, max]`
///
/// Unlike `Ord::clamp` this never panics: when the bounds are inverted
/// `min` wins.
#[inline(always)]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Checks whether a value lies between two bounds given in either order
///
/// # Arguments
///
/// * `value` - The value to test
/// * `bound1`, `bound2` - The bounds, in any order
/// * `include_endpoints` - Whether a value equal to a bound counts as between
#[inline(always)]
pub fn is_between<T: PartialOrd>(value: T, bound1: T, bound2: T, include_endpoints: bool) -> bool {
    let (low, high) = if bound1 > bound2 { (bound2, bound1) } else { (bound1, bound2) };

    if include_endpoints {
        value >= low && value <= high
    } else {
        value > low && value < high
    }
}

/// Floating point comparison with an absolute tolerance
#[inline(always)]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Fills every cell of a grid of rows with `value`
pub fn fill_2d<T: Clone, R: AsMut<[T]>>(rows: &mut [R], value: T) {
    for row in rows.iter_mut() {
        row.as_mut().fill(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pmod_integers() {
        assert_eq!(pmod(7, 3), 1);
        assert_eq!(pmod(-1, 3), 2);
        assert_eq!(pmod(-3, 3), 0);
        assert_eq!(pmod(-7_i64, 5), 3);
    }

    #[test]
    fn pmod_floats() {
        assert!(approx_eq(pmod(-1.0, 3.0), 2.0, 1e-12));
        assert!(approx_eq(pmod(7.5, 2.0), 1.5, 1e-12));
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        // inverted bounds do not panic
        assert_eq!(clamp(5, 10, 0), 10);
    }

    #[test]
    fn between_either_order() {
        assert!(is_between(1.5, 1.0, 2.0, false));
        assert!(is_between(1.5, 2.0, 1.0, false));
        assert!(!is_between(2.0, 1.0, 2.0, false));
        assert!(is_between(2.0, 2.0, 1.0, true));
        assert!(!is_between(3.0, 1.0, 2.0, true));
    }

    #[test]
    fn approx() {
        assert!(approx_eq(0.1 + 0.2, 0.3, 1e-9));
        assert!(!approx_eq(1.0, 1.1, 0.05));
    }

    #[test]
    fn fill_grid() {
        let mut grid = [[0u8; 3]; 2];
        fill_2d(&mut grid, 7);
        assert_eq!(grid, [[7; 3]; 2]);

        let mut rows = vec![vec!['a'; 2], vec!['b'; 4]];
        fill_2d(&mut rows, 'z');
        assert_eq!(rows, vec![vec!['z'; 2], vec!['z'; 4]]);
    }
}
