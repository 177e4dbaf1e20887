use serde::{Deserialize, Serialize};
use std::ops::{Add, Div};

/// A point on the complex plane, two `f64` components passed by value.
///
/// Used both for the evaluated point `c` and for per-variant reference
/// centers. The iteration loop keeps bare `f64` pairs and wraps them only
/// for the bailout test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

/// Scalar division: `Complex / f64`. Component-wise, so `pos / zoom`
/// rounds exactly like the two scalar divisions it replaces.
impl Div<f64> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn addition() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(3.0, -4.0);
        assert!(approx_eq(sum.re, 4.0));
        assert!(approx_eq(sum.im, -2.0));
    }

    #[test]
    fn scalar_division_is_component_wise() {
        let d = Complex::new(8.0, -12.0) / 4.0;
        assert_eq!(d, Complex::new(2.0, -3.0));
    }

    #[test]
    fn norm_sq() {
        assert!(approx_eq(Complex::new(3.0, 4.0).norm_sq(), 25.0));
    }
}
