use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Fixed-point scalar with 6 decimal places of precision.
///
/// Multipliers, agent weights, and aggregate factors all flow through this
/// type so that aggregation and simulation are bit-identical across
/// platforms. Products and quotients widen to `i128` internally.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Scalar(i64);

impl Scalar {
    pub const SCALE: i64 = 1_000_000;

    pub fn from_f32(value: f32) -> Self {
        Self((value * Self::SCALE as f32).round() as i64)
    }

    pub fn from_u32(value: u32) -> Self {
        Self((value as i64) * Self::SCALE)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn one() -> Self {
        Self(Self::SCALE)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Truncate toward zero to whole units.
    ///
    /// Simulated readings are defined as `floor(baseline * factor)` for
    /// non-negative inputs, so truncation is the contract here.
    pub const fn trunc_units(self) -> i64 {
        self.0 / Self::SCALE
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((self.0 as i128 * rhs.0 as i128) / Self::SCALE as i128) as i64)
    }
}

impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(((self.0 as i128 * Self::SCALE as i128) / rhs.0 as i128) as i64)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f32())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_identity_multiplication() {
        let factor = Scalar::one();
        let value = Scalar::from_u32(347);
        assert_eq!((value * factor).trunc_units(), 347);
    }

    #[test]
    fn truncation_toward_zero() {
        // 200 * 1.7 = 340 exactly; 7 * 0.5 = 3.5 truncates to 3.
        let value = Scalar::from_u32(200) * Scalar::from_f32(1.7);
        assert_eq!(value.trunc_units(), 340);
        let value = Scalar::from_u32(7) * Scalar::from_f32(0.5);
        assert_eq!(value.trunc_units(), 3);
    }

    #[test]
    fn large_products_do_not_overflow() {
        let big = Scalar::from_u32(4_000_000);
        let result = big * Scalar::from_f32(3.0);
        assert_eq!(result.trunc_units(), 12_000_000);
    }

    #[test]
    fn division_normalizes() {
        let num = Scalar::from_f32(1.7);
        let den = Scalar::one();
        assert_eq!(num / den, Scalar::from_f32(1.7));
    }
}
