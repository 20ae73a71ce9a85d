use std::fmt::Debug;

/// Numeric type a [`ProgressAllocator`](crate::ProgressAllocator) can store.
///
/// Arithmetic never panics: integer steps saturate, and invalid input
/// (negative, NaN) is normalised to zero by [`non_negative`](Self::non_negative).
pub trait ProgressValue: Copy + PartialOrd + Debug + Default {
    const ZERO: Self;

    /// The input with negatives and NaN replaced by zero.
    fn non_negative(self) -> Self;

    fn plus(self, other: Self) -> Self;

    fn minus(self, other: Self) -> Self;

    /// Next smaller representable value; zero stays zero.
    fn step_down(self) -> Self;

    /// `self / capacity` as a track fraction; `0` for an empty capacity.
    fn ratio(self, capacity: Self) -> f32;

    /// Inverse of [`ratio`](Self::ratio). Whole-step values round down.
    fn from_ratio(ratio: f32, capacity: Self) -> Self;
}

impl ProgressValue for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn non_negative(self) -> Self {
        // `max` returns the non-NaN operand.
        self.max(0.0)
    }

    #[inline]
    fn plus(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn minus(self, other: Self) -> Self {
        self - other
    }

    fn step_down(self) -> Self {
        if self > 0.0 && self.is_finite() {
            // Positive finite floats are ordered by their bit pattern.
            f32::from_bits(self.to_bits() - 1)
        } else {
            self.non_negative()
        }
    }

    fn ratio(self, capacity: Self) -> f32 {
        if capacity > 0.0 && capacity.is_finite() {
            self / capacity
        } else {
            0.0
        }
    }

    fn from_ratio(ratio: f32, capacity: Self) -> Self {
        ratio * capacity
    }
}

impl ProgressValue for i32 {
    const ZERO: Self = 0;

    #[inline]
    fn non_negative(self) -> Self {
        self.max(0)
    }

    #[inline]
    fn plus(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    #[inline]
    fn minus(self, other: Self) -> Self {
        self.saturating_sub(other)
    }

    fn step_down(self) -> Self {
        self.saturating_sub(1).max(0)
    }

    fn ratio(self, capacity: Self) -> f32 {
        if capacity > 0 {
            self as f32 / capacity as f32
        } else {
            0.0
        }
    }

    /// Rounds down to a whole step; `as` saturates out-of-range floats and maps NaN to 0.
    fn from_ratio(ratio: f32, capacity: Self) -> Self {
        (ratio * capacity as f32).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_fraction_becomes_zero() {
        assert_eq!(f32::NAN.non_negative(), 0.0);
        assert_eq!((-3.0f32).non_negative(), 0.0);
    }

    #[test]
    fn steps_saturate() {
        assert_eq!(i32::MAX.plus(1), i32::MAX);
        assert_eq!(i32::MIN.minus(1), i32::MIN);
    }

    #[test]
    fn step_down_moves_one_unit() {
        assert!(1.0f32.step_down() < 1.0);
        assert_eq!(1.0f32.step_down().to_bits(), 1.0f32.to_bits() - 1);
        assert_eq!(0.0f32.step_down(), 0.0);
        assert_eq!(5i32.step_down(), 4);
        assert_eq!(0i32.step_down(), 0);
    }

    #[test]
    fn steps_round_down() {
        assert_eq!(i32::from_ratio(0.55, 10), 5);
        assert_eq!(i32::from_ratio(0.99, 10), 9);
        assert_eq!(i32::from_ratio(f32::NAN, 10), 0);
    }

    #[test]
    fn ratio_of_empty_capacity_is_zero() {
        assert_eq!(3i32.ratio(0), 0.0);
        assert_eq!(0.5f32.ratio(0.0), 0.0);
        assert_eq!(5i32.ratio(20), 0.25);
    }
}
