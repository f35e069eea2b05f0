//! Float comparison helpers
//!
//! Sensor math compares against `f32::EPSILON` rather than exact zero so that
//! values left over from float round-off behave like the zero they represent.

/// Epsilon-aware predicates for `f32`
pub trait FloatExt: Sized {
    /// `|self| < EPSILON`
    fn is_zero(&self) -> bool;

    /// `self >= EPSILON`. False for NaN.
    fn is_positive(&self) -> bool;

    /// Clamp into `[low, high]`, propagating NaN from any argument.
    fn constrain(&self, low: Self, high: Self) -> Self;
}

impl FloatExt for f32 {
    fn is_zero(&self) -> bool {
        libm::fabsf(*self) < f32::EPSILON
    }

    fn is_positive(&self) -> bool {
        *self >= f32::EPSILON
    }

    fn constrain(&self, low: Self, high: Self) -> Self {
        if self.is_nan() || low.is_nan() || high.is_nan() {
            f32::NAN
        } else if *self > high {
            high
        } else if *self < low {
            low
        } else {
            *self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FloatExt;

    #[test]
    fn zero_within_epsilon() {
        assert!(0.0f32.is_zero());
        assert!((-0.0f32).is_zero());
        assert!((f32::EPSILON / 2.0).is_zero());
        assert!(!1e-3f32.is_zero());
        assert!(!f32::NAN.is_zero());
    }

    #[test]
    fn positive_excludes_round_off() {
        assert!(15.0f32.is_positive());
        assert!(!0.0f32.is_positive());
        assert!(!(f32::EPSILON / 2.0).is_positive());
        assert!(!(-1.0f32).is_positive());
        assert!(!f32::NAN.is_positive());
    }

    #[test]
    fn constrain_works() {
        let x = 1.11f32;
        assert_eq!(x.constrain(4.0, 6.0), 4.0);
        assert_eq!(x.constrain(0.0, 2.0), 1.11);
        assert_eq!(x.constrain(0.0, 1.1), 1.1);
        assert!(x.constrain(0.0, f32::NAN).is_nan());
        assert!(f32::NAN.constrain(1.0, 2.0).is_nan());
    }
}
