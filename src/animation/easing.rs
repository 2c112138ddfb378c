//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by focus/return tweens. All functions
//! are cheap closed-form expressions suitable for per-frame evaluation.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponential ease-in: 2^(10(t-1)), pinned to 0 at t=0.
    ExponentialIn,
    /// Exponential ease-out: 1 - 2^(-10t), pinned to 1 at t=1.
    ExponentialOut,
    /// Exponential ease-in-out: in for the first half, out for the
    /// second, meeting at (0.5, 0.5).
    ExponentialInOut,
}

impl EasingFunction {
    /// Default easing for focus/return tweens: exponential in/out.
    pub const DEFAULT: EasingFunction = EasingFunction::ExponentialInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::ExponentialIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            EasingFunction::ExponentialOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            EasingFunction::ExponentialInOut => {
                if t == 0.0 {
                    return 0.0;
                }
                if t == 1.0 {
                    return 1.0;
                }
                if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_exponential_in_out_endpoints() {
        let ease = EasingFunction::ExponentialInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
        // The two halves meet exactly in the middle.
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_exponential_in_out_shape() {
        // Slow start, slow end: early progress lags linear, late progress
        // leads it.
        let ease = EasingFunction::ExponentialInOut;
        assert!(ease.evaluate(0.25) < 0.25);
        assert!(ease.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_exponential_in_out_monotonic() {
        let ease = EasingFunction::ExponentialInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "not monotonic at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let ease = EasingFunction::ExponentialInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert_eq!(ease.evaluate(1.5), 1.0);

        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-1.0), 0.0);
        assert_eq!(linear.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25); // 0.5² = 0.25
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_exponential_in_pinned_at_zero() {
        // 2^(10(t-1)) is 2^-10 ≈ 0.001 at t=0; the curve is pinned to an
        // exact 0 there so animations start from their true origin.
        let ease = EasingFunction::ExponentialIn;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_exponential_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::DEFAULT);
        assert_eq!(
            EasingFunction::default(),
            EasingFunction::ExponentialInOut
        );
    }
}
