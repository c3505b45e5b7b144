// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider bounds and step quantization.

/// Fractional digits kept after snapping.
const SNAP_PRECISION: f64 = 1e5;

/// Inclusive value bounds and step size shared by every handle of a slider.
///
/// No validation is performed: `min >= max` or a non-positive `step` are
/// accepted and degrade to well-defined output instead of failing.
/// See [`SliderConfig::snap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Quantization unit.
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl SliderConfig {
    /// Create a configuration from bounds and step.
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Width of the value range, `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Quantize `value` to the nearest step on the lattice anchored at `min`,
    /// then clamp to `[min, max]`.
    ///
    /// Exact ties round away from zero. The result is rounded to five fractional
    /// digits to drop floating-point drift.
    ///
    /// A non-positive (or NaN) `step` and a NaN `value` both yield `min`.
    ///
    /// ```
    /// use understory_slider::SliderConfig;
    ///
    /// let cfg = SliderConfig::new(0.0, 10.0, 5.0);
    /// assert_eq!(cfg.snap(7.0), 5.0);
    /// assert_eq!(cfg.snap(8.0), 10.0);
    /// assert_eq!(cfg.snap(42.0), 10.0);
    /// ```
    pub fn snap(&self, value: f64) -> f64 {
        let step = self.step;
        if step.is_nan() || step <= 0.0 || value.is_nan() {
            return self.min;
        }
        if value.is_infinite() {
            return if value > 0.0 { self.max } else { self.min };
        }

        let offset = value - self.min;
        let mut rem = offset % step;
        if rem < 0.0 {
            rem += step;
        }
        // Lattice points on either side of `value`.
        let below = offset - rem;
        let above = below + step;
        let twice = rem * 2.0;
        let snapped = if twice < step {
            below
        } else if twice > step || value >= 0.0 {
            above
        } else {
            below
        };
        let snapped = round_fixed(snapped + self.min);

        if snapped > self.max {
            self.max
        } else if snapped < self.min {
            self.min
        } else {
            snapped
        }
    }
}

/// Round half away from zero to five fractional digits.
fn round_fixed(v: f64) -> f64 {
    let scaled = v * SNAP_PRECISION;
    // Past 2^52 every f64 is already integral; also keeps the i64 cast in range.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return v;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "magnitude is bounded by 2^52 above"
    )]
    let trunc = scaled as i64 as f64;
    let frac = scaled - trunc;
    let rounded = if frac >= 0.5 {
        trunc + 1.0
    } else if frac <= -0.5 {
        trunc - 1.0
    } else {
        trunc
    };
    rounded / SNAP_PRECISION
}
