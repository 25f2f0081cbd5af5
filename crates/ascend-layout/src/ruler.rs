//! Ruler slider: maps horizontal drags on a tick strip to values.
//!
//! The strip is drawn with one tick per `step`, `pixels_per_unit * step`
//! pixels apart, and scrolls so that the current value sits under the center
//! of the viewport.

use serde::{Deserialize, Serialize};

/// Value mapping for a ruler-style slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerScale {
    min: f64,
    max: f64,
    pixels_per_unit: f64,
    step: f64,
    inverted: bool,
}

/// A tick mark on the ruler strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerTick {
    /// Value at this tick
    pub value: f64,
    /// Horizontal position relative to the start of the strip
    pub x: f64,
    /// Whether the tick falls on a whole number
    pub major: bool,
}

impl Default for RulerScale {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl RulerScale {
    /// Default resolution of one tick.
    pub const DEFAULT_STEP: f64 = 0.1;
    /// Default distance between ticks in pixels.
    pub const DEFAULT_TICK_SPACING: f64 = 10.0;

    /// Create a scale over `[min, max]` with ticks every 0.1 units, 10 px apart.
    ///
    /// Bounds given in reverse order are swapped; non-finite bounds become
    /// zero.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() { max } else { 0.0 };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            pixels_per_unit: Self::DEFAULT_TICK_SPACING / Self::DEFAULT_STEP,
            step: Self::DEFAULT_STEP,
            inverted: false,
        }
    }

    /// Set how many pixels of drag correspond to one unit of value.
    ///
    /// Non-positive or non-finite values are ignored.
    #[must_use]
    pub fn pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
            self.pixels_per_unit = pixels_per_unit;
        }
        self
    }

    /// Set the quantization step; `0` makes the ruler continuous.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = if step.is_finite() { step.abs() } else { 0.0 };
        self
    }

    /// Dragging right decreases the value, as when the strip moves under a
    /// fixed center marker.
    #[must_use]
    pub const fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Quantization step (0 = continuous).
    #[must_use]
    pub const fn get_step(&self) -> f64 {
        self.step
    }

    /// Pixels per unit of value.
    #[must_use]
    pub const fn get_pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Clamp a value into range; NaN maps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Round to the nearest step, relative to zero.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        }
    }

    /// Value after dragging `delta_px` pixels from `value`.
    ///
    /// `clamp(round_to_step(value + delta / pixels_per_unit), min, max)`
    #[must_use]
    pub fn apply_drag(&self, value: f64, delta_px: f64) -> f64 {
        let delta = if delta_px.is_finite() { delta_px } else { 0.0 };
        let direction = if self.inverted { -1.0_f64 } else { 1.0 };
        let moved = direction.mul_add(delta / self.pixels_per_unit, value);
        self.clamp(self.quantize(moved))
    }

    /// Horizontal position of `value` on the strip.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) * self.pixels_per_unit
    }

    /// Offset of the strip so that `value` appears at the viewport center.
    #[must_use]
    pub fn content_offset(&self, value: f64, viewport_width: f64) -> f64 {
        viewport_width.max(0.0) / 2.0 - self.position_of(value)
    }

    /// Number of tick intervals across the range.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        if self.step > 0.0 {
            ((self.max - self.min) / self.step).round() as usize
        } else {
            0
        }
    }

    /// Tick marks from `min` to `max` inclusive, one per step.
    ///
    /// A continuous ruler has no ticks.
    pub fn ticks(&self) -> impl Iterator<Item = RulerTick> + '_ {
        let count = if self.step > 0.0 {
            self.tick_count().saturating_add(1)
        } else {
            0
        };
        (0..count).map(move |i| {
            let value = self.quantize((i as f64).mul_add(self.step, self.min));
            RulerTick {
                value,
                x: self.position_of(value),
                major: (value - value.round()).abs() < self.step / 2.0,
            }
        })
    }

    /// Whether `tick` is the one closest to `value`.
    #[must_use]
    pub fn is_current(&self, tick: &RulerTick, value: f64) -> bool {
        (tick.value - value).abs() < self.step / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_resolution() {
        let scale = RulerScale::new(66.0, 330.0);
        assert_eq!(scale.get_step(), 0.1);
        assert!((scale.get_pixels_per_unit() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_nan_bounds_do_not_panic() {
        let scale = RulerScale::new(f64::NAN, 5.0);
        assert_eq!(scale.min(), 0.0);
        assert!((scale.apply_drag(2.0, 100.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_reversed_bounds_swapped() {
        let scale = RulerScale::new(150.0, 30.0);
        assert_eq!(scale.min(), 30.0);
        assert_eq!(scale.max(), 150.0);
    }

    #[test]
    fn test_drag_right_increases() {
        let scale = RulerScale::new(66.0, 330.0);
        // 27 px at 100 px/unit = 0.27, rounded to 0.3
        let v = scale.apply_drag(148.9, 27.0);
        assert!((v - 149.2).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn test_drag_inverted() {
        let scale = RulerScale::new(66.0, 330.0).inverted(true);
        let v = scale.apply_drag(148.9, 30.0);
        assert!((v - 148.6).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let scale = RulerScale::new(30.0, 150.0);
        assert_eq!(scale.apply_drag(149.0, 10_000.0), 150.0);
        assert_eq!(scale.apply_drag(31.0, -10_000.0), 30.0);
    }

    #[test]
    fn test_continuous_drag() {
        let scale = RulerScale::new(0.0, 10.0).step(0.0).pixels_per_unit(8.0);
        assert!((scale.apply_drag(1.0, 3.0) - 1.375).abs() < EPS);
        assert_eq!(scale.ticks().count(), 0);
    }

    #[test]
    fn test_integer_step() {
        let scale = RulerScale::new(0.0, 10.0).step(1.0).pixels_per_unit(20.0);
        assert_eq!(scale.apply_drag(5.0, 29.0), 6.0);
        assert_eq!(scale.apply_drag(5.0, 31.0), 7.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        let scale = RulerScale::new(10.0, 20.0).pixels_per_unit(f64::NAN).step(f64::INFINITY);
        assert!((scale.get_pixels_per_unit() - 100.0).abs() < EPS);
        assert_eq!(scale.get_step(), 0.0);
        assert_eq!(scale.apply_drag(f64::NAN, 0.0), 10.0);
        assert_eq!(scale.apply_drag(15.0, f64::INFINITY), 15.0);
    }

    #[test]
    fn test_infinite_values_clamp_to_nearest_bound() {
        let scale = RulerScale::new(10.0, 20.0);
        assert_eq!(scale.clamp(f64::INFINITY), 20.0);
        assert_eq!(scale.clamp(f64::NEG_INFINITY), 10.0);
        assert_eq!(scale.apply_drag(f64::INFINITY, 0.0), 20.0);
        assert_eq!(scale.apply_drag(f64::NEG_INFINITY, 50.0), 10.0);
    }

    #[test]
    fn test_drag_from_out_of_range_value() {
        let scale = RulerScale::new(66.0, 330.0);
        // 500 - 1 = 499 is still above the range
        assert_eq!(scale.apply_drag(500.0, -100.0), 330.0);
        // 10 + 100 = 110 lands inside it
        assert!((scale.apply_drag(10.0, 10_000.0) - 110.0).abs() < 1e-6);
    }

    #[test]
    fn test_infinite_bounds_become_zero() {
        let scale = RulerScale::new(0.0, f64::INFINITY);
        assert_eq!(scale.max(), 0.0);
        assert_eq!(scale.ticks().take(3).count(), 1);

        let scale = RulerScale::new(f64::NEG_INFINITY, 5.0);
        assert_eq!(scale.min(), 0.0);
        assert_eq!(scale.max(), 5.0);
    }

    #[test]
    fn test_huge_range_ticks_do_not_overflow() {
        let scale = RulerScale::new(-f64::MAX, f64::MAX);
        assert_eq!(scale.tick_count(), usize::MAX);
        assert_eq!(scale.ticks().take(3).count(), 3);
    }

    #[test]
    fn test_content_offset_centers_value() {
        let scale = RulerScale::new(30.0, 150.0);
        // 70 is 40 units (4000 px) into the strip
        assert!((scale.content_offset(70.0, 300.0) - (150.0 - 4000.0)).abs() < 1e-6);
        assert!((scale.content_offset(30.0, 300.0) - 150.0).abs() < EPS);
    }

    #[test]
    fn test_ticks_cover_range_with_majors_on_whole_numbers() {
        let scale = RulerScale::new(1.0, 3.0);
        let ticks: Vec<RulerTick> = scale.ticks().collect();

        assert_eq!(scale.tick_count(), 20);
        assert_eq!(ticks.len(), 21);
        assert!((ticks[0].value - 1.0).abs() < EPS);
        assert!((ticks[20].value - 3.0).abs() < 1e-6);
        assert!((ticks[1].x - 10.0).abs() < 1e-6);

        let majors: Vec<f64> = ticks.iter().filter(|t| t.major).map(|t| t.value).collect();
        assert_eq!(majors.len(), 3);
    }

    #[test]
    fn test_is_current() {
        let scale = RulerScale::new(0.0, 2.0);
        let ticks: Vec<RulerTick> = scale.ticks().collect();
        let current: Vec<&RulerTick> = ticks.iter().filter(|t| scale.is_current(t, 1.2)).collect();
        assert_eq!(current.len(), 1);
        assert!((current[0].value - 1.2).abs() < 1e-9);
    }
}
