//! Radar chart geometry.
//!
//! N categories are laid out on N evenly spaced axes starting at 12 o'clock
//! and going clockwise (screen coordinates, y down). Polygons are returned as
//! point lists; the closing edge from the last point back to the first is
//! implicit.

use ascend_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Center, radius and orientation of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    /// Chart center
    pub center: Point,
    /// Radius of the outermost ring
    pub radius: f32,
    /// Angle of the first axis in radians
    pub start_angle: f32,
}

impl RadarGeometry {
    /// Default space reserved around the chart for category labels.
    pub const DEFAULT_LABEL_MARGIN: f32 = 50.0;

    /// Create a chart with the first axis pointing up.
    #[must_use]
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            start_angle: -FRAC_PI_2,
        }
    }

    /// Largest chart centered in `bounds` leaving `label_margin` for labels.
    #[must_use]
    pub fn fit(bounds: Rect, label_margin: f32) -> Self {
        let radius = bounds.width.min(bounds.height) / 2.0 - label_margin;
        Self::new(bounds.center(), radius)
    }

    /// Override the first axis angle.
    #[must_use]
    pub const fn start_angle(mut self, angle: f32) -> Self {
        self.start_angle = angle;
        self
    }

    /// Angle of axis `index` out of `count`.
    #[must_use]
    pub fn angle(&self, index: usize, count: usize) -> f32 {
        if count == 0 {
            return self.start_angle;
        }
        (TAU / count as f32).mul_add(index as f32, self.start_angle)
    }

    /// Point on axis `index` at `fraction` of the radius.
    #[must_use]
    pub fn point(&self, index: usize, count: usize, fraction: f32) -> Point {
        self.center
            .polar_offset(self.angle(index, count), self.radius * fraction)
    }

    /// Vertices of the data polygon; values are clamped to `[0, 1]`.
    #[must_use]
    pub fn data_polygon(&self, values: &[f32]) -> Vec<Point> {
        let count = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| self.point(i, count, unit_fraction(v)))
            .collect()
    }

    /// Grid ring `level` out of `levels`, as a regular polygon with `count`
    /// vertices.
    #[must_use]
    pub fn ring(&self, count: usize, level: usize, levels: usize) -> Vec<Point> {
        let fraction = if levels == 0 {
            0.0
        } else {
            unit_fraction(level as f32 / levels as f32)
        };
        (0..count).map(|i| self.point(i, count, fraction)).collect()
    }

    /// All grid rings from the innermost to the outer edge.
    #[must_use]
    pub fn rings(&self, count: usize, levels: usize) -> Vec<Vec<Point>> {
        (1..=levels).map(|level| self.ring(count, level, levels)).collect()
    }

    /// Axis segments from the center to the outer ring.
    #[must_use]
    pub fn spokes(&self, count: usize) -> Vec<(Point, Point)> {
        (0..count)
            .map(|i| (self.center, self.point(i, count, 1.0)))
            .collect()
    }

    /// Label anchors placed `offset` beyond the outer ring.
    #[must_use]
    pub fn label_points(&self, count: usize, offset: f32) -> Vec<Point> {
        (0..count)
            .map(|i| {
                self.center
                    .polar_offset(self.angle(i, count), self.radius + offset)
            })
            .collect()
    }
}

fn unit_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Point, b: Point) -> bool {
        a.distance(&b) < EPS
    }

    fn chart() -> RadarGeometry {
        RadarGeometry::new(Point::new(100.0, 100.0), 50.0)
    }

    #[test]
    fn test_first_axis_points_up() {
        let p = chart().point(0, 6, 1.0);
        assert!(close(p, Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_axes_go_clockwise() {
        // Second of four axes points right in screen coordinates
        let p = chart().point(1, 4, 1.0);
        assert!(close(p, Point::new(150.0, 100.0)));
    }

    #[test]
    fn test_data_polygon_one_point_per_value() {
        let values = [0.75, 0.6, 0.85, 0.5, 0.7, 0.65];
        let polygon = chart().data_polygon(&values);
        assert_eq!(polygon.len(), 6);
        for (p, v) in polygon.iter().zip(values) {
            assert!((p.distance(&chart().center) - 50.0 * v).abs() < EPS);
        }
    }

    #[test]
    fn test_data_polygon_clamps_values() {
        let polygon = chart().data_polygon(&[2.0, -1.0, f32::NAN]);
        assert!((polygon[0].distance(&chart().center) - 50.0).abs() < EPS);
        assert!(close(polygon[1], chart().center));
        assert!(close(polygon[2], chart().center));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(chart().data_polygon(&[]).is_empty());
        assert!(chart().ring(0, 1, 3).is_empty());
        assert!(chart().spokes(0).is_empty());
        assert!(chart().label_points(0, 30.0).is_empty());
        assert!(chart().rings(6, 0).is_empty());
    }

    #[test]
    fn test_rings_scale_by_level() {
        let rings = chart().rings(6, 3);
        assert_eq!(rings.len(), 3);
        let inner = rings[0][0].distance(&chart().center);
        let outer = rings[2][0].distance(&chart().center);
        assert!((inner - 50.0 / 3.0).abs() < EPS);
        assert!((outer - 50.0).abs() < EPS);
    }

    #[test]
    fn test_ring_with_zero_levels_collapses() {
        let ring = chart().ring(4, 1, 0);
        assert!(ring.iter().all(|p| close(*p, chart().center)));
    }

    #[test]
    fn test_spokes_end_on_outer_ring() {
        let spokes = chart().spokes(5);
        assert_eq!(spokes.len(), 5);
        for (start, end) in spokes {
            assert_eq!(start, chart().center);
            assert!((end.distance(&start) - 50.0).abs() < EPS);
        }
    }

    #[test]
    fn test_label_points_beyond_radius() {
        let labels = chart().label_points(6, 30.0);
        assert!(close(labels[0], Point::new(100.0, 20.0)));
    }

    #[test]
    fn test_fit_reserves_label_margin() {
        let geometry = RadarGeometry::fit(Rect::new(0.0, 0.0, 300.0, 250.0), 50.0);
        assert_eq!(geometry.center, Point::new(150.0, 125.0));
        assert_eq!(geometry.radius, 75.0);
    }

    #[test]
    fn test_fit_small_bounds_zero_radius() {
        let geometry = RadarGeometry::fit(Rect::new(0.0, 0.0, 60.0, 60.0), 50.0);
        assert_eq!(geometry.radius, 0.0);
    }

    #[test]
    fn test_custom_start_angle() {
        let geometry = chart().start_angle(0.0);
        assert!(close(geometry.point(0, 3, 1.0), Point::new(150.0, 100.0)));
    }
}
