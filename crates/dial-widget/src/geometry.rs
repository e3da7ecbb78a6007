use std::f32::consts::PI;

use dial_core::{Size, Vec2};

use crate::DialPosition;

/// Angle of `DialPosition::Off`, above-left of center.
pub const START_ANGLE: f32 = PI * (9.0 / 8.0);
/// Angular spacing between consecutive positions.
pub const ANGLE_STEP: f32 = PI / 4.0;

/// Added to the dial radius for the indicator dot (pulls it inside the edge).
pub const INDICATOR_RADIUS_OFFSET: f32 = -35.0;
/// Added to the dial radius for the labels (pushes them outside the edge).
pub const LABEL_RADIUS_OFFSET: f32 = 30.0;
/// Indicator dot radius as a fraction of the dial radius.
pub const INDICATOR_SIZE_RATIO: f32 = 1.0 / 12.0;
/// Dial radius as a fraction of half the smaller side.
pub const RADIUS_FILL_RATIO: f32 = 0.8;

pub fn angle_for_position(position: DialPosition) -> f32 {
    START_ANGLE + position.ordinal() as f32 * ANGLE_STEP
}

pub fn point_for_position(position: DialPosition, radius: f32, center: Vec2) -> Vec2 {
    center.polar_offset(radius, angle_for_position(position))
}

pub fn dial_radius(size: Size) -> f32 {
    RADIUS_FILL_RATIO * size.min_side() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn points_lie_on_the_circle_and_are_distinct() {
        let center = Vec2::new(100.0, 60.0);
        let r = 42.0;
        let pts: Vec<_> = DialPosition::ALL
            .iter()
            .map(|p| point_for_position(*p, r, center))
            .collect();
        for p in &pts {
            assert!((p.distance(center) - r).abs() < EPS);
        }
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(pts[i].distance(pts[j]) > 1.0, "{i} and {j} coincide");
            }
        }
    }

    #[test]
    fn placement_is_periodic_in_ordinal() {
        let center = Vec2::new(0.0, 0.0);
        for i in 0..4 {
            let a = point_for_position(DialPosition::from_ordinal(i), 10.0, center);
            let b = point_for_position(DialPosition::from_ordinal(i + 4), 10.0, center);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn off_sits_above_left_of_center() {
        let p = point_for_position(DialPosition::Off, 10.0, Vec2::default());
        assert!(p.x < 0.0 && p.y < 0.0);
        let expected = Vec2::new(10.0 * START_ANGLE.cos(), 10.0 * START_ANGLE.sin());
        assert!(p.distance(expected) < EPS);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = Vec2::new(5.0, 5.0);
        for p in DialPosition::ALL {
            assert!(point_for_position(p, 0.0, center).distance(center) < EPS);
        }
    }

    #[test]
    fn radius_uses_smaller_side() {
        assert!((dial_radius(Size::new(200.0, 200.0)) - 80.0).abs() < EPS);
        assert!((dial_radius(Size::new(300.0, 100.0)) - 40.0).abs() < EPS);
        assert_eq!(dial_radius(Size::new(0.0, 500.0)), 0.0);
    }
}
