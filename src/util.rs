use vek::Vec2;

/// Point reached by travelling `distance` from `origin` along `angle`,
/// in radians from the positive x axis.
pub fn offset(origin: Vec2<f32>, distance: f32, angle: f32) -> Vec2<f32> {
    origin + Vec2::new(angle.cos(), angle.sin()) * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn offset_along_x_axis() {
        assert_eq!(
            offset(Vec2::new(640.0, 360.0), 100.0, 0.0),
            Vec2::new(740.0, 360.0)
        );
    }

    #[test]
    fn offset_quarter_turn() {
        let p = offset(Vec2::zero(), 1.0, PI / 2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn offset_zero_distance() {
        let origin = Vec2::new(3.0, -7.5);
        assert_eq!(offset(origin, 0.0, 1.234), origin);
    }
}
