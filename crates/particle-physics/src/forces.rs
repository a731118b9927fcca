//! Force and opacity calculations for a single particle
//!
//! Everything here is a pure function of positions and constants so the
//! simulation can be stepped and tested without a window.

use crate::constants::OFFSCREEN_THRESHOLD;
use glam::Vec2;

/// Whether a pointer position refers to a cursor inside the viewport
#[inline]
pub fn pointer_on_screen(pointer: Vec2) -> bool {
    pointer.x > OFFSCREEN_THRESHOLD
}

/// Linear falloff of the pointer push: 1 at the pointer, 0 at `radius`
#[inline]
pub fn repulsion_factor(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        return 0.0;
    }
    (radius - distance) / radius
}

/// Velocity impulse pushing a particle away from the pointer
///
/// Zero when the pointer is off-screen or at least `radius` away. When the
/// pointer sits exactly on the particle the push points along -X.
pub fn repulsion_impulse(position: Vec2, pointer: Vec2, radius: f32, push_force: f32) -> Vec2 {
    if !pointer_on_screen(pointer) {
        return Vec2::ZERO;
    }

    let to_pointer = pointer - position;
    let distance = to_pointer.length();
    if distance >= radius {
        return Vec2::ZERO;
    }

    let direction = if distance > 0.0 {
        to_pointer / distance
    } else {
        Vec2::X
    };

    -direction * repulsion_factor(distance, radius) * push_force
}

/// Hooke's law pull back toward the anchor
/// F = k * (origin - position)
#[inline]
pub fn spring_force(position: Vec2, origin: Vec2, stiffness: f32) -> Vec2 {
    (origin - position) * stiffness
}

/// Opacity for a given displacement from the anchor
///
/// Rises linearly from `baseline` at rest to 1.0 at `saturation`, clamped above.
pub fn opacity_for_displacement(displacement: f32, baseline: f32, saturation: f32) -> f32 {
    let activation = if saturation > 0.0 {
        (displacement / saturation).clamp(0.0, 1.0)
    } else {
        1.0
    };
    baseline + (1.0 - baseline) * activation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_repulsion_example() {
        let impulse = repulsion_impulse(Vec2::ZERO, Vec2::new(60.0, 0.0), 120.0, PUSH_FORCE);
        assert_eq!(repulsion_factor(60.0, 120.0), 0.5);
        assert!((impulse - Vec2::new(-2.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_repulsion_zero_at_radius() {
        let impulse = repulsion_impulse(
            Vec2::ZERO,
            Vec2::new(0.0, REPULSION_RADIUS),
            REPULSION_RADIUS,
            PUSH_FORCE,
        );
        assert_eq!(impulse, Vec2::ZERO);

        let beyond = repulsion_impulse(
            Vec2::ZERO,
            Vec2::new(0.0, REPULSION_RADIUS + 1.0),
            REPULSION_RADIUS,
            PUSH_FORCE,
        );
        assert_eq!(beyond, Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_grows_as_pointer_approaches() {
        let position = Vec2::new(400.0, 300.0);
        let mut previous = 0.0;
        for step in 1..120 {
            let distance = REPULSION_RADIUS - step as f32;
            let pointer = position + Vec2::new(distance, 0.0);
            let magnitude =
                repulsion_impulse(position, pointer, REPULSION_RADIUS, PUSH_FORCE).length();
            assert!(magnitude > previous, "distance {distance}");
            previous = magnitude;
        }
    }

    #[test]
    fn test_repulsion_points_away_from_pointer() {
        let position = Vec2::new(100.0, 100.0);
        let pointer = Vec2::new(130.0, 140.0);
        let impulse = repulsion_impulse(position, pointer, REPULSION_RADIUS, PUSH_FORCE);
        assert!(impulse.dot(pointer - position) < 0.0);
    }

    #[test]
    fn test_repulsion_coincident_pointer_pushes_negative_x() {
        let position = Vec2::new(50.0, 50.0);
        let impulse = repulsion_impulse(position, position, REPULSION_RADIUS, PUSH_FORCE);
        assert_eq!(impulse, Vec2::new(-PUSH_FORCE, 0.0));
    }

    #[test]
    fn test_sentinel_pointer_has_no_effect() {
        let sentinel = Vec2::from_array(POINTER_SENTINEL);
        assert!(!pointer_on_screen(sentinel));
        // Even a particle placed right next to the sentinel is left alone.
        let impulse = repulsion_impulse(sentinel + Vec2::X, sentinel, REPULSION_RADIUS, PUSH_FORCE);
        assert_eq!(impulse, Vec2::ZERO);
    }

    #[test]
    fn test_spring_force() {
        let force = spring_force(Vec2::new(10.0, -5.0), Vec2::ZERO, 0.1);
        assert!((force - Vec2::new(-1.0, 0.5)).length() < 1e-6);
        assert_eq!(spring_force(Vec2::ONE, Vec2::ONE, SPRING_STIFFNESS), Vec2::ZERO);
    }

    #[test]
    fn test_opacity_bounds_and_monotonicity() {
        let mut previous = opacity_for_displacement(0.0, BASE_OPACITY, SATURATION_DISPLACEMENT);
        assert_eq!(previous, BASE_OPACITY);

        for i in 1..200 {
            let opacity =
                opacity_for_displacement(i as f32 * 0.5, BASE_OPACITY, SATURATION_DISPLACEMENT);
            assert!(opacity >= previous);
            assert!((BASE_OPACITY..=1.0).contains(&opacity));
            previous = opacity;
        }

        assert_eq!(
            opacity_for_displacement(SATURATION_DISPLACEMENT, BASE_OPACITY, SATURATION_DISPLACEMENT),
            1.0
        );
        assert_eq!(
            opacity_for_displacement(500.0, BASE_OPACITY, SATURATION_DISPLACEMENT),
            1.0
        );
    }
}
