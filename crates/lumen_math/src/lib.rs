//! Lumen math - vector types and ray/bounds primitives.
//!
//! Everything is double precision: the renderer's epsilon guards are
//! `1e-6`, which is below f32 resolution at ordinary scene scales.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// Minimum accepted hit distance / angle used by every intersection test.
///
/// Hits closer than this to a ray origin are treated as self-intersections
/// and near-parallel configurations below it are treated as misses.
pub const EPSILON: f64 = 1e-6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(DVec3::X.cross(DVec3::Y), DVec3::Z);
    }

    #[test]
    fn test_epsilon_is_positive_and_small() {
        assert!(EPSILON > 0.0);
        assert!(EPSILON < 1e-3);
    }
}
