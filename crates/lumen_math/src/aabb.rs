use crate::{DVec3, Interval};

/// Axis-aligned bounding box.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// Unlike a BVH box it is never padded: meshes derive their bounding sphere
/// from the exact per-axis extrema.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Tightest box around a set of points; empty for an empty slice.
    pub fn enclosing(points: &[DVec3]) -> Self {
        points.iter().fold(Self::EMPTY, |acc, p| acc.include(*p))
    }

    /// Grow the box to contain `p`.
    pub fn include(&self, p: DVec3) -> Self {
        Self {
            x: self.x.include(p.x),
            y: self.y.include(p.y),
            z: self.z.include(p.z),
        }
    }

    /// True if any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> DVec3 {
        DVec3::new(self.x.midpoint(), self.y.midpoint(), self.z.midpoint())
    }

    /// Per-axis size of the box.
    pub fn extent(&self) -> DVec3 {
        DVec3::new(self.x.size(), self.y.size(), self.z.size())
    }

    /// Size along the longest axis.
    pub fn max_extent(&self) -> f64 {
        self.extent().max_element()
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_enclosing() {
        let points = [
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(0.0, 0.0, 0.0),
        ];
        let aabb = Aabb::enclosing(&points);

        assert_eq!(aabb.x, Interval::new(-1.0, 4.0));
        assert_eq!(aabb.y, Interval::new(-2.0, 5.0));
        assert_eq!(aabb.z, Interval::new(-3.0, 6.0));
        assert_eq!(aabb.extent(), DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(aabb.max_extent(), 9.0);
    }

    #[test]
    fn test_aabb_enclosing_single_point() {
        // The first vertex must count as both min and max on every axis
        let aabb = Aabb::enclosing(&[DVec3::new(2.0, 3.0, 4.0)]);
        assert_eq!(aabb.centroid(), DVec3::new(2.0, 3.0, 4.0));
        assert_eq!(aabb.max_extent(), 0.0);
    }

    #[test]
    fn test_aabb_empty() {
        assert!(Aabb::enclosing(&[]).is_empty());
        assert!(Aabb::default().is_empty());
        assert!(!Aabb::EMPTY.include(DVec3::ONE).is_empty());
    }

    #[test]
    fn test_aabb_include_and_centroid() {
        let aabb = Aabb::EMPTY.include(DVec3::ZERO).include(DVec3::splat(10.0));
        assert_eq!(aabb.centroid(), DVec3::splat(5.0));

        // Points already inside leave the box unchanged
        assert_eq!(aabb.include(DVec3::splat(3.0)), aabb);
    }
}
