//! Outward unit normal for a boundary face.

use std::fmt;

/// Outward unit face normal (nx, ny, nz).
///
/// Always points out of the interior element. For 2-D problems the z
/// component is zero; for 1-D both y and z are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Normal3 {
    /// Create a normal from its components.
    ///
    /// The components are expected to form a unit vector; this is not
    /// checked in release builds.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            ((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-10,
            "face normal must be a unit vector"
        );
        Self { x, y, z }
    }

    /// Unit normal along +x.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Dot product with a velocity (or momentum) triple.
    #[inline]
    pub fn dot(&self, vx: f64, vy: f64, vz: f64) -> f64 {
        vx * self.x + vy * self.y + vz * self.z
    }

    /// Mirror a vector about the face plane: v' = v − 2(v·n)n.
    #[inline]
    pub fn reflect(&self, vx: f64, vy: f64, vz: f64) -> (f64, f64, f64) {
        let vn = self.dot(vx, vy, vz);
        (
            vx - 2.0 * vn * self.x,
            vy - 2.0 * vn * self.y,
            vz - 2.0 * vn * self.z,
        )
    }
}

impl fmt::Display for Normal3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
