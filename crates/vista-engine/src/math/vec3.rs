use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

/// 3-component vector in world units.
///
/// Note: `Vec3 * Vec3` (and `*=`) is the **cross product**, not a component-wise
/// multiply. Scalar scaling is `Vec3 * f32`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    #[inline]
    pub fn normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len <= f32::EPSILON || !len.is_finite() {
            None
        } else {
            Some(self * (1.0 / len))
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(v: [f32; 3]) -> Vec3 {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Cross product.
impl Mul for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.cross(rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

/// In-place cross product.
impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vec3) {
        *self = self.cross(rhs);
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(x: f32, y: f32, z: f32) -> Vec3 { Vec3::new(x, y, z) }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub() {
        assert_eq!(v(1.0, 2.0, 3.0) + v(4.0, 5.0, 6.0), v(5.0, 7.0, 9.0));
        assert_eq!(v(1.0, 2.0, 3.0) - v(4.0, 5.0, 6.0), v(-3.0, -3.0, -3.0));

        let mut a = v(1.0, 1.0, 1.0);
        a += v(1.0, 2.0, 3.0);
        a -= v(0.5, 0.5, 0.5);
        assert_eq!(a, v(1.5, 2.5, 3.5));
    }

    #[test]
    fn star_is_cross_product() {
        assert_eq!(Vec3::X * Vec3::Y, Vec3::Z);
        assert_eq!(Vec3::Y * Vec3::Z, Vec3::X);
        assert_eq!(Vec3::Z * Vec3::X, Vec3::Y);
        assert_eq!(Vec3::Y * Vec3::X, -Vec3::Z);

        let mut a = Vec3::X;
        a *= Vec3::Y;
        assert_eq!(a, Vec3::Z);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-4.0, 0.5, 2.0);
        let c = a * b;
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        assert_eq!(v(1.0, 2.0, 3.0) * v(2.0, 4.0, 6.0), Vec3::zero());
    }

    #[test]
    fn scalar_multiply() {
        assert_eq!(v(1.0, -2.0, 3.0) * 2.0, v(2.0, -4.0, 6.0));
    }

    // ── length ────────────────────────────────────────────────────────────

    #[test]
    fn length_and_squared_length() {
        assert_eq!(v(3.0, 4.0, 0.0).length_squared(), 25.0);
        assert_eq!(v(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::zero().length(), 0.0);
    }

    #[test]
    fn normalized_unit_length() {
        let n = v(0.0, 3.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(n, v(0.0, 0.6, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec3::zero().normalized().is_none());
    }
}
