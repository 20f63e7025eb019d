use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use super::{Rad, Vec3};

/// 4×4 transform matrix, row-major.
///
/// Element `(row, col)` lives at index `row * 4 + col`:
///
/// ```text
/// [ 0] [ 1] [ 2] [ 3]
/// [ 4] [ 5] [ 6] [ 7]
/// [ 8] [ 9] [10] [11]
/// [12] [13] [14] [15]
/// ```
///
/// Vectors are columns, so translation occupies indices 3, 7 and 11.
/// All constructors are total: degenerate input yields identity or a partial
/// transform, never NaN.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    #[inline]
    pub const fn zero() -> Self {
        Self { m: [0.0; 16] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::from_rows([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a matrix from 16 values in row-major order.
    #[inline]
    pub const fn from_rows(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Row-major flat storage.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    pub fn translate(v: Vec3) -> Self {
        let mut t = Self::identity();
        t.m[3] = v.x;
        t.m[7] = v.y;
        t.m[11] = v.z;
        t
    }

    pub fn scale(v: Vec3) -> Self {
        let mut t = Self::identity();
        t.m[0] = v.x;
        t.m[5] = v.y;
        t.m[10] = v.z;
        t
    }

    /// Counter-clockwise rotation about +X (viewed from +X towards the origin).
    pub fn rotate_x(angle: impl Into<Rad>) -> Self {
        let (s, c) = angle.into().sin_cos();
        let mut t = Self::identity();
        t.m[5] = c;
        t.m[6] = -s;
        t.m[9] = s;
        t.m[10] = c;
        t
    }

    /// Counter-clockwise rotation about +Y.
    pub fn rotate_y(angle: impl Into<Rad>) -> Self {
        let (s, c) = angle.into().sin_cos();
        let mut t = Self::identity();
        t.m[0] = c;
        t.m[2] = s;
        t.m[8] = -s;
        t.m[10] = c;
        t
    }

    /// Counter-clockwise rotation about +Z.
    pub fn rotate_z(angle: impl Into<Rad>) -> Self {
        let (s, c) = angle.into().sin_cos();
        let mut t = Self::identity();
        t.m[0] = c;
        t.m[1] = -s;
        t.m[4] = s;
        t.m[5] = c;
        t
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula).
    ///
    /// `axis` is normalized first. A zero-length axis has no direction and
    /// yields identity. The result agrees with `rotate_x/y/z` for the unit axes.
    pub fn rotate(angle: impl Into<Rad>, axis: Vec3) -> Self {
        let Some(a) = axis.normalized() else {
            return Self::identity();
        };
        let (s, c) = angle.into().sin_cos();
        let c1 = 1.0 - c;
        let (l, m, n) = (a.x, a.y, a.z);

        Self::from_rows([
            l * l * c1 + c,     l * m * c1 - n * s, n * l * c1 + m * s, 0.0,
            l * m * c1 + n * s, m * m * c1 + c,     m * n * c1 - l * s, 0.0,
            n * l * c1 - m * s, m * n * c1 + l * s, n * n * c1 + c,     0.0,
            0.0,                0.0,                0.0,                1.0,
        ])
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// The camera looks down its local -Z axis (`t = eye - center` is +Z).
    /// When `up` is parallel to the view direction there is no usable basis and
    /// only the eye translation is returned.
    pub fn lookat(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let tv = Self::translate(-eye);

        let t = eye - center;
        let r = up * t;
        let s = t * r;
        if s.length_squared() == 0.0 {
            return tv;
        }

        let (Some(r), Some(s), Some(t)) = (r.normalized(), s.normalized(), t.normalized()) else {
            return tv;
        };

        let rv = Self::from_rows([
            r.x, r.y, r.z, 0.0,
            s.x, s.y, s.z, 0.0,
            t.x, t.y, t.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        rv * tv
    }

    /// Orthographic projection of the box `[left,right]×[bottom,top]×[-znear,-zfar]`
    /// onto the clip cube. Any zero-extent axis returns identity.
    pub fn orthogonal(left: f32, right: f32, bottom: f32, top: f32, znear: f32, zfar: f32) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = zfar - znear;
        if dx == 0.0 || dy == 0.0 || dz == 0.0 {
            return Self::identity();
        }

        let mut t = Self::identity();
        t.m[0] = 2.0 / dx;
        t.m[5] = 2.0 / dy;
        t.m[10] = -2.0 / dz;
        t.m[3] = -(right + left) / dx;
        t.m[7] = -(top + bottom) / dy;
        t.m[11] = -(zfar + znear) / dz;
        t
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                self.m.swap(row * 4 + col, col * 4 + row);
            }
        }
    }

    #[must_use]
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Transforms a point (`w = 1`), dropping the resulting `w`.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3],
            m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7],
            m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11],
        )
    }

    /// Column-major flat array for shader uniforms (`mat4x4<f32>` / `mat4`).
    #[inline]
    pub fn to_gpu_array(&self) -> [f32; 16] {
        self.transposed().m
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl Add for Mat4 {
    type Output = Mat4;
    fn add(mut self, rhs: Mat4) -> Mat4 {
        self += rhs;
        self
    }
}

impl Sub for Mat4 {
    type Output = Mat4;
    fn sub(mut self, rhs: Mat4) -> Mat4 {
        self -= rhs;
        self
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Mat4) {
        for (a, b) in self.m.iter_mut().zip(rhs.m) {
            *a += b;
        }
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Mat4) {
        for (a, b) in self.m.iter_mut().zip(rhs.m) {
            *a -= b;
        }
    }
}

/// Matrix product; `a * b` applies `b` first.
impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut t = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                t.m[row * 4 + col] = (0..4)
                    .map(|k| self.m[row * 4 + k] * rhs.m[k * 4 + col])
                    .sum();
            }
        }
        t
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m.iter().zip(&other.m).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .zip(&other.m)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
