use core::f32::consts::PI;
use core::ops::Neg;

/// Angle in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Deg(pub f32);

/// Angle in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Rad(pub f32);

impl Deg {
    #[inline]
    pub const fn new(deg: f32) -> Self {
        Self(deg)
    }

    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> Rad {
        Rad(self.0 * PI / 180.0)
    }
}

impl Rad {
    #[inline]
    pub const fn new(rad: f32) -> Self {
        Self(rad)
    }

    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> Deg {
        Deg(self.0 * 180.0 / PI)
    }

    /// Returns `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
}

impl From<Deg> for Rad {
    #[inline]
    fn from(deg: Deg) -> Rad {
        deg.to_radians()
    }
}

impl From<Rad> for Deg {
    #[inline]
    fn from(rad: Rad) -> Deg {
        rad.to_degrees()
    }
}

impl Neg for Deg {
    type Output = Deg;
    #[inline]
    fn neg(self) -> Deg {
        Deg(-self.0)
    }
}

impl Neg for Rad {
    type Output = Rad;
    #[inline]
    fn neg(self) -> Rad {
        Rad(-self.0)
    }
}

macro_rules! impl_approx {
    ($ty:ident) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl approx::RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                approx::RelativeEq::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl_approx!(Deg);
impl_approx!(Rad);
