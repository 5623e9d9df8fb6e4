// REF:: https://github.com/mrdoob/three.js/blob/dev/src/math/Vector2.js

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{approx_eq, lerp, DEFAULT_TOLERANCE};

/// A 2D point or direction.
///
/// Operations taking `self` return a new vector. The few mutators (`set`,
/// `copy_from`, `zero`, `set_angle`) take `&mut self` and hand the receiver
/// back so calls can be chained.
///
/// Degenerate inputs never produce `NaN` or infinities: dividing by zero and
/// normalizing a zero-length vector both yield the zero vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zeroed() -> Self {
        Self::ZERO
    }

    pub const fn from_scalar(s: f64) -> Self {
        Self { x: s, y: s }
    }

    pub const fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    pub const fn unit_y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    /// Builds a vector from the first two elements of `arr`.
    ///
    /// Missing elements and `NaN` become `0.0`.
    pub fn from_array(arr: &[f64]) -> Self {
        let component = |i: usize| {
            arr.get(i)
                .copied()
                .filter(|v| !v.is_nan())
                .unwrap_or(0.0)
        };

        Self::new(component(0), component(1))
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s)
    }

    pub fn midpoint(p1: Self, p2: Self) -> Self {
        Self::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
    }

    // Mutators

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn copy_from(&mut self, v: &Self) -> &mut Self {
        self.set(v.x, v.y)
    }

    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    /// Points the vector at `angle` radians, keeping its magnitude.
    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        let magnitude = self.magnitude();
        let (s, c) = angle.sin_cos();
        self.set(c * magnitude, s * magnitude)
    }

    // Arithmetic

    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    pub fn subtract(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    pub fn multiply(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Divides both components by `scalar`; a zero divisor yields the zero vector.
    pub fn divide(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            log::trace!("{} divided by zero, returning zero vector", self);
            return Self::ZERO;
        }

        Self::new(self.x / scalar, self.y / scalar)
    }

    /// Like [`divide`](Self::divide) but reports a zero divisor as `None`.
    pub fn checked_divide(self, scalar: f64) -> Option<Self> {
        if scalar == 0.0 {
            None
        } else {
            Some(self.divide(scalar))
        }
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    // Products

    pub fn dot(&self, v: &Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Scalar 2D cross product, positive when `v` lies counter-clockwise of `self`.
    pub fn cross(&self, v: &Self) -> f64 {
        self.x * v.y - self.y * v.x
    }

    // Length

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length, computed without intermediate overflow or underflow.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(|| {
            log::trace!("normalizing a zero-length vector");
            Self::ZERO
        })
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn try_normalize(self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            None
        } else {
            Some(Self::new(self.x / magnitude, self.y / magnitude))
        }
    }

    /// Rescales to `length`. A zero vector stays zero whatever `length` is.
    pub fn set_magnitude(self, length: f64) -> Self {
        self.normalize().multiply(length)
    }

    /// Clamps the magnitude to at most `max_length`.
    pub fn limit(self, max_length: f64) -> Self {
        if self.magnitude() > max_length {
            self.set_magnitude(max_length)
        } else {
            self
        }
    }

    // Angles

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Signed angle from `self` to `v`, in `(-π, π]`.
    pub fn angle_between(&self, v: &Self) -> f64 {
        self.cross(v).atan2(self.dot(v))
    }

    pub fn angle_between_unsigned(&self, v: &Self) -> f64 {
        self.angle_between(v).abs()
    }

    /// Direction of the vector, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    // Geometry

    pub fn distance_squared(&self, v: &Self) -> f64 {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, v: &Self) -> f64 {
        (self.x - v.x).hypot(self.y - v.y)
    }

    /// Linear interpolation towards `target`. `t` is not clamped.
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(lerp(self.x, target.x, t), lerp(self.y, target.y, t))
    }

    /// Projection onto the direction of `v`; the length of `v` is ignored.
    pub fn project(self, v: Self) -> Self {
        let n = v.normalize();
        n.multiply(self.dot(&n))
    }

    /// Mirrors across the line perpendicular to `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalize();
        self.subtract(n.multiply(2.0 * self.dot(&n)))
    }

    // Comparison

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn approx_eq(&self, v: &Self, tolerance: f64) -> bool {
        approx_eq(self.x, v.x, tolerance) && approx_eq(self.y, v.y, tolerance)
    }

    /// Componentwise comparison within [`DEFAULT_TOLERANCE`].
    pub fn equals(&self, v: &Self) -> bool {
        self.approx_eq(v, DEFAULT_TOLERANCE)
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        v.to_array()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs.multiply(self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector2D::add(*self, rhs);
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.multiply(rhs);
    }
}

impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, rhs: f64) {
        *self = self.divide(rhs);
    }
}
