use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ─────────────────────────────────────────────────────────────────────────────
// Vector3
// ─────────────────────────────────────────────────────────────────────────────

/// Three single-precision components with exact (bitwise-value) equality.
///
/// Division by zero and normalization of a zero-length vector are not
/// guarded: they yield infinities or NaN exactly as IEEE-754 prescribes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Right-handed: the camera looks down negative Z.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `value`.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - rhs.y * self.z,
            -(self.x * rhs.z - rhs.x * self.z),
            self.x * rhs.y - rhs.x * self.y,
        )
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Scales this vector to unit length in place.
    pub fn normalize(&mut self) {
        let factor = 1.0 / self.length_squared().sqrt();
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }

    /// Unit-length copy of this vector. A zero vector yields NaN components.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Reflects `self` about `normal`, which the caller keeps unit length.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        let val = 2.0 * self.dot(normal);
        Self::new(
            self.x - normal.x * val,
            self.y - normal.y * val,
            self.z - normal.z * val,
        )
    }

    /// Linear interpolation: `self + (rhs - self) * amount`.
    #[must_use]
    pub fn lerp(self, rhs: Self, amount: f32) -> Self {
        Self::new(
            lerp(self.x, rhs.x, amount),
            lerp(self.y, rhs.y, amount),
            lerp(self.z, rhs.z, amount),
        )
    }

    /// Cubic ease between `self` and `rhs`; `amount` is clamped to `[0, 1]`.
    #[must_use]
    pub fn smooth_step(self, rhs: Self, amount: f32) -> Self {
        Self::new(
            smooth_step(self.x, rhs.x, amount),
            smooth_step(self.y, rhs.y, amount),
            smooth_step(self.z, rhs.z, amount),
        )
    }

    /// Point at barycentric weights `amount1`/`amount2` of the triangle
    /// `(self, b, c)`.
    #[must_use]
    pub fn barycentric(self, b: Self, c: Self, amount1: f32, amount2: f32) -> Self {
        Self::new(
            barycentric(self.x, b.x, c.x, amount1, amount2),
            barycentric(self.y, b.y, c.y, amount1, amount2),
            barycentric(self.z, b.z, c.z, amount1, amount2),
        )
    }

    /// Catmull-Rom spline through `b` and `c` with `self` and `d` as the
    /// outer control points.
    #[must_use]
    pub fn catmull_rom(self, b: Self, c: Self, d: Self, amount: f32) -> Self {
        Self::new(
            catmull_rom(self.x, b.x, c.x, d.x, amount),
            catmull_rom(self.y, b.y, c.y, d.y, amount),
            catmull_rom(self.z, b.z, c.z, d.z, amount),
        )
    }

    /// Hermite spline from `self` (tangent `tangent1`) to `rhs` (tangent
    /// `tangent2`).
    #[must_use]
    pub fn hermite(self, tangent1: Self, rhs: Self, tangent2: Self, amount: f32) -> Self {
        Self::new(
            hermite(self.x, tangent1.x, rhs.x, tangent2.x, amount),
            hermite(self.y, tangent1.y, rhs.y, tangent2.y, amount),
            hermite(self.z, tangent1.z, rhs.z, tangent2.z, amount),
        )
    }

    /// Component-wise minimum. A NaN in either operand yields NaN.
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(min(self.x, rhs.x), min(self.y, rhs.y), min(self.z, rhs.z))
    }

    /// Component-wise maximum. A NaN in either operand yields NaN.
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(max(self.x, rhs.x), max(self.y, rhs.y), max(self.z, rhs.z))
    }

    /// Component-wise clamp into `[lo, hi]`. Unlike `f32::clamp` this never
    /// panics on `lo > hi`; the lower bound wins.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.min(hi).max(lo)
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Sum of the component hashes.
    #[must_use]
    pub fn hash_code(self) -> i32 {
        component_hash(self.x)
            .wrapping_add(component_hash(self.y))
            .wrapping_add(component_hash(self.z))
    }
}

// -0.0 == 0.0, so both must hash alike.
#[allow(clippy::float_cmp, clippy::cast_possible_wrap)]
fn component_hash(value: f32) -> i32 {
    if value == 0.0 { 0 } else { value.to_bits() as i32 }
}

// f32::min/max drop a NaN operand; these keep it.
fn min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() { f32::NAN } else { a.min(b) }
}

fn max(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() { f32::NAN } else { a.max(b) }
}

fn lerp(a: f32, b: f32, amount: f32) -> f32 {
    a + (b - a) * amount
}

fn barycentric(a: f32, b: f32, c: f32, amount1: f32, amount2: f32) -> f32 {
    a + (b - a) * amount1 + (c - a) * amount2
}

#[allow(clippy::float_cmp)]
fn hermite(a: f32, tangent1: f32, b: f32, tangent2: f32, amount: f32) -> f32 {
    if amount == 0.0 {
        return a;
    }
    if amount == 1.0 {
        return b;
    }
    let s2 = amount * amount;
    let s3 = s2 * amount;
    (2.0 * a - 2.0 * b + tangent2 + tangent1) * s3
        + (3.0 * b - 3.0 * a - 2.0 * tangent1 - tangent2) * s2
        + tangent1 * amount
        + a
}

fn smooth_step(a: f32, b: f32, amount: f32) -> f32 {
    let t = amount.clamp(0.0, 1.0);
    hermite(a, 0.0, b, 0.0, t)
}

fn catmull_rom(a: f32, b: f32, c: f32, d: f32, amount: f32) -> f32 {
    let s2 = amount * amount;
    let s3 = s2 * amount;
    0.5 * (2.0 * b
        + (c - a) * amount
        + (2.0 * a - 5.0 * b + 4.0 * c - d) * s2
        + (3.0 * b - a - 3.0 * c + d) * s3)
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Z:{}}}", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div for Vector3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        let factor = 1.0 / rhs;
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vector3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_constants() {
        assert_eq!(Vector3::ZERO, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::ONE, Vector3::splat(1.0));
        assert_eq!(Vector3::UNIT_X, Vector3::RIGHT);
        assert_eq!(Vector3::UNIT_Y, Vector3::UP);
        assert_eq!(Vector3::UNIT_Z, Vector3::BACKWARD);
        assert_eq!(Vector3::LEFT, -Vector3::RIGHT);
        assert_eq!(Vector3::DOWN, -Vector3::UP);
        assert_eq!(Vector3::FORWARD, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_vector3_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vector3_assign_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::ONE;
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::UNIT_X;
        assert_eq!(v, Vector3::new(1.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vector3::new(2.0, 6.0, 8.0));
        v /= 2.0;
        assert_eq!(v, Vector3::new(1.0, 3.0, 4.0));
        v *= Vector3::new(2.0, 1.0, 0.5);
        assert_eq!(v, Vector3::new(2.0, 3.0, 2.0));
        v /= Vector3::new(2.0, 3.0, 2.0);
        assert_eq!(v, Vector3::ONE);
    }

    #[test]
    fn test_vector3_cross_matches_axes() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(Vector3::UNIT_Z.cross(Vector3::UNIT_X), Vector3::UNIT_Y);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_vector3_hash_code_folds_negative_zero() {
        let a = Vector3::new(0.0, 1.0, 2.0);
        let b = Vector3::new(-0.0, 1.0, 2.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(Vector3::ZERO.hash_code(), 0);
    }

    #[test]
    fn test_vector3_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "{X:1 Y:-2.5 Z:0}");
    }
}
