//! Integer grid points and displacement vectors (no I/O, no dependencies).
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, Index, Mul, Neg, Sub};

/// A position on the integer grid.
///
/// The derived order compares `x`, then `y`, then `z`, which is the
/// lexicographic order cuboid corner sorting relies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn coordinates(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Displacement from `self` to `other`: `self + self.subtract(other) == other`.
    #[inline]
    pub fn subtract(self, other: Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }
}

impl From<[i32; 3]> for Point {
    #[inline]
    fn from(c: [i32; 3]) -> Self {
        Point::new(c[0], c[1], c[2])
    }
}

impl From<(i32, i32, i32)> for Point {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Point::new(x, y, z)
    }
}

impl Index<usize> for Point {
    type Output = i32;
    #[inline]
    fn index(&self, i: usize) -> &i32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("point component index {i} out of range 0..3"),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A displacement on the integer grid. Shares the coordinate triple and
/// ordering of [`Point`] but carries no position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0, z: 0 };
    pub const X: Vector = Vector { x: 1, y: 0, z: 0 };
    pub const Y: Vector = Vector { x: 0, y: 1, z: 0 };
    pub const Z: Vector = Vector { x: 0, y: 0, z: 1 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn coordinates(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, rhs: Vector) -> i64 {
        self.x as i64 * rhs.x as i64 + self.y as i64 * rhs.y as i64 + self.z as i64 * rhs.z as i64
    }

    /// Squared length; exact for every representable vector.
    #[inline]
    pub fn magnitude2(self) -> i64 {
        self.dot(self)
    }

    #[inline]
    pub fn cross(self, rhs: Vector) -> Vector {
        Vector {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }
}

impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Self {
        Vector::new(p.x, p.y, p.z)
    }
}

impl From<[i32; 3]> for Vector {
    #[inline]
    fn from(c: [i32; 3]) -> Self {
        Vector::new(c[0], c[1], c[2])
    }
}

impl Index<usize> for Vector {
    type Output = i32;
    #[inline]
    fn index(&self, i: usize) -> &i32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector component index {i} out of range 0..3"),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// `a - b` is the displacement that carries `a` onto `b` (see [`Point::subtract`]).
impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        self.subtract(rhs)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
