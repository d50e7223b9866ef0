use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// 2D displacement, used for translations and screen-space deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Add<Vector2> for DataPoint {
    type Output = DataPoint;

    fn add(self, rhs: Vector2) -> DataPoint {
        DataPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector2> for DataPoint {
    type Output = DataPoint;

    fn sub(self, rhs: Vector2) -> DataPoint {
        DataPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 2D affine matrix using the row-vector convention shared by Cairo:
///
/// ```text
/// x' = m11 * x + m21 * y + offset_x
/// y' = m12 * x + m22 * y + offset_y
/// ```
///
/// `a.then(b)` maps through `a` first and `b` second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    #[must_use]
    pub const fn translation(offset: Vector2) -> Self {
        Self {
            offset_x: offset.x,
            offset_y: offset.y,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn scaling(scale: f64) -> Self {
        Self {
            m11: scale,
            m22: scale,
            ..Self::IDENTITY
        }
    }

    /// Mirrors the y axis so world "up" becomes screen "down".
    #[must_use]
    pub const fn flip_y() -> Self {
        Self {
            m22: -1.0,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            offset_x: self.offset_x * next.m11 + self.offset_y * next.m21 + next.offset_x,
            offset_y: self.offset_x * next.m12 + self.offset_y * next.m22 + next.offset_y,
        }
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    #[must_use]
    pub fn is_invertible(self) -> bool {
        let det = self.determinant();
        det.is_finite() && det != 0.0 && self.offset_x.is_finite() && self.offset_y.is_finite()
    }

    /// Returns the inverse mapping, or `None` when the matrix is singular.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }
        let inv_det = 1.0 / self.determinant();
        let m11 = self.m22 * inv_det;
        let m12 = -self.m12 * inv_det;
        let m21 = -self.m21 * inv_det;
        let m22 = self.m11 * inv_det;
        Some(Self {
            m11,
            m12,
            m21,
            m22,
            offset_x: -(self.offset_x * m11 + self.offset_y * m21),
            offset_y: -(self.offset_x * m12 + self.offset_y * m22),
        })
    }

    #[must_use]
    pub fn transform_point(self, point: DataPoint) -> DataPoint {
        DataPoint::new(
            self.m11 * point.x + self.m21 * point.y + self.offset_x,
            self.m12 * point.x + self.m22 * point.y + self.offset_y,
        )
    }
}
