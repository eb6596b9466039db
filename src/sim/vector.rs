//! 2D value type for positions, sizes and speeds
//!
//! Level space is measured in tiles: x grows to the right, y grows downward.

use std::ops::{Add, Mul};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// An immutable 2D point or displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Boundary constructor for untrusted numbers (rejects NaN and infinities)
    pub fn try_new(x: f32, y: f32) -> Result<Self> {
        let v = Self::new(x, y);
        v.validate()?;
        Ok(v)
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        (self.as_vec2() + other.as_vec2()).into()
    }

    /// Component-wise scalar multiply
    #[inline]
    pub fn times(self, factor: f32) -> Vector {
        (self.as_vec2() * factor).into()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.as_vec2().is_finite()
    }

    /// Fail with an invalid-argument error unless both components are finite
    pub fn validate(self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(SimError::InvalidArgument(format!(
                "vector components must be finite, got ({}, {})",
                self.x, self.y
            )))
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        v.as_vec2()
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.times(rhs)
    }
}
