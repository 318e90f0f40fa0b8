//! Strongly-typed primitives for sky chart layout.
//!
//! Spherical coordinates travel as [`Angle`] (radians) and [`Position`];
//! screen coordinates are `glam::DVec2` pixels with y growing downwards,
//! and label geometry is expressed with [`Size`] and [`Rect`].

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

// ============================================================================
// Angles and sky positions
// ============================================================================

/// An angle in radians
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle(degrees.to_radians())
    }

    /// Create an angle from user-provided degrees (rejects NaN/infinite)
    pub fn try_from_degrees(degrees: f64) -> Result<Angle, NumericError> {
        check_finite(degrees).map(Angle::from_degrees)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Wrap into `[0, 2π)`
    pub fn normalized(self) -> Angle {
        let wrapped = self.0.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= TAU { Angle(0.0) } else { Angle(wrapped) }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A point on the celestial sphere
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub right_ascension: Angle,
    pub declination: Angle,
}

impl Position {
    pub const fn new(right_ascension: Angle, declination: Angle) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    pub fn from_degrees(right_ascension: f64, declination: f64) -> Self {
        Self::new(
            Angle::from_degrees(right_ascension),
            Angle::from_degrees(declination),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.right_ascension.is_finite() && self.declination.is_finite()
    }
}

// ============================================================================
// Screen geometry
// ============================================================================

/// Pixel extent of a label or view
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Create a size from user-provided extents (finite, non-negative)
    pub fn try_new(w: f64, h: f64) -> Result<Self, NumericError> {
        for v in [w, h] {
            check_finite(v)?;
            if v < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(Self { w, h })
    }

    /// True when either extent is zero, negative or not a number
    pub fn is_empty(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }
}

/// Axis-aligned screen rectangle (origin is the top-left corner)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: DVec2,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: dvec2(x, y),
            size: Size::new(w, h),
        }
    }

    pub fn from_origin_size(origin: DVec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// The view rectangle `[0,w]×[0,h]`
    pub fn of_view(size: Size) -> Self {
        Self::from_origin_size(DVec2::ZERO, size)
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.w
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.h
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.w
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.h
    }

    pub fn mid(&self) -> DVec2 {
        self.origin + dvec2(self.size.w / 2.0, self.size.h / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Inclusive point containment
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// True when this rectangle lies entirely inside `bounds`
    pub fn is_within(&self, bounds: &Rect) -> bool {
        self.min_x() >= bounds.min_x()
            && self.max_x() <= bounds.max_x()
            && self.min_y() >= bounds.min_y()
            && self.max_y() <= bounds.max_y()
    }

    /// Grow by `delta` on every side, snapped outwards to whole pixels
    pub fn enlarge(&self, delta: f64) -> Rect {
        let min_x = (self.min_x() - delta).floor();
        let min_y = (self.min_y() - delta).floor();
        let max_x = (self.max_x() + delta).ceil();
        let max_y = (self.max_y() + delta).ceil();
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// The four edges in clockwise order starting with the top edge
    pub fn edges(&self) -> [(DVec2, DVec2); 4] {
        let tl = dvec2(self.min_x(), self.min_y());
        let tr = dvec2(self.max_x(), self.min_y());
        let br = dvec2(self.max_x(), self.max_y());
        let bl = dvec2(self.min_x(), self.max_y());
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}
