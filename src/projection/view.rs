//! Validated view geometry

use crate::errors::ViewError;
use crate::types::{Angle, NumericError, Position, Size};

/// Where the chart looks and how large it is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    center: Position,
    diameter: Angle,
    size: Size,
}

impl ViewGeometry {
    /// Validate caller-provided view parameters
    ///
    /// The size must be finite and positive on both axes and the angular
    /// diameter must lie strictly between 0° and 180°.
    pub fn try_new(center: Position, diameter: Angle, size: Size) -> Result<Self, ViewError> {
        if !center.right_ascension.is_finite() {
            return Err(ViewError::InvalidCenter {
                source: non_finite(center.right_ascension.radians()),
            });
        }
        if !center.declination.is_finite() {
            return Err(ViewError::InvalidCenter {
                source: non_finite(center.declination.radians()),
            });
        }
        if !(size.w.is_finite() && size.h.is_finite()) || size.is_empty() {
            return Err(ViewError::InvalidSize {
                width: size.w,
                height: size.h,
            });
        }
        let degrees = diameter.degrees();
        if !(degrees > 0.0 && degrees < 180.0) {
            return Err(ViewError::InvalidDiameter { degrees });
        }
        Ok(Self {
            center,
            diameter,
            size,
        })
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn diameter(&self) -> Angle {
        self.diameter
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

fn non_finite(val: f64) -> NumericError {
    if val.is_nan() {
        NumericError::NaN
    } else {
        NumericError::Infinite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Position {
        Position::from_degrees(10.0, 20.0)
    }

    #[test]
    fn accepts_sensible_view() {
        let view =
            ViewGeometry::try_new(center(), Angle::from_degrees(60.0), Size::new(400.0, 300.0));
        assert!(view.is_ok());
    }

    #[test]
    fn rejects_empty_size() {
        let err = ViewGeometry::try_new(center(), Angle::from_degrees(60.0), Size::new(0.0, 300.0))
            .unwrap_err();
        assert_eq!(
            err,
            ViewError::InvalidSize {
                width: 0.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn rejects_hemisphere_or_wider() {
        for degrees in [0.0, 180.0, 250.0, f64::NAN] {
            let result = ViewGeometry::try_new(
                center(),
                Angle::from_degrees(degrees),
                Size::new(100.0, 100.0),
            );
            assert!(
                matches!(result, Err(ViewError::InvalidDiameter { .. })),
                "{degrees} accepted"
            );
        }
    }

    #[test]
    fn rejects_non_finite_center() {
        let result = ViewGeometry::try_new(
            Position::from_degrees(f64::NAN, 0.0),
            Angle::from_degrees(30.0),
            Size::new(100.0, 100.0),
        );
        assert_eq!(
            result,
            Err(ViewError::InvalidCenter {
                source: NumericError::NaN
            })
        );
    }
}
