//! Gnomonic (tangent plane) projection
//!
//! Great circles project to straight lines, which is what makes coordinate
//! grid lines and constellation patterns cheap to draw as segments. Only the
//! hemisphere facing the view center can be shown.

use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, dvec2};

use super::{Projector, ReversibleProjector, ViewGeometry};
use crate::defaults::NEAR_VIEW_MARGIN;
use crate::types::{Angle, Position, Size};

/// Mirrors x so that right ascension grows to the left, as seen from inside
/// the sphere
const FLIP: f64 = -1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GnomonicProjector {
    center: Position,
    size: Size,
    /// Pixels per unit of tangent-plane distance
    scale: f64,
    sin_dec0: f64,
    cos_dec0: f64,
}

impl GnomonicProjector {
    pub fn new(view: &ViewGeometry) -> Self {
        let size = view.size();
        let center = view.center();
        let half_diameter = view.diameter().radians() / 2.0;
        Self {
            center,
            size,
            scale: size.w.min(size.h) / 2.0 / half_diameter,
            sin_dec0: center.declination.sin(),
            cos_dec0: center.declination.cos(),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn mid(&self) -> DVec2 {
        dvec2(self.size.w / 2.0, self.size.h / 2.0)
    }
}

impl Projector for GnomonicProjector {
    fn project(&self, position: Position) -> Option<DVec2> {
        let d_ra = (position.right_ascension - self.center.right_ascension).radians();
        let (sin_dec, cos_dec) = position.declination.radians().sin_cos();
        let cos_c = self.sin_dec0 * sin_dec + self.cos_dec0 * cos_dec * d_ra.cos();
        // behind (or on) the tangent plane's horizon
        if cos_c.is_nan() || cos_c <= 0.0 {
            return None;
        }

        let dx = FLIP * cos_dec * d_ra.sin() / cos_c;
        let dy = (self.cos_dec0 * sin_dec - self.sin_dec0 * cos_dec * d_ra.cos()) / cos_c;
        let point = self.mid() + dvec2(self.scale * dx, -self.scale * dy);
        point.is_finite().then_some(point)
    }

    fn is_near_view(&self, point: DVec2) -> bool {
        point.x >= -NEAR_VIEW_MARGIN
            && point.x <= self.size.w + NEAR_VIEW_MARGIN
            && point.y >= -NEAR_VIEW_MARGIN
            && point.y <= self.size.h + NEAR_VIEW_MARGIN
    }

    fn as_reversible(&self) -> Option<&dyn ReversibleProjector> {
        Some(self)
    }
}

impl ReversibleProjector for GnomonicProjector {
    fn unproject(&self, point: DVec2) -> Option<Position> {
        if !point.is_finite() {
            return None;
        }
        let offset = point - self.mid();
        let dx = offset.x / self.scale;
        let dy = -offset.y / self.scale;
        let rho = dx.hypot(dy);
        if rho == 0.0 {
            return Some(self.center);
        }

        let c = rho.atan();
        let (sin_c, cos_c) = c.sin_cos();
        let sin_dec = (cos_c * self.sin_dec0 + dy * sin_c * self.cos_dec0 / rho).clamp(-1.0, 1.0);
        let declination = sin_dec.asin();
        let right_ascension = self.center.right_ascension.radians()
            + (FLIP * dx * sin_c).atan2(rho * self.cos_dec0 * cos_c - dy * self.sin_dec0 * sin_c);

        let position = Position::new(
            Angle::from_radians(right_ascension).normalized(),
            Angle::from_radians(declination.clamp(-FRAC_PI_2, FRAC_PI_2)),
        );
        position.is_finite().then_some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn projector(center: Position, diameter: f64, w: f64, h: f64) -> GnomonicProjector {
        let view = ViewGeometry::try_new(center, Angle::from_degrees(diameter), Size::new(w, h))
            .expect("valid view");
        GnomonicProjector::new(&view)
    }

    fn angular_gap(a: Angle, b: Angle) -> f64 {
        let d = (a.radians() - b.radians()).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn center_projects_to_view_middle() {
        let center = Position::from_degrees(83.0, -5.0);
        let p = projector(center, 40.0, 400.0, 300.0);
        let plot = p.project(center).expect("center is visible");
        assert!((plot - dvec2(200.0, 150.0)).length() < 1e-9);
    }

    #[test]
    fn scale_uses_shorter_side() {
        let p = projector(Position::default(), 90.0, 400.0, 300.0);
        // half of the shorter side spans half the diameter (45°)
        assert!((p.scale() - 150.0 / (FRAC_PI_2 / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_and_east_is_left() {
        let center = Position::from_degrees(100.0, 10.0);
        let p = projector(center, 30.0, 300.0, 300.0);
        let mid = dvec2(150.0, 150.0);

        let north = p.project(Position::from_degrees(100.0, 15.0)).expect("visible");
        assert!((north.x - mid.x).abs() < 1e-9);
        assert!(north.y < mid.y);

        let east = p.project(Position::from_degrees(105.0, 10.0)).expect("visible");
        assert!(east.x < mid.x);
    }

    #[test]
    fn far_hemisphere_is_not_projected() {
        let center = Position::from_degrees(0.0, 0.0);
        let p = projector(center, 60.0, 300.0, 300.0);
        assert_eq!(p.project(Position::from_degrees(180.0, 0.0)), None);
        assert_eq!(p.project(Position::from_degrees(120.0, 10.0)), None);
        assert_eq!(p.project(Position::from_degrees(0.0, -95.0)), None);
    }

    #[test]
    fn near_view_adds_margin() {
        let p = projector(Position::default(), 60.0, 300.0, 200.0);
        assert!(p.is_near_view(dvec2(-30.0, -30.0)));
        assert!(p.is_near_view(dvec2(330.0, 230.0)));
        assert!(!p.is_near_view(dvec2(-30.5, 100.0)));
        assert!(!p.is_near_view(dvec2(100.0, 230.5)));
    }

    #[test]
    fn round_trip_recovers_position() {
        for center in [
            Position::from_degrees(0.0, 0.0),
            Position::from_degrees(350.0, 45.0),
            Position::from_degrees(200.0, -70.0),
            Position::from_degrees(12.0, 89.0),
        ] {
            let p = projector(center, 80.0, 500.0, 400.0);
            for ra_step in -4..=4 {
                for dec_step in -4..=4 {
                    let position = Position::new(
                        center.right_ascension + Angle::from_degrees(ra_step as f64 * 9.0),
                        center.declination + Angle::from_degrees(dec_step as f64 * 9.0),
                    );
                    if position.declination.degrees().abs() > 90.0 {
                        continue;
                    }
                    let cos_c = center.declination.sin() * position.declination.sin()
                        + center.declination.cos()
                            * position.declination.cos()
                            * (position.right_ascension - center.right_ascension).cos();
                    if cos_c <= 0.1 {
                        continue;
                    }
                    let plot = p.project(position).expect("in front of the plane");
                    let back = p
                        .as_reversible()
                        .and_then(|r| r.unproject(plot))
                        .expect("reversible");
                    assert!(
                        (back.declination.radians() - position.declination.radians()).abs()
                            < 1e-6,
                        "declination drifted for {position:?}"
                    );
                    // right ascension is meaningless at the poles
                    if position.declination.degrees().abs() < 89.999 {
                        let gap = angular_gap(back.right_ascension, position.right_ascension);
                        assert!(gap < 1e-6, "right ascension drifted for {position:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn unproject_middle_is_center() {
        let center = Position::from_degrees(45.0, 30.0);
        let p = projector(center, 60.0, 200.0, 200.0);
        assert_eq!(p.unproject(dvec2(100.0, 100.0)), Some(center));
        assert_eq!(p.unproject(dvec2(f64::NAN, 1.0)), None);
    }

    #[test]
    fn unprojected_right_ascension_is_normalized() {
        let p = projector(Position::from_degrees(0.0, 0.0), 60.0, 200.0, 200.0);
        // a little to the right of center is west, i.e. just below 360°
        let back = p.unproject(dvec2(110.0, 100.0)).expect("reversible");
        assert!(back.right_ascension.radians() >= 0.0);
        assert!(back.right_ascension.radians() < TAU);
        assert!(back.right_ascension.degrees() > 300.0);
    }

    #[test]
    fn apparent_size_spans_diameter() {
        let center = Position::from_degrees(30.0, 0.0);
        let p = projector(center, 20.0, 400.0, 400.0);
        let size = p
            .apparent_size(Angle::from_degrees(1.0), center)
            .expect("visible");
        // k · tan(1°) at the tangent point
        let expected = p.scale() * 1f64.to_radians().tan();
        assert!((size - expected).abs() < 1e-9);
    }
}
