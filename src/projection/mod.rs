//! Spherical to screen projection
//!
//! A [`Projector`] maps sky positions onto view pixels and decides which
//! pixels are close enough to the view to matter. Projections that can be
//! inverted also expose a [`ReversibleProjector`], which hit-testing needs;
//! callers treat its absence as "hit-testing unavailable".

pub mod gnomonic;
pub mod view;

pub use gnomonic::GnomonicProjector;
pub use view::ViewGeometry;

use glam::DVec2;

use crate::types::{Angle, Position};

/// Sky → screen mapping for one view
pub trait Projector {
    /// Screen point for `position`, or `None` if it cannot be drawn
    fn project(&self, position: Position) -> Option<DVec2>;

    /// Whether `point` falls inside the view extended by the near-view margin
    fn is_near_view(&self, point: DVec2) -> bool;

    /// The inverse mapping, when this projection has one
    fn as_reversible(&self) -> Option<&dyn ReversibleProjector> {
        None
    }

    /// Pixel length of an angular diameter centred on `at`
    ///
    /// Measured between the projected centre and a point offset by the
    /// diameter along declination (towards the equator near the poles).
    fn apparent_size(&self, diameter: Angle, at: Position) -> Option<f64> {
        let center = self.project(at)?;
        let north = at.declination + diameter;
        let offset_dec = if north.degrees() <= 90.0 {
            north
        } else {
            at.declination - diameter
        };
        let edge = self.project(Position::new(at.right_ascension, offset_dec))?;
        Some(center.distance(edge))
    }
}

/// Screen → sky mapping
pub trait ReversibleProjector: Projector {
    fn unproject(&self, point: DVec2) -> Option<Position>;
}

/// Supported projections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Gnomonic,
}

impl Projection {
    pub fn make_projector(self, view: &ViewGeometry) -> Box<dyn Projector> {
        crate::log::debug!(
            projection = ?self,
            width = view.size().w,
            height = view.size().h,
            diameter = view.diameter().degrees(),
            "building projector"
        );
        match self {
            Projection::Gnomonic => Box::new(GnomonicProjector::new(view)),
        }
    }
}
