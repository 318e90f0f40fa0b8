//! Turning a tap on the chart into a sky position and nearby object

use glam::DVec2;

use crate::graphic::ObjectId;
use crate::projection::{Projector, ReversibleProjector};
use crate::types::Position;

/// Finds the object drawn closest to a screen point
pub trait NearestObjectProvider {
    /// The nearest object and its distance in pixels
    fn nearest_object(&self, location: DVec2) -> Option<(ObjectId, f64)>;
}

/// What a tap landed on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub position: Position,
    /// Set only when an object lies within the effective radius
    pub nearest_object: Option<ObjectId>,
}

pub struct TapResolver<'a, P: NearestObjectProvider + ?Sized> {
    effective_radius: f64,
    projector: &'a dyn ReversibleProjector,
    provider: &'a P,
}

impl<'a, P: NearestObjectProvider + ?Sized> TapResolver<'a, P> {
    /// Returns `None` when hit-testing is unavailable: no radius is
    /// configured or the projection cannot be reversed
    pub fn new(
        effective_radius: Option<f64>,
        projector: &'a dyn Projector,
        provider: &'a P,
    ) -> Option<Self> {
        let effective_radius = effective_radius?;
        let projector = projector.as_reversible()?;
        Some(Self {
            effective_radius,
            projector,
            provider,
        })
    }

    pub fn resolve_tap(&self, location: DVec2) -> Option<Resolution> {
        let position = self.projector.unproject(location)?;
        let nearest_object = self
            .provider
            .nearest_object(location)
            .and_then(|(id, distance)| (distance <= self.effective_radius).then_some(id));
        crate::log::trace!(?location, ?nearest_object, "resolved tap");
        Some(Resolution {
            position,
            nearest_object,
        })
    }
}
