//! Turning sky objects and chart furniture into graphics
//!
//! This module is organized into submodules:
//! - `great_circle`: Sampling and segmenting coordinate circles
//! - `objects`: Stars, planets, clusters, nebulae
//! - `furniture`: Coordinate lines and constellation patterns

pub mod furniture;
pub mod great_circle;
pub mod objects;

pub use furniture::{ConstellationPattern, CoordinateLine, Furniture};
pub use great_circle::{GreatCircle, Sense};
pub use objects::{Cluster, ClusterKind, Nebulosity, Planet, PlanetaryNebula, SkyObject, Star};

use glam::{DVec2, dvec2};

use crate::config::Configuration;
use crate::graphic::Graphic;
use crate::projection::Projector;
use crate::types::Position;

/// Something that can be drawn on the chart
pub trait Plottable {
    /// The graphic for this item, or `None` when nothing of it is visible
    fn plot(&self, projector: &dyn Projector, configuration: &Configuration) -> Option<Graphic>;

    fn plotting_layer(&self) -> PlottingLayer {
        PlottingLayer::Object
    }
}

/// Drawing order; earlier layers are painted first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlottingLayer {
    MilkyWay,
    Object,
}

/// Glyph radius in pixels for an apparent magnitude
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    let sized = (8.0 - magnitude).max(1.0) * 1.6;
    (0.5 * sized).ceil()
}

/// Project a position and snap it to whole pixels, keeping only plots that
/// fall near the view
pub(crate) fn plot_near_view(projector: &dyn Projector, position: Position) -> Option<DVec2> {
    let plot = projector.project(position)?;
    projector
        .is_near_view(plot)
        .then(|| dvec2(plot.x.round(), plot.y.round()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_grows_with_brightness() {
        assert_eq!(radius_for_magnitude(7.0), 1.0);
        assert_eq!(radius_for_magnitude(10.0), 1.0);
        assert_eq!(radius_for_magnitude(3.0), 4.0);
        assert_eq!(radius_for_magnitude(-1.0), 8.0);
    }
}
