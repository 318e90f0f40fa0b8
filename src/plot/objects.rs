//! Catalog objects and the graphics they plot to
//!
//! Every object plots to at most one [`Graphic`] under its own id. Objects
//! whose centre does not project near the view plot to nothing.

use glam::{DVec2, dvec2};

use super::{Plottable, PlottingLayer, plot_near_view, radius_for_magnitude};
use crate::config::Configuration;
use crate::defaults::{AURA_WIDTH, MIN_CLUSTER_RADIUS, STAR_WING_WIDTH, THIN_LINE_WIDTH};
use crate::errors::CatalogError;
use crate::graphic::{
    CircleShape, CutoutShape, Graphic, LineShape, ObjectId, Obscurement, PolygonShape, Shape,
};
use crate::names::{FittingStyle, NameStyle, Nameable};
use crate::projection::Projector;
use crate::style::{ColorRole, MilkyWayBand, Style};
use crate::types::{Angle, Position};

/// What the layout needs from any catalog object
pub trait CelestialObject: Plottable + Nameable {
    fn position(&self) -> Position;

    /// Apparent magnitude; smaller is brighter and is plotted first
    fn magnitude(&self) -> f64;
}

/// Any catalog object the chart can show
#[derive(Clone, Debug, PartialEq)]
pub enum SkyObject {
    Star(Star),
    Planet(Planet),
    Cluster(Cluster),
    PlanetaryNebula(PlanetaryNebula),
    Nebulosity(Nebulosity),
}

impl SkyObject {
    pub fn as_object(&self) -> &dyn CelestialObject {
        match self {
            SkyObject::Star(star) => star,
            SkyObject::Planet(planet) => planet,
            SkyObject::Cluster(cluster) => cluster,
            SkyObject::PlanetaryNebula(nebula) => nebula,
            SkyObject::Nebulosity(nebulosity) => nebulosity,
        }
    }
}

macro_rules! sky_object_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for SkyObject {
                fn from(object: $variant) -> Self {
                    SkyObject::$variant(object)
                }
            }
        )*
    };
}

sky_object_from!(Star, Planet, Cluster, PlanetaryNebula, Nebulosity);

macro_rules! celestial_object {
    ($ty:ident, $style:expr) => {
        impl Nameable for $ty {
            fn id(&self) -> ObjectId {
                ObjectId::Entity(self.id)
            }

            fn names(&self) -> &[String] {
                &self.names
            }

            fn name_style(&self) -> NameStyle {
                $style
            }
        }

        impl CelestialObject for $ty {
            fn position(&self) -> Position {
                self.position
            }

            fn magnitude(&self) -> f64 {
                self.magnitude
            }
        }
    };
}

/// Background-filled halo that keeps grid lines off a glyph
fn aura(center: DVec2, radius: f64) -> Shape {
    CircleShape::new(center, radius + AURA_WIDTH)
        .with_styles([Style::fill(ColorRole::Background)])
        .with_obscurement(Obscurement::Never)
        .into()
}

// ============================================================================
// Star
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: u64,
    pub position: Position,
    pub magnitude: f64,
    pub is_double: bool,
    pub is_variable: bool,
    pub names: Vec<String>,
}

impl Star {
    pub fn new(id: u64, position: Position, magnitude: f64, names: Vec<String>) -> Self {
        Self {
            id,
            position,
            magnitude,
            is_double: false,
            is_variable: false,
            names,
        }
    }

    /// Mark as a double star (drawn with wings)
    pub fn double(mut self) -> Self {
        self.is_double = true;
        self
    }

    /// Mark as a variable star (drawn with an inner shell)
    pub fn variable(mut self) -> Self {
        self.is_variable = true;
        self
    }
}

celestial_object!(
    Star,
    NameStyle::new(FittingStyle::Exterior, ColorRole::StarNameText)
);

impl Plottable for Star {
    fn plot(&self, projector: &dyn Projector, configuration: &Configuration) -> Option<Graphic> {
        let plot = plot_near_view(projector, self.position)?;
        let radius = radius_for_magnitude(self.magnitude);
        let mut shapes = Vec::new();

        if configuration.show_star_aura {
            shapes.push(aura(plot, radius));
        }
        shapes.push(
            CircleShape::new(plot, radius)
                .with_styles([Style::fill(ColorRole::Star)])
                .with_obscurement(Obscurement::Always)
                .into(),
        );

        if self.is_double {
            let wing = (0.7 * radius).max(1.0);
            for side in [-1.0, 1.0] {
                let start = plot + dvec2(side * radius, 0.0);
                shapes.push(
                    LineShape::new(start, start + dvec2(side * wing, 0.0))
                        .with_styles([Style::stroke(STAR_WING_WIDTH, ColorRole::Star)])
                        .with_obscurement(Obscurement::Always)
                        .into(),
                );
            }
        }

        if self.is_variable {
            let half_width = (0.1 * radius).floor().max(0.5);
            let width = 2.0 * half_width;
            let shell_radius = (radius - width - half_width).max(0.0);
            shapes.push(
                CircleShape::new(plot, shell_radius)
                    .with_styles([Style::stroke(width, ColorRole::Background)])
                    .with_obscurement(Obscurement::Never)
                    .into(),
            );
        }

        Some(Graphic::new(self.id(), shapes))
    }
}

// ============================================================================
// Planet
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: u64,
    pub position: Position,
    pub magnitude: f64,
    pub names: Vec<String>,
}

impl Planet {
    pub fn new(id: u64, position: Position, magnitude: f64, names: Vec<String>) -> Self {
        Self {
            id,
            position,
            magnitude,
            names,
        }
    }
}

celestial_object!(
    Planet,
    NameStyle::new(FittingStyle::Exterior, ColorRole::StarNameText)
);

impl Plottable for Planet {
    fn plot(&self, projector: &dyn Projector, configuration: &Configuration) -> Option<Graphic> {
        let plot = plot_near_view(projector, self.position)?;
        let radius = radius_for_magnitude(self.magnitude);
        let mut shapes = Vec::new();

        if configuration.show_star_aura {
            shapes.push(aura(plot, radius));
        }
        shapes.push(
            CircleShape::new(plot, radius)
                .with_styles([Style::fill(ColorRole::Planet)])
                .with_obscurement(Obscurement::Always)
                .into(),
        );

        Some(Graphic::new(self.id(), shapes))
    }
}

// ============================================================================
// Cluster
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterKind {
    Open,
    Globular,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub id: u64,
    pub position: Position,
    pub magnitude: f64,
    pub apparent_diameter: Angle,
    pub kind: ClusterKind,
    pub names: Vec<String>,
}

impl Cluster {
    pub fn new(
        id: u64,
        position: Position,
        magnitude: f64,
        apparent_diameter: Angle,
        kind: ClusterKind,
        names: Vec<String>,
    ) -> Self {
        Self {
            id,
            position,
            magnitude,
            apparent_diameter,
            kind,
            names,
        }
    }
}

celestial_object!(
    Cluster,
    NameStyle::new(FittingStyle::Exterior, ColorRole::ClusterNameText)
);

impl Plottable for Cluster {
    fn plot(&self, projector: &dyn Projector, _configuration: &Configuration) -> Option<Graphic> {
        let plot = plot_near_view(projector, self.position)?;
        let apparent = projector.apparent_size(self.apparent_diameter, self.position)?;
        let radius = (0.5 * apparent).round().max(MIN_CLUSTER_RADIUS);
        let border = Style::stroke(THIN_LINE_WIDTH, ColorRole::ClusterBorder);

        let mut shapes: Vec<Shape> = vec![
            CircleShape::new(plot, radius)
                .with_styles([Style::fill(ColorRole::ClusterInterior), border])
                .with_obscurement(Obscurement::Always)
                .into(),
        ];

        if self.kind == ClusterKind::Globular {
            let across = [
                (plot - dvec2(radius, 0.0), plot + dvec2(radius, 0.0)),
                (plot + dvec2(0.0, radius), plot - dvec2(0.0, radius)),
            ];
            shapes.extend(across.into_iter().map(|(start, finish)| {
                Shape::from(
                    LineShape::new(start, finish)
                        .with_styles([border])
                        .with_obscurement(Obscurement::Always),
                )
            }));
        }

        Some(Graphic::new(self.id(), shapes))
    }
}

// ============================================================================
// Planetary nebula
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PlanetaryNebula {
    pub id: u64,
    pub position: Position,
    pub magnitude: f64,
    pub names: Vec<String>,
}

impl PlanetaryNebula {
    pub fn new(id: u64, position: Position, magnitude: f64, names: Vec<String>) -> Self {
        Self {
            id,
            position,
            magnitude,
            names,
        }
    }
}

celestial_object!(
    PlanetaryNebula,
    NameStyle::new(FittingStyle::Exterior, ColorRole::ClusterNameText)
);

impl Plottable for PlanetaryNebula {
    fn plot(&self, projector: &dyn Projector, _configuration: &Configuration) -> Option<Graphic> {
        let plot = plot_near_view(projector, self.position)?;
        let radius = radius_for_magnitude(self.magnitude);
        let wing = (0.5 * radius.round()).max(1.0);
        let outline = Style::stroke(THIN_LINE_WIDTH, ColorRole::PlanetaryNebula);

        let mut shapes: Vec<Shape> = vec![
            CircleShape::new(plot, radius)
                .with_styles([outline])
                .with_obscurement(Obscurement::Always)
                .into(),
        ];

        // left, right, up, down
        let directions = [
            dvec2(-1.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(0.0, -1.0),
            dvec2(0.0, 1.0),
        ];
        shapes.extend(directions.into_iter().map(|direction| {
            let start = plot + direction * radius;
            Shape::from(
                LineShape::new(start, start + direction * wing)
                    .with_styles([outline])
                    .with_obscurement(Obscurement::Always),
            )
        }));

        Some(Graphic::new(self.id(), shapes))
    }
}

// ============================================================================
// Nebulosity
// ============================================================================

/// A milky way brightness band outline
#[derive(Clone, Debug, PartialEq)]
pub struct Nebulosity {
    pub id: u64,
    pub position: Position,
    pub magnitude: f64,
    pub band: MilkyWayBand,
    pub boundary: Vec<Position>,
    pub holes: Vec<Vec<Position>>,
    pub names: Vec<String>,
}

impl Nebulosity {
    /// Build a band outline; `magnitude` must be one of the whole band
    /// magnitudes 0 through 4
    pub fn new(
        id: u64,
        position: Position,
        magnitude: f64,
        boundary: Vec<Position>,
        holes: Vec<Vec<Position>>,
        names: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let band = MilkyWayBand::from_magnitude(magnitude)
            .ok_or(CatalogError::NebulosityMagnitude { magnitude })?;
        Ok(Self {
            id,
            position,
            magnitude,
            band,
            boundary,
            holes,
            names,
        })
    }
}

celestial_object!(
    Nebulosity,
    NameStyle::new(FittingStyle::Exterior, ColorRole::StarNameText)
);

/// Project an outline, dropping vertices that cannot be drawn
fn project_outline(positions: &[Position], projector: &dyn Projector) -> Vec<DVec2> {
    positions
        .iter()
        .filter_map(|&position| projector.project(position))
        .map(|point| dvec2(point.x.round(), point.y.round()))
        .collect()
}

impl Plottable for Nebulosity {
    fn plot(&self, projector: &dyn Projector, configuration: &Configuration) -> Option<Graphic> {
        let vertices = project_outline(&self.boundary, projector);
        if vertices.len() < 3 {
            return None;
        }
        let cutouts: Vec<_> = self
            .holes
            .iter()
            .map(|hole| project_outline(hole, projector))
            .filter(|hole| hole.len() >= 3)
            .collect();

        let mut styles = vec![Style::fill(ColorRole::MilkyWayInterior(self.band))];
        if configuration.show_milky_way_border {
            styles.push(Style::stroke(THIN_LINE_WIDTH, ColorRole::MilkyWayBorder));
        }

        let shape: Shape = if cutouts.is_empty() {
            PolygonShape::new(vertices)
                .with_styles(styles)
                .with_obscurement(Obscurement::Never)
                .into()
        } else {
            CutoutShape::new(vertices, cutouts)
                .with_styles(styles)
                .with_obscurement(Obscurement::Never)
                .into()
        };
        Some(Graphic::new(self.id(), vec![shape]))
    }

    fn plotting_layer(&self) -> PlottingLayer {
        PlottingLayer::MilkyWay
    }
}
