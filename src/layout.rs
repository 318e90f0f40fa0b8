//! The chart layout pipeline
//!
//! Layout runs in three synchronous phases:
//! 1. [`Layout::build`] plots furniture and objects into graphics
//! 2. [`Layout::layout_names`] fits names against those graphics
//! 3. [`Layout::render`] runs both and hands back a [`Chart`]
//!
//! A layout is immutable once built, so a chart can be re-rendered with a
//! different text resolver without re-plotting anything.

use glam::DVec2;

use crate::config::Configuration;
use crate::graphic::{Graphic, ObjectId};
use crate::names::{NameEntry, NamesFitter, TextResolver};
use crate::plot::objects::CelestialObject;
use crate::plot::{Furniture, Plottable, SkyObject};
use crate::projection::{Projector, ViewGeometry};
use crate::tap::{NearestObjectProvider, TapResolver};

/// Graphics produced by the plotting phase
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Plots {
    pub furniture: Vec<Graphic>,
    /// In painting order: milky way first, then objects brightest first
    pub objects: Vec<Graphic>,
}

impl Plots {
    pub fn iter(&self) -> impl Iterator<Item = &Graphic> {
        self.furniture.iter().chain(&self.objects)
    }
}

/// Everything the rendering layer draws, back to front
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Chart {
    pub furniture: Vec<Graphic>,
    pub objects: Vec<Graphic>,
    pub names: Vec<Graphic>,
}

pub struct Layout {
    objects: Vec<SkyObject>,
    furniture: Vec<Furniture>,
    configuration: Configuration,
    view: ViewGeometry,
    projector: Box<dyn Projector>,
}

impl Layout {
    /// Every object and piece of furniture must carry a distinct entity id.
    /// A reused id merges the two graphics when names are fitted, so the
    /// name of one is placed against the shapes of both.
    pub fn new(
        objects: Vec<SkyObject>,
        furniture: Vec<Furniture>,
        configuration: Configuration,
        view: ViewGeometry,
    ) -> Self {
        let projector = configuration.projection.make_projector(&view);
        Self {
            objects,
            furniture,
            configuration,
            view,
            projector,
        }
    }

    pub fn projector(&self) -> &dyn Projector {
        self.projector.as_ref()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn view(&self) -> &ViewGeometry {
        &self.view
    }

    /// Objects brightest first; equal magnitudes keep their input order
    fn objects_by_magnitude(&self) -> Vec<&dyn CelestialObject> {
        let mut objects: Vec<&dyn CelestialObject> =
            self.objects.iter().map(SkyObject::as_object).collect();
        objects.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));
        objects
    }

    /// Plot furniture, then objects
    pub fn build(&self) -> Plots {
        let projector = self.projector();
        let furniture = self
            .furniture
            .iter()
            .filter_map(|item| item.plot(projector, &self.configuration))
            .collect();

        let mut objects = self.objects_by_magnitude();
        objects.sort_by_key(|object| object.plotting_layer());
        let objects: Vec<Graphic> = objects
            .into_iter()
            .filter_map(|object| object.plot(projector, &self.configuration))
            .collect();

        crate::log::debug!(
            furniture = self.furniture.len(),
            objects = self.objects.len(),
            plotted = objects.len(),
            "plotted chart"
        );
        Plots { furniture, objects }
    }

    /// Fit names against `plots`
    ///
    /// Furniture names go first so grid labels claim the view edges, then
    /// objects brightest first. Returns nothing when names are turned off.
    pub fn layout_names(&self, plots: &Plots, resolver: &mut impl TextResolver) -> Vec<Graphic> {
        if !self.configuration.show_names {
            return Vec::new();
        }

        let furniture = self
            .furniture
            .iter()
            .filter_map(Furniture::as_nameable)
            .map(NameEntry::from_nameable);
        let objects = self
            .objects_by_magnitude()
            .into_iter()
            .map(NameEntry::from_nameable);

        NamesFitter::new(
            furniture.chain(objects),
            plots.iter().cloned(),
            self.view.size(),
        )
        .with_backgrounds(self.configuration.show_name_backgrounds)
        .fit(resolver)
    }

    pub fn render(&self, resolver: &mut impl TextResolver) -> Chart {
        let plots = self.build();
        let names = self.layout_names(&plots, resolver);
        Chart {
            furniture: plots.furniture,
            objects: plots.objects,
            names,
        }
    }

    /// Hit-testing for this layout, when the configuration and projection
    /// allow it
    pub fn tap_resolver(&self) -> Option<TapResolver<'_, Self>> {
        TapResolver::new(
            self.configuration.tap_effective_radius,
            self.projector(),
            self,
        )
    }
}

impl NearestObjectProvider for Layout {
    fn nearest_object(&self, location: DVec2) -> Option<(ObjectId, f64)> {
        let projector = self.projector();
        let mut nearest: Option<(ObjectId, f64)> = None;
        for object in self.objects.iter().map(SkyObject::as_object) {
            let Some(plot) = projector.project(object.position()) else {
                continue;
            };
            if !projector.is_near_view(plot) {
                continue;
            }
            let distance = plot.distance(location);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((object.id(), distance));
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::TextHandle;
    use crate::names::ResolvedText;
    use crate::plot::{CoordinateLine, Nebulosity, Star};
    use crate::types::{Angle, Position, Size};
    use glam::dvec2;

    fn view() -> ViewGeometry {
        ViewGeometry::try_new(
            Position::from_degrees(0.0, 0.0),
            Angle::from_degrees(90.0),
            Size::new(300.0, 300.0),
        )
        .expect("valid view")
    }

    fn measure(_name: &str) -> Option<ResolvedText> {
        Some(ResolvedText {
            handle: TextHandle(0),
            size: Size::new(24.0, 10.0),
        })
    }

    fn star(id: u64, ra: f64, dec: f64, magnitude: f64) -> SkyObject {
        Star::new(
            id,
            Position::from_degrees(ra, dec),
            magnitude,
            vec![format!("star {id}")],
        )
        .into()
    }

    #[test]
    fn objects_plot_brightest_first() {
        let layout = Layout::new(
            vec![
                star(1, 0.0, 0.0, 3.0),
                star(2, 5.0, 5.0, 1.0),
                star(3, -5.0, 5.0, 3.0),
            ],
            Vec::new(),
            Configuration::default(),
            view(),
        );
        let ids: Vec<_> = layout.build().objects.iter().map(|g| g.id).collect();
        assert_eq!(
            ids,
            vec![ObjectId::Entity(2), ObjectId::Entity(1), ObjectId::Entity(3)]
        );
    }

    #[test]
    fn milky_way_is_painted_first() {
        let band = Nebulosity::new(
            9,
            Position::from_degrees(0.0, 0.0),
            4.0,
            [(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0)]
                .into_iter()
                .map(|(ra, dec)| Position::from_degrees(ra, dec))
                .collect(),
            Vec::new(),
            Vec::new(),
        )
        .expect("valid band");
        let layout = Layout::new(
            vec![star(1, 0.0, 0.0, 1.0), band.into()],
            Vec::new(),
            Configuration::default(),
            view(),
        );
        let ids: Vec<_> = layout.build().objects.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![ObjectId::Entity(9), ObjectId::Entity(1)]);
    }

    #[test]
    fn names_can_be_turned_off() {
        let configuration = Configuration {
            show_names: false,
            ..Configuration::default()
        };
        let layout = Layout::new(
            vec![star(1, 0.0, 0.0, 1.0)],
            Vec::new(),
            configuration,
            view(),
        );
        let chart = layout.render(&mut measure);
        assert_eq!(chart.objects.len(), 1);
        assert!(chart.names.is_empty());
    }

    #[test]
    fn render_names_objects_and_grid() {
        let layout = Layout::new(
            vec![star(1, 10.0, 10.0, 1.0)],
            CoordinateLine::standard_longitudes(100)
                .into_iter()
                .map(Furniture::from)
                .collect(),
            Configuration::default(),
            view(),
        );
        let chart = layout.render(&mut measure);
        assert!(!chart.furniture.is_empty());
        assert_eq!(chart.objects.len(), 1);
        // the star's name plus at least one hour label on the boundary
        assert!(chart.names.len() >= 2, "{} names", chart.names.len());
    }

    #[test]
    fn nearest_object_is_reported_with_distance() {
        let layout = Layout::new(
            vec![star(1, 0.0, 0.0, 1.0), star(2, 60.0, 0.0, 1.0)],
            Vec::new(),
            Configuration::default(),
            view(),
        );
        let (id, distance) = layout
            .nearest_object(dvec2(153.0, 154.0))
            .expect("a star is in view");
        assert_eq!(id, ObjectId::Entity(1));
        assert!((distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn tap_resolver_uses_configured_radius() {
        let layout = Layout::new(
            vec![star(1, 0.0, 0.0, 1.0)],
            Vec::new(),
            Configuration::default(),
            view(),
        );
        let resolver = layout.tap_resolver().expect("gnomonic is reversible");
        let near = resolver.resolve_tap(dvec2(160.0, 150.0)).expect("resolves");
        assert_eq!(near.nearest_object, Some(ObjectId::Entity(1)));
        let far = resolver.resolve_tap(dvec2(250.0, 250.0)).expect("resolves");
        assert_eq!(far.nearest_object, None);

        let disabled = Layout::new(
            Vec::new(),
            Vec::new(),
            Configuration {
                tap_effective_radius: None,
                ..Configuration::default()
            },
            view(),
        );
        assert!(disabled.tap_resolver().is_none());
    }
}
