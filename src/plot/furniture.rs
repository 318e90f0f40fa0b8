//! Chart furniture: coordinate grid lines and constellation patterns

use glam::dvec2;

use super::{GreatCircle, Plottable, Sense};
use crate::config::Configuration;
use crate::defaults::PATTERN_LINE_WIDTH;
use crate::graphic::{Graphic, LineShape, ObjectId, Obscurement, Shape};
use crate::names::{FittingStyle, NameStyle, Nameable};
use crate::projection::Projector;
use crate::style::{ColorRole, Style};
use crate::types::{Angle, Position};

/// Anything drawn on the chart that is not a catalog object
#[derive(Clone, Debug, PartialEq)]
pub enum Furniture {
    CoordinateLine(CoordinateLine),
    ConstellationPattern(ConstellationPattern),
}

impl Furniture {
    pub fn id(&self) -> ObjectId {
        match self {
            Furniture::CoordinateLine(line) => line.id(),
            Furniture::ConstellationPattern(pattern) => ObjectId::Entity(pattern.id),
        }
    }

    /// The naming capability, for furniture that carries names
    pub fn as_nameable(&self) -> Option<&dyn Nameable> {
        match self {
            Furniture::CoordinateLine(line) => Some(line),
            Furniture::ConstellationPattern(_) => None,
        }
    }
}

impl Plottable for Furniture {
    fn plot(&self, projector: &dyn Projector, configuration: &Configuration) -> Option<Graphic> {
        match self {
            Furniture::CoordinateLine(line) => line.plot(projector, configuration),
            Furniture::ConstellationPattern(pattern) => pattern.plot(projector, configuration),
        }
    }
}

impl From<CoordinateLine> for Furniture {
    fn from(line: CoordinateLine) -> Self {
        Furniture::CoordinateLine(line)
    }
}

impl From<ConstellationPattern> for Furniture {
    fn from(pattern: ConstellationPattern) -> Self {
        Furniture::ConstellationPattern(pattern)
    }
}

// ============================================================================
// Coordinate lines
// ============================================================================

/// One line of constant declination or right ascension
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateLine {
    pub id: u64,
    pub sense: Sense,
    pub coordinate: Angle,
    pub names: Vec<String>,
}

impl CoordinateLine {
    pub fn new(id: u64, sense: Sense, coordinate: Angle, names: Vec<String>) -> Self {
        Self {
            id,
            sense,
            coordinate,
            names,
        }
    }

    /// Declinations -90°..=90° every 10°, with ids counting up from
    /// `first_id`
    ///
    /// Uses the 19 ids `first_id..first_id + 19`; keep them clear of every
    /// other object and line in the same layout.
    pub fn standard_latitudes(first_id: u64) -> Vec<CoordinateLine> {
        (-9..=9)
            .zip(first_id..)
            .map(|(step, id)| {
                let degrees = step * 10;
                CoordinateLine::new(
                    id,
                    Sense::Latitude,
                    Angle::from_degrees(f64::from(degrees)),
                    vec![format!("{degrees}°")],
                )
            })
            .collect()
    }

    /// Right ascensions 0h..=23h, with ids counting up from `first_id`
    ///
    /// Uses the 24 ids `first_id..first_id + 24`.
    pub fn standard_longitudes(first_id: u64) -> Vec<CoordinateLine> {
        (0..24)
            .zip(first_id..)
            .map(|(hour, id)| {
                CoordinateLine::new(
                    id,
                    Sense::Longitude,
                    Angle::from_degrees(f64::from(hour * 15)),
                    vec![format!("{hour}h")],
                )
            })
            .collect()
    }
}

impl Nameable for CoordinateLine {
    fn id(&self) -> ObjectId {
        ObjectId::Entity(self.id)
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn name_style(&self) -> NameStyle {
        NameStyle::new(FittingStyle::Boundary, ColorRole::CoordinateText)
            .with_background(ColorRole::CoordinateTextBackground)
    }
}

impl Plottable for CoordinateLine {
    fn plot(&self, projector: &dyn Projector, _configuration: &Configuration) -> Option<Graphic> {
        let graphic =
            GreatCircle::new(self.coordinate, self.sense).plot_graphic(self.id(), projector);
        (!graphic.shapes.is_empty()).then_some(graphic)
    }
}

// ============================================================================
// Constellation patterns
// ============================================================================

/// Stick figure joining pairs of stars
#[derive(Clone, Debug, PartialEq)]
pub struct ConstellationPattern {
    pub id: u64,
    pub segments: Vec<(Position, Position)>,
}

impl ConstellationPattern {
    pub fn new(id: u64, segments: Vec<(Position, Position)>) -> Self {
        Self { id, segments }
    }
}

impl Plottable for ConstellationPattern {
    fn plot(&self, projector: &dyn Projector, _configuration: &Configuration) -> Option<Graphic> {
        let shapes: Vec<Shape> = self
            .segments
            .iter()
            .filter_map(|&(from, to)| {
                let start = projector.project(from)?;
                let finish = projector.project(to)?;
                if !(projector.is_near_view(start) || projector.is_near_view(finish)) {
                    return None;
                }
                Some(
                    LineShape::new(
                        dvec2(start.x.trunc(), start.y.trunc()),
                        dvec2(finish.x.trunc(), finish.y.trunc()),
                    )
                    .with_styles([Style::stroke(
                        PATTERN_LINE_WIDTH,
                        ColorRole::ConstellationPattern,
                    )])
                    .with_obscurement(Obscurement::Preferred)
                    .into(),
                )
            })
            .collect();

        if shapes.is_empty() {
            return None;
        }
        Some(Graphic::new(ObjectId::Entity(self.id), shapes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::ShapeGeometry;
    use crate::projection::{GnomonicProjector, ViewGeometry};
    use crate::types::Size;

    fn projector() -> GnomonicProjector {
        let view = ViewGeometry::try_new(
            Position::from_degrees(0.0, 0.0),
            Angle::from_degrees(90.0),
            Size::new(300.0, 300.0),
        )
        .expect("valid view");
        GnomonicProjector::new(&view)
    }

    #[test]
    fn standard_latitude_names() {
        let lines = CoordinateLine::standard_latitudes(100);
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0].names, vec!["-90°".to_string()]);
        assert_eq!(lines[9].names, vec!["0°".to_string()]);
        assert_eq!(lines[18].names, vec!["90°".to_string()]);
        assert_eq!(lines[18].id, 118);
        assert!(lines.iter().all(|l| l.sense == Sense::Latitude));
    }

    #[test]
    fn standard_longitude_names() {
        let lines = CoordinateLine::standard_longitudes(0);
        assert_eq!(lines.len(), 24);
        assert_eq!(lines[1].names, vec!["1h".to_string()]);
        assert!((lines[23].coordinate.degrees() - 345.0).abs() < 1e-9);
        assert_eq!(lines[23].names, vec!["23h".to_string()]);
    }

    #[test]
    fn standard_grids_claim_contiguous_id_ranges() {
        let latitudes: Vec<_> = CoordinateLine::standard_latitudes(100)
            .iter()
            .map(|l| l.id)
            .collect();
        let longitudes: Vec<_> = CoordinateLine::standard_longitudes(119)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(latitudes, (100..119).collect::<Vec<_>>());
        assert_eq!(longitudes, (119..143).collect::<Vec<_>>());
    }

    #[test]
    fn coordinate_lines_are_named_on_the_boundary() {
        let line = CoordinateLine::new(1, Sense::Latitude, Angle::ZERO, vec!["0°".into()]);
        let style = line.name_style();
        assert_eq!(style.fitting, FittingStyle::Boundary);
        assert_eq!(style.text_color, ColorRole::CoordinateText);
        assert_eq!(
            style.text_background,
            Some(ColorRole::CoordinateTextBackground)
        );
    }

    #[test]
    fn equator_plots_through_the_centre() {
        let line = CoordinateLine::new(3, Sense::Latitude, Angle::ZERO, Vec::new());
        let graphic = line
            .plot(&projector(), &Configuration::default())
            .expect("equator is visible");
        assert_eq!(graphic.id, ObjectId::Entity(3));
        assert!(graphic.lines().all(|l| (l.start.y - 150.0).abs() < 1e-9));
    }

    #[test]
    fn pattern_lines_are_truncated_soft_obstacles() {
        let pattern = ConstellationPattern::new(
            8,
            vec![(
                Position::from_degrees(0.0, 0.0),
                Position::from_degrees(-1.0, 1.0),
            )],
        );
        let graphic = pattern
            .plot(&projector(), &Configuration::default())
            .expect("visible");
        let line = graphic.lines().next().expect("one line");
        assert_eq!(line.start, dvec2(150.0, 150.0));
        assert_eq!(line.finish, dvec2(line.finish.x.trunc(), line.finish.y.trunc()));
        assert_eq!(graphic.shapes[0].obscurement(), Obscurement::Preferred);
    }

    #[test]
    fn pattern_needs_one_end_near_the_view() {
        let far = ConstellationPattern::new(
            8,
            vec![(
                Position::from_degrees(70.0, 0.0),
                Position::from_degrees(75.0, 5.0),
            )],
        );
        assert!(far.plot(&projector(), &Configuration::default()).is_none());

        let half_in = ConstellationPattern::new(
            9,
            vec![(
                Position::from_degrees(0.0, 0.0),
                Position::from_degrees(75.0, 5.0),
            )],
        );
        assert!(half_in.plot(&projector(), &Configuration::default()).is_some());
    }

    #[test]
    fn furniture_exposes_names_only_for_coordinate_lines() {
        let line: Furniture =
            CoordinateLine::new(1, Sense::Longitude, Angle::ZERO, vec!["0h".into()]).into();
        let pattern: Furniture = ConstellationPattern::new(2, Vec::new()).into();
        assert!(line.as_nameable().is_some());
        assert!(pattern.as_nameable().is_none());
        assert_eq!(pattern.id(), ObjectId::Entity(2));
    }
}
