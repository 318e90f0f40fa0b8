//! Coordinate circles sampled through the projector
//!
//! A circle of constant declination (latitude) or constant right ascension
//! (longitude) is sampled at fixed steps. Consecutive visible samples form
//! runs, and each run of two or more samples becomes a chain of line shapes.

use glam::DVec2;

use crate::defaults::GRID_LINE_WIDTH;
use crate::graphic::{Graphic, LineShape, ObjectId, Obscurement, Shape};
use crate::projection::Projector;
use crate::style::{ColorRole, Style};
use crate::types::{Angle, Position};

/// Which coordinate a circle holds fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sense {
    /// Fixed declination, right ascension swept through 0°..=360° every 3°
    Latitude,
    /// Fixed right ascension, declination swept through -80°..=80° every 10°
    Longitude,
}

impl Sense {
    /// The swept angles, in sampling order
    pub fn sweep(self) -> impl Iterator<Item = Angle> {
        let (steps, step_degrees) = match self {
            Sense::Latitude => (0..=120, 3.0),
            Sense::Longitude => (-8..=8, 10.0),
        };
        steps.map(move |i| Angle::from_degrees(i as f64 * step_degrees))
    }

    fn position(self, fixed: Angle, swept: Angle) -> Position {
        match self {
            Sense::Latitude => Position::new(swept, fixed),
            Sense::Longitude => Position::new(fixed, swept),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreatCircle {
    pub angle: Angle,
    pub sense: Sense,
}

impl GreatCircle {
    pub fn new(angle: Angle, sense: Sense) -> Self {
        Self { angle, sense }
    }

    pub fn samples(&self) -> impl Iterator<Item = Position> + '_ {
        self.sense
            .sweep()
            .map(move |swept| self.sense.position(self.angle, swept))
    }

    /// Line shapes for every visible stretch of the circle
    pub fn plot_shapes(&self, projector: &dyn Projector) -> Vec<Shape> {
        let plots = self.samples().map(|position| projector.project(position));
        visible_runs(plots)
            .iter()
            .flat_map(|run| run_lines(run))
            .map(Shape::from)
            .collect()
    }

    pub fn plot_graphic(&self, id: ObjectId, projector: &dyn Projector) -> Graphic {
        Graphic::new(id, self.plot_shapes(projector))
    }
}

/// Split a sample sequence into maximal runs of projectable points
///
/// Runs shorter than two points cannot form a line and are dropped.
pub fn visible_runs(plots: impl IntoIterator<Item = Option<DVec2>>) -> Vec<Vec<DVec2>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    // trailing sentinel flushes the last run
    for plot in plots.into_iter().chain(std::iter::once(None)) {
        match plot {
            Some(point) => current.push(point),
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    runs
}

/// One grid line shape per consecutive pair of points in a run
pub fn run_lines(run: &[DVec2]) -> impl Iterator<Item = LineShape> + '_ {
    run.windows(2).map(|pair| {
        LineShape::new(pair[0], pair[1])
            .with_styles([Style::stroke(GRID_LINE_WIDTH, ColorRole::CoordinateLines)])
            .with_obscurement(Obscurement::Preferred)
    })
}
