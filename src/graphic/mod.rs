//! Chart graphics: shapes grouped under one owner identity
//!
//! This module is organized into submodules:
//! - `shapes`: Shape types and the obscurement classes they impose
//! - `overlap`: Rectangle-vs-shape intersection predicates

pub mod overlap;
pub mod shapes;

pub use shapes::*;

use glam::DVec2;

use crate::types::Rect;

/// Owner identity of a [`Graphic`]
///
/// Placed labels live in their own namespace, so they can never collide
/// with (or be looked up by) the entity they name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectId {
    /// A catalog object or piece of chart furniture
    ///
    /// Objects and furniture share this namespace. Graphics that arrive
    /// at the names fitter under the same id are merged into one.
    Entity(u64),
    /// A label synthesized by the names fitter
    Label(u64),
}

/// An ordered list of shapes owned by one object, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub id: ObjectId,
    pub shapes: Vec<Shape>,
}

impl Graphic {
    pub fn new(id: ObjectId, shapes: Vec<Shape>) -> Self {
        Self { id, shapes }
    }

    /// Whether any shape overlaps `rect`, whatever its obscurement class
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.shapes.iter().any(|shape| shape.overlaps(rect))
    }

    /// The strongest obscurement class among shapes overlapping `rect`,
    /// or `None` when nothing overlaps
    pub fn obscurement_of(&self, rect: &Rect) -> Option<Obscurement> {
        let mut worst = None;
        for shape in &self.shapes {
            if shape.overlaps(rect) {
                let class = shape.obscurement();
                if class == Obscurement::Always {
                    return Some(class);
                }
                worst = worst.max(Some(class));
            }
        }
        worst
    }

    /// The circle with the largest radius (the first one on ties)
    pub fn largest_circle(&self) -> Option<&CircleShape> {
        self.shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle(circle) => Some(circle),
                _ => None,
            })
            .fold(None, |best: Option<&CircleShape>, circle| match best {
                Some(b) if b.radius >= circle.radius => Some(b),
                _ => Some(circle),
            })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineShape> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn midpoints(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.shapes.iter().filter_map(|shape| shape.midpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn star_with_aura() -> Graphic {
        Graphic::new(
            ObjectId::Entity(1),
            vec![
                CircleShape::new(dvec2(50.0, 50.0), 6.0)
                    .with_obscurement(Obscurement::Never)
                    .into(),
                CircleShape::new(dvec2(50.0, 50.0), 5.0)
                    .with_obscurement(Obscurement::Always)
                    .into(),
                LineShape::new(dvec2(0.0, 80.0), dvec2(100.0, 80.0))
                    .with_obscurement(Obscurement::Preferred)
                    .into(),
            ],
        )
    }

    #[test]
    fn obscurement_reports_worst_overlapping_class() {
        let g = star_with_aura();
        assert_eq!(g.obscurement_of(&Rect::new(0.0, 0.0, 10.0, 10.0)), None);
        assert_eq!(
            g.obscurement_of(&Rect::new(55.5, 49.0, 10.0, 2.0)),
            Some(Obscurement::Never)
        );
        assert_eq!(
            g.obscurement_of(&Rect::new(10.0, 75.0, 10.0, 10.0)),
            Some(Obscurement::Preferred)
        );
        assert_eq!(
            g.obscurement_of(&Rect::new(45.0, 45.0, 40.0, 40.0)),
            Some(Obscurement::Always)
        );
    }

    #[test]
    fn overlaps_ignores_class() {
        let g = star_with_aura();
        assert!(g.overlaps(&Rect::new(55.5, 49.0, 10.0, 2.0)));
        assert!(!g.overlaps(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn largest_circle_prefers_first_on_ties() {
        let g = Graphic::new(
            ObjectId::Entity(2),
            vec![
                CircleShape::new(dvec2(1.0, 1.0), 3.0).into(),
                CircleShape::new(dvec2(2.0, 2.0), 3.0).into(),
                CircleShape::new(dvec2(3.0, 3.0), 2.0).into(),
            ],
        );
        assert_eq!(g.largest_circle().map(|c| c.center), Some(dvec2(1.0, 1.0)));
        assert!(
            Graphic::new(ObjectId::Entity(3), Vec::new())
                .largest_circle()
                .is_none()
        );
    }

    #[test]
    fn label_ids_sort_after_entities() {
        assert!(ObjectId::Entity(u64::MAX) < ObjectId::Label(0));
    }
}
