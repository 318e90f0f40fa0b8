//! Shape types that make up a [`Graphic`](super::Graphic)
//!
//! Each shape is its own type that knows how to:
//! - Report the obscurement class it imposes on labels
//! - Test itself against a candidate label rectangle
//! - Give the midpoint used by the open-space heuristic

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::overlap;
use crate::style::Style;
use crate::types::Rect;

/// How strongly a shape blocks label placement
///
/// Ordered from weakest to strongest, so the worst class among several
/// overlapping shapes is their maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Obscurement {
    /// Never blocks; the label may be drawn over it
    #[default]
    Never,
    /// Soft conflict; candidates over it are only used as a fallback
    Preferred,
    /// Opaque; candidates over it are rejected outright
    Always,
}

/// Opaque token identifying measured text in the rendering layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextHandle(pub u64);

/// Common behavior for all shapes
#[enum_dispatch]
pub trait ShapeGeometry {
    fn obscurement(&self) -> Obscurement;

    fn styles(&self) -> &[Style];

    /// Whether the shape geometrically overlaps `rect`
    fn overlaps(&self, rect: &Rect) -> bool;

    /// Representative point of the shape, if it has any extent at all
    fn midpoint(&self) -> Option<DVec2>;
}

/// A shape enum wrapping all shape types
#[enum_dispatch(ShapeGeometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectangleShape),
    Line(LineShape),
    Circle(CircleShape),
    Polygon(PolygonShape),
    Cutout(CutoutShape),
    Text(TextShape),
}

macro_rules! shape_builders {
    ($ty:ident) => {
        impl $ty {
            pub fn with_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
                self.styles = styles.into_iter().collect();
                self
            }

            pub fn with_obscurement(mut self, obscurement: Obscurement) -> Self {
                self.obscurement = obscurement;
                self
            }
        }
    };
}

// ============================================================================
// Shape Types
// ============================================================================

/// A filled or stroked rectangle (label backgrounds)
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub rect: Rect,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl RectangleShape {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(RectangleShape);

impl ShapeGeometry for RectangleShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_rect(rect, &self.rect)
    }

    fn midpoint(&self) -> Option<DVec2> {
        Some(self.rect.mid())
    }
}

/// A straight segment
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: DVec2,
    pub finish: DVec2,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl LineShape {
    pub fn new(start: DVec2, finish: DVec2) -> Self {
        Self {
            start,
            finish,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(LineShape);

impl ShapeGeometry for LineShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_segment(rect, self.start, self.finish)
    }

    fn midpoint(&self) -> Option<DVec2> {
        Some((self.start + self.finish) * 0.5)
    }
}

/// A circle (star and planet glyphs, auras, cluster outlines)
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: DVec2,
    pub radius: f64,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl CircleShape {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(CircleShape);

impl ShapeGeometry for CircleShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_circle(rect, self.center, self.radius)
    }

    fn midpoint(&self) -> Option<DVec2> {
        Some(self.center)
    }
}

/// A closed outline
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub vertices: Vec<DVec2>,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl PolygonShape {
    pub fn new(vertices: Vec<DVec2>) -> Self {
        Self {
            vertices,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(PolygonShape);

impl ShapeGeometry for PolygonShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_polygon(rect, &self.vertices)
    }

    fn midpoint(&self) -> Option<DVec2> {
        vertex_average(&self.vertices)
    }
}

/// A closed outline with holes (milky way bands)
///
/// Overlap only considers the outer outline, so a label inside a hole still
/// counts as overlapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoutShape {
    pub vertices: Vec<DVec2>,
    pub cutouts: Vec<Vec<DVec2>>,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl CutoutShape {
    pub fn new(vertices: Vec<DVec2>, cutouts: Vec<Vec<DVec2>>) -> Self {
        Self {
            vertices,
            cutouts,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(CutoutShape);

impl ShapeGeometry for CutoutShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_polygon(rect, &self.vertices)
    }

    fn midpoint(&self) -> Option<DVec2> {
        vertex_average(&self.vertices)
    }
}

/// Measured text placed at a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub rect: Rect,
    pub text: TextHandle,
    pub styles: Vec<Style>,
    pub obscurement: Obscurement,
}

impl TextShape {
    pub fn new(rect: Rect, text: TextHandle) -> Self {
        Self {
            rect,
            text,
            styles: Vec::new(),
            obscurement: Obscurement::default(),
        }
    }
}

shape_builders!(TextShape);

impl ShapeGeometry for TextShape {
    fn obscurement(&self) -> Obscurement {
        self.obscurement
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        overlap::rect_overlaps_rect(rect, &self.rect)
    }

    fn midpoint(&self) -> Option<DVec2> {
        Some(self.rect.mid())
    }
}

fn vertex_average(vertices: &[DVec2]) -> Option<DVec2> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(dvec2(0.0, 0.0), |acc, v| acc + *v);
    Some(sum / vertices.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorRole;

    #[test]
    fn obscurement_orders_by_strength() {
        assert!(Obscurement::Never < Obscurement::Preferred);
        assert!(Obscurement::Preferred < Obscurement::Always);
        assert_eq!(
            [Obscurement::Preferred, Obscurement::Never].into_iter().max(),
            Some(Obscurement::Preferred)
        );
    }

    #[test]
    fn builders_set_styles_and_class() {
        let circle = CircleShape::new(dvec2(1.0, 2.0), 3.0)
            .with_styles([Style::fill(ColorRole::Star)])
            .with_obscurement(Obscurement::Always);
        assert_eq!(circle.styles, vec![Style::fill(ColorRole::Star)]);
        assert_eq!(circle.obscurement, Obscurement::Always);
    }

    #[test]
    fn shape_dispatches_to_variant() {
        let shape: Shape = LineShape::new(dvec2(0.0, 0.0), dvec2(10.0, 0.0))
            .with_obscurement(Obscurement::Preferred)
            .into();
        assert_eq!(shape.obscurement(), Obscurement::Preferred);
        assert_eq!(shape.midpoint(), Some(dvec2(5.0, 0.0)));
        assert!(shape.overlaps(&Rect::new(4.0, -1.0, 2.0, 2.0)));
        assert!(!shape.overlaps(&Rect::new(4.0, 1.0, 2.0, 2.0)));
    }

    #[test]
    fn polygon_midpoint_is_vertex_average() {
        let square = PolygonShape::new(vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(4.0, 4.0),
            dvec2(0.0, 4.0),
        ]);
        assert_eq!(square.midpoint(), Some(dvec2(2.0, 2.0)));
        assert_eq!(PolygonShape::new(Vec::new()).midpoint(), None);
    }

    #[test]
    fn cutout_overlap_ignores_holes() {
        let band = CutoutShape::new(
            vec![
                dvec2(0.0, 0.0),
                dvec2(100.0, 0.0),
                dvec2(100.0, 100.0),
                dvec2(0.0, 100.0),
            ],
            vec![vec![
                dvec2(40.0, 40.0),
                dvec2(60.0, 40.0),
                dvec2(60.0, 60.0),
                dvec2(40.0, 60.0),
            ]],
        );
        assert!(band.overlaps(&Rect::new(45.0, 45.0, 5.0, 5.0)));
    }

    #[test]
    fn text_overlaps_like_its_rect() {
        let text = TextShape::new(Rect::new(0.0, 0.0, 20.0, 10.0), TextHandle(7));
        assert!(text.overlaps(&Rect::new(19.0, 9.0, 5.0, 5.0)));
        assert!(!text.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert_eq!(text.midpoint(), Some(dvec2(10.0, 5.0)));
    }
}
