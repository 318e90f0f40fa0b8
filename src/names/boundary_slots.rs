//! Candidate slots where an owner's lines leave the view
//!
//! Grid line names are pressed against the view edge at the point where the
//! line crosses it, centred on the crossing and slid along the edge until
//! the whole label is inside the view.

use glam::{DVec2, dvec2};

use super::{Slot, SlotOrigin};
use crate::graphic::{Graphic, overlap};
use crate::types::{Rect, Size};

/// An edge of the view, named by screen direction (north is the top)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    /// The wall as a segment of the view rectangle `[0,w]×[0,h]`
    pub fn segment(self, view: Size) -> (DVec2, DVec2) {
        match self {
            Wall::North => (dvec2(0.0, 0.0), dvec2(view.w, 0.0)),
            Wall::East => (dvec2(view.w, 0.0), dvec2(view.w, view.h)),
            Wall::South => (dvec2(0.0, view.h), dvec2(view.w, view.h)),
            Wall::West => (dvec2(0.0, 0.0), dvec2(0.0, view.h)),
        }
    }

    /// A label rectangle flush against this wall, centred on `crossing`
    /// along the wall and kept inside the view
    fn slot_rect(self, crossing: DVec2, name_size: Size, view: Size) -> Rect {
        let (x, y) = match self {
            Wall::North => (position(crossing.x, name_size.w, 0.0, view.w), 0.0),
            Wall::South => (
                position(crossing.x, name_size.w, 0.0, view.w),
                view.h - name_size.h,
            ),
            Wall::East => (
                view.w - name_size.w,
                position(crossing.y, name_size.h, 0.0, view.h),
            ),
            Wall::West => (0.0, position(crossing.y, name_size.h, 0.0, view.h)),
        };
        Rect::new(x, y, name_size.w, name_size.h)
    }
}

/// Centre `extent` on `center`, then clamp into `[min, max]`
fn position(center: f64, extent: f64, min: f64, max: f64) -> f64 {
    let mut pos = center - extent / 2.0;
    if pos + extent > max {
        pos = max - extent;
    }
    if pos < min {
        pos = min;
    }
    pos
}

/// Every point where a line of `graphic` crosses a wall, in shape order and
/// then wall order
pub fn wall_crossings(graphic: &Graphic, view: Size) -> Vec<(Wall, DVec2)> {
    graphic
        .lines()
        .flat_map(|line| {
            Wall::ALL.into_iter().filter_map(move |wall| {
                let (a, b) = wall.segment(view);
                overlap::segment_intersection(line.start, line.finish, a, b)
                    .map(|point| (wall, point))
            })
        })
        .collect()
}

/// One slot per wall crossing of the owner's lines
pub fn boundary_slots(graphic: &Graphic, name_size: Size, view: Size) -> Vec<Slot> {
    wall_crossings(graphic, view)
        .into_iter()
        .map(|(wall, crossing)| Slot {
            rect: wall.slot_rect(crossing, name_size, view),
            origin: SlotOrigin::Boundary { wall },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::{LineShape, ObjectId};

    fn grid_line(start: DVec2, finish: DVec2) -> Graphic {
        Graphic::new(ObjectId::Entity(7), vec![LineShape::new(start, finish).into()])
    }

    fn describe(slots: &[Slot]) -> String {
        slots
            .iter()
            .map(|slot| {
                let wall = match slot.origin {
                    SlotOrigin::Boundary { wall } => format!("{wall:?}"),
                    SlotOrigin::Ring { .. } => "ring".to_string(),
                };
                let r = slot.rect;
                format!(
                    "{wall} x={} y={} w={} h={}",
                    r.min_x(),
                    r.min_y(),
                    r.width(),
                    r.height()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn east_crossing_is_flush_and_centred() {
        let view = Size::new(300.0, 300.0);
        let line = grid_line(dvec2(250.0, 150.0), dvec2(350.0, 150.0));
        let slots = boundary_slots(&line, Size::new(30.0, 12.0), view);
        insta::assert_snapshot!(describe(&slots), @"East x=270 y=144 w=30 h=12");
    }

    #[test]
    fn crossing_near_corner_is_clamped() {
        let view = Size::new(300.0, 300.0);
        let line = grid_line(dvec2(-20.0, 4.0), dvec2(20.0, 4.0));
        let slots = boundary_slots(&line, Size::new(30.0, 12.0), view);
        insta::assert_snapshot!(describe(&slots), @"West x=0 y=0 w=30 h=12");
    }

    #[test]
    fn line_leaving_through_two_walls() {
        let view = Size::new(200.0, 100.0);
        let line = grid_line(dvec2(100.0, -50.0), dvec2(100.0, 150.0));
        let slots = boundary_slots(&line, Size::new(20.0, 10.0), view);
        insta::assert_snapshot!(describe(&slots), @r"
        North x=90 y=0 w=20 h=10
        South x=90 y=90 w=20 h=10
        ");
    }

    #[test]
    fn line_inside_view_has_no_slots() {
        let view = Size::new(300.0, 300.0);
        let line = grid_line(dvec2(10.0, 10.0), dvec2(290.0, 290.0));
        assert!(boundary_slots(&line, Size::new(30.0, 12.0), view).is_empty());
    }

    #[test]
    fn position_clamps_both_ends() {
        assert_eq!(position(150.0, 12.0, 0.0, 300.0), 144.0);
        assert_eq!(position(298.0, 12.0, 0.0, 300.0), 288.0);
        assert_eq!(position(2.0, 12.0, 0.0, 300.0), 0.0);
        // wider than the range: pinned to the start
        assert_eq!(position(50.0, 400.0, 0.0, 300.0), 0.0);
    }
}
