//! Candidate slots on a ring around an object's glyph
//!
//! The ring sits one pixel outside the largest circle of the owner's
//! graphic. Sixteen compass angles each pin one to three anchor points of
//! the label box to the ring, chosen so the box grows away from the glyph.

use glam::{DVec2, dvec2};

use super::{Slot, SlotOrigin};
use crate::defaults::NAME_SLOT_CLEARANCE;
use crate::graphic::Graphic;
use crate::types::{Rect, Size};

const ABOVE: &[(f64, f64)] = &[(0.25, 1.0), (0.75, 1.0), (0.5, 1.0)];
const UPPER_RIGHT: &[(f64, f64)] = &[(0.0, 1.0), (0.0, 0.75)];
const RIGHT: &[(f64, f64)] = &[(0.0, 0.5)];
const LOWER_RIGHT: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 0.25)];
const BELOW: &[(f64, f64)] = &[(0.25, 0.0), (0.75, 0.0), (0.5, 0.0)];
const LOWER_LEFT: &[(f64, f64)] = &[(1.0, 0.25), (1.0, 0.0)];
const LEFT: &[(f64, f64)] = &[(1.0, 0.5)];
const UPPER_LEFT: &[(f64, f64)] = &[(1.0, 0.75), (1.0, 1.0)];

/// Compass angles (degrees from straight up, clockwise) with their anchors
const RING: [(u16, &[(f64, f64)]); 16] = [
    (0, ABOVE),
    (30, UPPER_RIGHT),
    (45, UPPER_RIGHT),
    (60, UPPER_RIGHT),
    (90, RIGHT),
    (120, LOWER_RIGHT),
    (135, LOWER_RIGHT),
    (150, LOWER_RIGHT),
    (180, BELOW),
    (210, LOWER_LEFT),
    (225, LOWER_LEFT),
    (240, LOWER_LEFT),
    (270, LEFT),
    (300, UPPER_LEFT),
    (315, UPPER_LEFT),
    (330, UPPER_LEFT),
];

/// 64-bit FNV-1a over the UTF-8 bytes of `name`
pub fn name_hash(name: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    name.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

/// Index of the compass angle a name starts its search at
pub fn ring_rotation(name: &str) -> usize {
    (name_hash(name) % RING.len() as u64) as usize
}

/// Candidate rectangles around the largest circle of `graphic`, in search
/// order for `name`
///
/// Returns `None` when the graphic has no circle to anchor on.
pub fn ring_slots(graphic: &Graphic, name_size: Size, name: &str) -> Option<Vec<Slot>> {
    let circle = graphic.largest_circle()?;
    let center = circle.center;
    let radius = circle.radius + NAME_SLOT_CLEARANCE;

    let slots = RING
        .iter()
        .cycle()
        .skip(ring_rotation(name))
        .take(RING.len())
        .flat_map(|&(angle, anchors)| {
            let alpha = (f64::from(angle) - 90.0).to_radians();
            let ring_point = center + radius * DVec2::new(alpha.cos(), alpha.sin());
            anchors.iter().map(move |&(ax, ay)| Slot {
                rect: Rect::new(
                    ring_point.x - ax * name_size.w,
                    ring_point.y - ay * name_size.h,
                    name_size.w,
                    name_size.h,
                ),
                origin: SlotOrigin::Ring {
                    angle,
                    anchor: dvec2(ax, ay),
                },
            })
        })
        .collect();
    Some(slots)
}
