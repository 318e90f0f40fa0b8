//! Name placement
//!
//! This module is organized into submodules:
//! - `ring_slots`: Candidate rectangles around an object's glyph
//! - `boundary_slots`: Candidate rectangles where grid lines leave the view
//! - `fitter`: The greedy, priority-ordered placement pass
//!
//! Entities expose what placement needs through [`Nameable`]; those
//! capabilities are captured once into a [`NameEntry`] before fitting.

pub mod boundary_slots;
pub mod fitter;
pub mod ring_slots;

pub use boundary_slots::{Wall, boundary_slots};
pub use fitter::NamesFitter;
pub use ring_slots::ring_slots;

use glam::DVec2;

use crate::graphic::{ObjectId, TextHandle};
use crate::style::ColorRole;
use crate::types::{Rect, Size};

/// Where a name may sit relative to its owner's graphic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FittingStyle {
    /// Around the glyph, possibly over the owner's own shapes
    Interior,
    /// Around the glyph, never touching any of the owner's shapes
    #[default]
    Exterior,
    /// Against the view edge where the owner's lines leave the view
    Boundary,
}

/// Fitting style and colors for an entity's names
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameStyle {
    pub fitting: FittingStyle,
    pub text_color: ColorRole,
    /// Background behind the name; the chart background when `None`
    pub text_background: Option<ColorRole>,
}

impl NameStyle {
    pub fn new(fitting: FittingStyle, text_color: ColorRole) -> Self {
        Self {
            fitting,
            text_color,
            text_background: None,
        }
    }

    pub fn with_background(mut self, background: ColorRole) -> Self {
        self.text_background = Some(background);
        self
    }
}

impl Default for NameStyle {
    fn default() -> Self {
        Self::new(FittingStyle::Exterior, ColorRole::StarNameText)
    }
}

/// An entity whose names can be placed on the chart
pub trait Nameable {
    fn id(&self) -> ObjectId;

    /// Names in placement order; may be empty
    fn names(&self) -> &[String];

    fn name_style(&self) -> NameStyle {
        NameStyle::default()
    }
}

/// Text measured by the rendering layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedText {
    pub handle: TextHandle,
    pub size: Size,
}

/// Measures names; returning `None` skips the name
pub trait TextResolver {
    fn resolve(&mut self, name: &str) -> Option<ResolvedText>;
}

impl<F> TextResolver for F
where
    F: FnMut(&str) -> Option<ResolvedText>,
{
    fn resolve(&mut self, name: &str) -> Option<ResolvedText> {
        self(name)
    }
}

/// A nameable entity's capabilities, resolved once for a fitting pass
#[derive(Clone, Debug, PartialEq)]
pub struct NameEntry {
    pub id: ObjectId,
    pub names: Vec<String>,
    pub style: NameStyle,
}

impl NameEntry {
    pub fn new(id: ObjectId, names: Vec<String>, style: NameStyle) -> Self {
        Self { id, names, style }
    }

    pub fn from_nameable<N: Nameable + ?Sized>(nameable: &N) -> Self {
        Self::new(nameable.id(), nameable.names().to_vec(), nameable.name_style())
    }
}

/// A candidate rectangle and what generated it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub rect: Rect,
    pub origin: SlotOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotOrigin {
    /// Compass angle in degrees (0 is up) and the anchor pinned to the ring,
    /// as fractions of the label's width and height
    Ring { angle: u16, anchor: DVec2 },
    /// The view edge the slot is pressed against
    Boundary { wall: Wall },
}
