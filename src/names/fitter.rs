//! Greedy, priority-ordered name placement
//!
//! Entities are visited in the order given (brightest first). Each name is
//! measured, offered a list of candidate slots, and the candidates are
//! sorted into buckets by the strongest obscurement they run into:
//!
//! - `Always` shapes reject a candidate outright
//! - `Preferred` shapes push it into the secondary bucket
//! - everything else lands in the primary bucket
//!
//! The winner becomes a new label graphic that every later entity must
//! avoid. No placement is ever revisited.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{FittingStyle, NameEntry, NameStyle, ResolvedText, Slot, TextResolver};
use super::{boundary_slots, ring_slots};
use crate::defaults::NAME_BACKGROUND_PADDING;
use crate::graphic::{Graphic, ObjectId, Obscurement, RectangleShape, Shape, TextShape};
use crate::style::{ColorRole, Style};
use crate::types::{Rect, Size};

/// One fitting pass over a snapshot of chart graphics
#[derive(Debug, Clone)]
pub struct NamesFitter {
    entries: Vec<NameEntry>,
    /// Every graphic placed so far, labels included
    graphics: BTreeMap<ObjectId, Graphic>,
    view: Size,
    backgrounds: bool,
    next_label: u64,
}

impl NamesFitter {
    /// Prepare a pass; `entries` must already be in priority order
    ///
    /// Graphics sharing an id are merged, shapes appended in input order.
    pub fn new(
        entries: impl IntoIterator<Item = NameEntry>,
        graphics: impl IntoIterator<Item = Graphic>,
        view: Size,
    ) -> Self {
        let mut map: BTreeMap<ObjectId, Graphic> = BTreeMap::new();
        for graphic in graphics {
            match map.entry(graphic.id) {
                Entry::Vacant(slot) => {
                    slot.insert(graphic);
                }
                Entry::Occupied(mut existing) => {
                    crate::log::warn!(id = ?graphic.id, "merging graphics with duplicate id");
                    existing.get_mut().shapes.extend(graphic.shapes);
                }
            }
        }

        let next_label = map
            .keys()
            .filter_map(|id| match id {
                ObjectId::Label(n) => Some(n + 1),
                ObjectId::Entity(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            entries: entries.into_iter().collect(),
            graphics: map,
            view,
            backgrounds: false,
            next_label,
        }
    }

    /// Put a background rectangle behind every placed name
    pub fn with_backgrounds(mut self, enabled: bool) -> Self {
        self.backgrounds = enabled;
        self
    }

    /// Place every name that fits, returning the label graphics in
    /// placement order
    pub fn fit(mut self, resolver: &mut impl TextResolver) -> Vec<Graphic> {
        crate::log::debug!(
            entries = self.entries.len(),
            graphics = self.graphics.len(),
            "fitting names"
        );

        let entries = std::mem::take(&mut self.entries);
        let mut labels = Vec::new();

        for entry in &entries {
            if !self.graphics.contains_key(&entry.id) {
                crate::log::debug!(id = ?entry.id, "skipping entity without a visible graphic");
                continue;
            }
            for name in &entry.names {
                let Some(text) = resolver.resolve(name) else {
                    crate::log::debug!(name = %name, "name did not resolve to text");
                    continue;
                };
                if text.size.is_empty() {
                    crate::log::debug!(name = %name, "name measured as empty");
                    continue;
                }
                let Some(rect) = self.fit_name(entry, name, text.size) else {
                    crate::log::debug!(name = %name, "no room for name");
                    continue;
                };
                let label = self.label_graphic(rect, &text, &entry.style);
                self.graphics.insert(label.id, label.clone());
                labels.push(label);
            }
        }

        crate::log::debug!(placed = labels.len(), "names fitted");
        labels
    }

    fn fit_name(&self, entry: &NameEntry, name: &str, size: Size) -> Option<Rect> {
        let own = self.graphics.get(&entry.id)?;
        match entry.style.fitting {
            FittingStyle::Boundary => {
                let first = boundary_slots(own, size, self.view).into_iter().next()?;
                first
                    .rect
                    .is_within(&Rect::of_view(self.view))
                    .then_some(first.rect)
            }
            style @ (FittingStyle::Interior | FittingStyle::Exterior) => {
                let slots = ring_slots(own, size, name)?;
                self.fit_on_ring(own, style, &slots)
            }
        }
    }

    fn fit_on_ring(&self, own: &Graphic, style: FittingStyle, slots: &[Slot]) -> Option<Rect> {
        let bounds = Rect::of_view(self.view);
        let mut primary = Vec::new();
        let mut secondary = Vec::new();

        for slot in slots {
            let rect = slot.rect;
            if !rect.is_within(&bounds) {
                continue;
            }
            if style == FittingStyle::Exterior && own.overlaps(&rect) {
                continue;
            }
            match self.classify(&rect, own.id) {
                Some(Obscurement::Always) => {}
                Some(Obscurement::Preferred) => secondary.push(rect),
                Some(Obscurement::Never) | None => primary.push(rect),
            }
        }

        crate::log::trace!(
            id = ?own.id,
            primary = primary.len(),
            secondary = secondary.len(),
            "classified ring slots"
        );

        if primary.is_empty() {
            self.select(&secondary, own.id)
        } else {
            self.select(&primary, own.id)
        }
    }

    /// Strongest obscurement any other graphic imposes on `rect`
    fn classify(&self, rect: &Rect, excluding: ObjectId) -> Option<Obscurement> {
        let mut worst = None;
        for graphic in self.graphics.values().filter(|g| g.id != excluding) {
            let class = graphic.obscurement_of(rect);
            if class == Some(Obscurement::Always) {
                return class;
            }
            worst = worst.max(class);
        }
        worst
    }

    /// Pick the candidate in the most open space; earlier candidates win ties
    fn select(&self, candidates: &[Rect], own: ObjectId) -> Option<Rect> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ => {
                let mut best: Option<(Rect, f64)> = None;
                for rect in candidates {
                    let clearance = self.clearance(rect, own);
                    if best.is_none_or(|(_, most)| clearance > most) {
                        best = Some((*rect, clearance));
                    }
                }
                best.map(|(rect, _)| rect)
            }
        }
    }

    /// Squared distance from the centre of `rect` to the nearest shape
    /// midpoint of any other graphic (infinite when there is none)
    fn clearance(&self, rect: &Rect, own: ObjectId) -> f64 {
        let mid = rect.mid();
        self.graphics
            .values()
            .filter(|g| g.id != own)
            .flat_map(|g| g.midpoints())
            .map(|point| point.distance_squared(mid))
            .fold(f64::INFINITY, f64::min)
    }

    fn label_graphic(&mut self, rect: Rect, text: &ResolvedText, style: &NameStyle) -> Graphic {
        let id = ObjectId::Label(self.next_label);
        self.next_label += 1;

        let mut shapes: Vec<Shape> = Vec::with_capacity(2);
        if self.backgrounds {
            let background = style.text_background.unwrap_or(ColorRole::Background);
            shapes.push(
                RectangleShape::new(rect.enlarge(NAME_BACKGROUND_PADDING))
                    .with_styles([Style::fill(background)])
                    .with_obscurement(Obscurement::Always)
                    .into(),
            );
        }
        shapes.push(
            TextShape::new(rect, text.handle)
                .with_styles([Style::fill(style.text_color)])
                .with_obscurement(Obscurement::Always)
                .into(),
        );
        Graphic::new(id, shapes)
    }
}
