//! Default sizes and settings (all in screen pixels)

/// Extra band around the view inside which plots still count as visible
pub const NEAR_VIEW_MARGIN: f64 = 30.0;

/// Gap between a glyph's circle and the ring its name slots sit on
pub const NAME_SLOT_CLEARANCE: f64 = 1.0;
/// Padding of a name's background rectangle around its text
pub const NAME_BACKGROUND_PADDING: f64 = 1.0;

/// Width of the background-colored halo around stars and planets
pub const AURA_WIDTH: f64 = 1.0;
/// Smallest radius a cluster is drawn with
pub const MIN_CLUSTER_RADIUS: f64 = 4.0;

pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const PATTERN_LINE_WIDTH: f64 = 1.0;
pub const THIN_LINE_WIDTH: f64 = 0.5;
/// Stroke of the wings drawn beside double stars
pub const STAR_WING_WIDTH: f64 = 1.0;

/// Default tap radius for hit-testing, in pixels
pub const TAP_EFFECTIVE_RADIUS: f64 = 20.0;
