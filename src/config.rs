//! Chart configuration

use crate::defaults::TAP_EFFECTIVE_RADIUS;
use crate::projection::Projection;
use crate::style::ColorScheme;

/// Options that shape one chart layout
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub projection: Projection,
    /// Run the names fitter at all
    pub show_names: bool,
    /// Put a background rectangle behind every placed name
    pub show_name_backgrounds: bool,
    /// Draw a background-colored halo around stars and planets
    pub show_star_aura: bool,
    /// Stroke the outline of milky way bands
    pub show_milky_way_border: bool,
    /// Hit-testing radius in pixels; `None` disables nearest-object lookup
    pub tap_effective_radius: Option<f64>,
    pub color_scheme: ColorScheme,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            projection: Projection::Gnomonic,
            show_names: true,
            show_name_backgrounds: false,
            show_star_aura: false,
            show_milky_way_border: false,
            tap_effective_radius: Some(TAP_EFFECTIVE_RADIUS),
            color_scheme: ColorScheme::standard(),
        }
    }
}
