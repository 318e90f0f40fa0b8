//! Colors and drawing styles attached to shapes.
//!
//! Shapes never carry concrete colors. They name a [`ColorRole`] which the
//! rendering layer resolves through a [`ColorScheme`], so one layout can be
//! drawn under different themes.

use std::fmt;

/// Simple color model
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// A slot in the color scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    ConstellationPattern,
    CoordinateLines,
    CoordinateText,
    CoordinateTextBackground,
    Star,
    Planet,
    StarNameText,
    ClusterNameText,
    ClusterBorder,
    ClusterInterior,
    PlanetaryNebulaName,
    PlanetaryNebula,
    MilkyWayBorder,
    /// Milky way interior shading for magnitude bands 0 through 4
    MilkyWayInterior(MilkyWayBand),
}

/// Whole-magnitude brightness band of a nebulosity outline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MilkyWayBand {
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl MilkyWayBand {
    /// Map an exact whole magnitude to its band
    pub fn from_magnitude(magnitude: f64) -> Option<Self> {
        // exact comparisons: bands are catalog categories, not measurements
        [
            (0.0, MilkyWayBand::Zero),
            (1.0, MilkyWayBand::One),
            (2.0, MilkyWayBand::Two),
            (3.0, MilkyWayBand::Three),
            (4.0, MilkyWayBand::Four),
        ]
        .into_iter()
        .find(|(m, _)| *m == magnitude)
        .map(|(_, band)| band)
    }
}

/// Concrete colors for every [`ColorRole`]
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub constellation_pattern: Color,
    pub coordinate_lines: Color,
    pub coordinate_text: Color,
    pub coordinate_text_background: Color,
    pub star: Color,
    pub planet: Color,
    pub star_name_text: Color,
    pub cluster_name_text: Color,
    pub cluster_border: Color,
    pub cluster_interior: Color,
    pub planetary_nebula_name: Color,
    pub planetary_nebula: Color,
    pub milky_way_border: Color,
    pub milky_way_interior: [Color; 5],
}

impl ColorScheme {
    /// The light chart palette
    pub fn standard() -> Self {
        Self {
            background: Color::Rgb(240, 255, 255),
            constellation_pattern: Color::Rgb(192, 192, 216),
            coordinate_lines: Color::Rgb(182, 182, 182),
            coordinate_text: Color::Rgb(182, 182, 182),
            coordinate_text_background: Color::Rgb(240, 255, 255),
            star: Color::Rgb(0, 0, 0),
            planet: Color::Rgb(48, 48, 48),
            star_name_text: Color::Rgb(32, 32, 32),
            cluster_name_text: Color::Rgb(32, 32, 32),
            cluster_border: Color::Rgb(0, 0, 0),
            cluster_interior: Color::Rgb(240, 230, 130),
            planetary_nebula_name: Color::Rgb(32, 32, 32),
            planetary_nebula: Color::Rgb(0, 0, 0),
            milky_way_border: Color::Rgb(128, 128, 128),
            milky_way_interior: [
                Color::Rgb(240, 230, 130),
                Color::Rgb(200, 230, 130),
                Color::Rgb(160, 230, 130),
                Color::Rgb(120, 230, 130),
                Color::Rgb(80, 230, 130),
            ],
        }
    }

    pub fn color(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Background => &self.background,
            ColorRole::ConstellationPattern => &self.constellation_pattern,
            ColorRole::CoordinateLines => &self.coordinate_lines,
            ColorRole::CoordinateText => &self.coordinate_text,
            ColorRole::CoordinateTextBackground => &self.coordinate_text_background,
            ColorRole::Star => &self.star,
            ColorRole::Planet => &self.planet,
            ColorRole::StarNameText => &self.star_name_text,
            ColorRole::ClusterNameText => &self.cluster_name_text,
            ColorRole::ClusterBorder => &self.cluster_border,
            ColorRole::ClusterInterior => &self.cluster_interior,
            ColorRole::PlanetaryNebulaName => &self.planetary_nebula_name,
            ColorRole::PlanetaryNebula => &self.planetary_nebula,
            ColorRole::MilkyWayBorder => &self.milky_way_border,
            ColorRole::MilkyWayInterior(band) => &self.milky_way_interior[band as usize],
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::standard()
    }
}

/// How the rendering layer should paint a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    Fill { color: ColorRole },
    Stroke { width: f64, color: ColorRole },
}

impl Style {
    pub fn fill(color: ColorRole) -> Self {
        Style::Fill { color }
    }

    pub fn stroke(width: f64, color: ColorRole) -> Self {
        Style::Stroke { width, color }
    }
}
