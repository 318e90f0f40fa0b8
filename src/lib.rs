//! Sky chart layout.
//!
//! Catalog objects and chart furniture are projected onto a flat view,
//! turned into [`Graphic`]s, and then named by a greedy fitter that places
//! each label where it collides least with everything already drawn.
//!
//! The crate never draws anything itself. Shapes carry color roles and
//! obscurement classes; text is measured by the caller through a
//! [`TextResolver`] and referred to by opaque [`TextHandle`]s.
//!
//! ```no_run
//! use starchart::{Configuration, Layout, ResolvedText, Size, TextHandle, ViewGeometry};
//! use starchart::plot::{CoordinateLine, Furniture, Star};
//! use starchart::types::{Angle, Position};
//!
//! let view = ViewGeometry::try_new(
//!     Position::from_degrees(279.2, 38.8),
//!     Angle::from_degrees(40.0),
//!     Size::new(800.0, 600.0),
//! )?;
//! let vega = Star::new(1, Position::from_degrees(279.23, 38.78), 0.03, vec!["Vega".into()]);
//! let grid = CoordinateLine::standard_latitudes(100).into_iter().map(Furniture::from);
//!
//! let layout = Layout::new(vec![vega.into()], grid.collect(), Configuration::default(), view);
//! let chart = layout.render(&mut |name: &str| {
//!     Some(ResolvedText {
//!         handle: TextHandle(0),
//!         size: Size::new(7.0 * name.len() as f64, 12.0),
//!     })
//! });
//! # Ok::<(), starchart::ViewError>(())
//! ```

mod log;

pub mod config;
pub mod defaults;
pub mod errors;
pub mod graphic;
pub mod layout;
pub mod names;
pub mod plot;
pub mod projection;
pub mod style;
pub mod tap;
pub mod types;

pub use config::Configuration;
pub use errors::{CatalogError, ViewError};
pub use graphic::{Graphic, ObjectId, Obscurement, Shape, TextHandle};
pub use layout::{Chart, Layout, Plots};
pub use names::{NameEntry, NameStyle, Nameable, NamesFitter, ResolvedText, TextResolver};
pub use projection::{Projection, Projector, ReversibleProjector, ViewGeometry};
pub use tap::{NearestObjectProvider, Resolution, TapResolver};
pub use types::{Angle, Position, Rect, Size};
