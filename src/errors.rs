//! Error types with rich diagnostics using miette
//!
//! Layout itself never fails: missing projections, unresolved names and
//! crowded views all resolve to "nothing drawn". These errors only guard
//! the construction boundaries where caller data enters the crate.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// View Errors
// ============================================================================

/// Errors raised while validating the view geometry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("invalid view size {width}x{height}")]
    #[diagnostic(
        code(starchart::view::invalid_size),
        help("view width and height must be finite and greater than zero")
    )]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid view diameter: {degrees}°")]
    #[diagnostic(
        code(starchart::view::invalid_diameter),
        help("a gnomonic view shows less than a hemisphere; use a diameter between 0° and 180°")
    )]
    InvalidDiameter { degrees: f64 },

    #[error("invalid view center")]
    #[diagnostic(code(starchart::view::invalid_center))]
    InvalidCenter {
        #[source]
        source: NumericError,
    },
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors raised while ingesting catalog objects
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("unsupported nebulosity magnitude {magnitude}")]
    #[diagnostic(
        code(starchart::catalog::nebulosity_magnitude),
        help("nebulosity bands are the whole magnitudes 0, 1, 2, 3 and 4")
    )]
    NebulosityMagnitude { magnitude: f64 },
}
