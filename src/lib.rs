//! gradx - gradient utility-class generator
//!
//! A library for expanding declarative theme configuration (directions,
//! shapes, sizes, positions, colours, lengths) into CSS `background-image`
//! utility classes across the four gradient families: linear, radial, and
//! their repeating variants.

pub mod cli;
pub mod error;
pub mod escape;
pub mod gradient;
pub mod output;
pub mod registry;
pub mod render;
pub mod theme;
pub mod validation;

pub use error::{GradxError, Result};
pub use escape::escape_class;
pub use gradient::{
    generate, linear_value, normalize, radial_value, transparent_of, Colour,
};
pub use registry::{CollectedUtilities, UtilityGroup, UtilityMap, UtilitySink};
pub use render::render_stylesheet;
pub use theme::{AxisTable, ColourSpec, ColourTable, Theme};
pub use validation::{validate_theme, Diagnostic, Severity, ValidationResult};
