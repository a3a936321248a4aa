//! Gradient utility generation engine.
//!
//! One pass over the theme per invocation: each family resolves its axis
//! tables (with fallbacks), validates its colour table, expands the
//! Cartesian product, and registers the finished group with the sink. The
//! whole pass is a pure function of the theme; generating twice from the
//! same theme yields identical output.
//!
//! Sink call order: `bg-none`, linear, radial, repeating-linear,
//! repeating-radial, then the flat-axis group when its table is configured.

mod colour;
mod expand;
mod flat;
mod selector;
mod stops;
mod value;

use crate::registry::{UtilityMap, UtilitySink};
use crate::theme::Theme;

pub use colour::{transparent_of, Colour};
pub use expand::{
    linear_utilities, radial_utilities, repeating_linear_utilities, repeating_radial_utilities,
    validate_colours, ValidatedColours,
};
pub use flat::flat_utilities;
pub use selector::{linear_class, radial_class, DEFAULT_KEY};
pub use stops::normalize;
pub use value::{linear_value, radial_value};

/// Linear families fade from transparent up to the colour; radial families
/// put the colour at the centre and fade outward.
const LINEAR_TRANSPARENT_FIRST: bool = true;
const RADIAL_TRANSPARENT_FIRST: bool = false;

/// Generate every utility group from the theme, registering each with the
/// sink.
pub fn generate(theme: &Theme, sink: &mut dyn UtilitySink) {
    let mut none = UtilityMap::new();
    none.insert("bg-none", "none");
    sink.add_utilities(none, theme.background_image_variants());

    let linear_colours = validate_colours(&theme.linear_colours(), LINEAR_TRANSPARENT_FIRST);
    sink.add_utilities(
        linear_utilities(&theme.linear_directions(), &linear_colours),
        theme.linear_variants(),
    );

    let radial_colours = validate_colours(&theme.radial_colours(), RADIAL_TRANSPARENT_FIRST);
    sink.add_utilities(
        radial_utilities(
            &theme.radial_shapes(),
            &theme.radial_sizes(),
            &theme.radial_positions(),
            &radial_colours,
        ),
        theme.radial_variants(),
    );

    let repeating_linear_colours =
        validate_colours(&theme.repeating_linear_colours(), LINEAR_TRANSPARENT_FIRST);
    sink.add_utilities(
        repeating_linear_utilities(
            &theme.repeating_linear_directions(),
            &repeating_linear_colours,
            &theme.repeating_linear_lengths(),
        ),
        theme.repeating_linear_variants(),
    );

    let repeating_radial_colours =
        validate_colours(&theme.repeating_radial_colours(), RADIAL_TRANSPARENT_FIRST);
    sink.add_utilities(
        repeating_radial_utilities(
            &theme.repeating_radial_shapes(),
            &theme.repeating_radial_sizes(),
            &theme.repeating_radial_positions(),
            &repeating_radial_colours,
            &theme.repeating_radial_lengths(),
        ),
        theme.repeating_radial_variants(),
    );

    if !theme.gradients.is_empty() {
        sink.add_utilities(
            flat_utilities(&theme.gradients),
            theme.background_image_variants(),
        );
    }
}
