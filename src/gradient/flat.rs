//! Flat-axis gradient generator.
//!
//! A lighter-weight alternative to the full engine: one `name -> stops`
//! table, four fixed directions, no colour normalization and no default
//! elision. Stops are joined exactly as written in the theme.

use crate::escape::escape_class;
use crate::registry::UtilityMap;
use crate::theme::ColourTable;

/// The four fixed directions, as (class suffix, CSS direction) pairs.
const FLAT_DIRECTIONS: [(&str, &str); 4] = [
    ("to-top", "to top"),
    ("to-right", "to right"),
    ("to-bottom", "to bottom"),
    ("to-left", "to left"),
];

/// Emit four fixed-direction utilities per named gradient.
pub fn flat_utilities(gradients: &ColourTable) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    for (name, spec) in gradients.iter() {
        let colours = spec.raw_stops().join(", ");
        for (suffix, direction) in FLAT_DIRECTIONS {
            utilities.insert(
                escape_class(&format!("bg-gradient-{}-{}", suffix, name)),
                format!("linear-gradient({}, {})", direction, colours),
            );
        }
    }
    utilities
}
