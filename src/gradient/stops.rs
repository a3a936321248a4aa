//! Colour-stop normalization.
//!
//! Theme colour entries arrive either as a single colour or as an explicit
//! stop list. Value builders always work on two-or-more stops, so a single
//! colour is expanded into a fade against its own zero-alpha variant here,
//! once per colour entry, before any expansion runs.

use crate::theme::ColourSpec;

use super::colour::transparent_of;

/// CSS-wide keywords. Legal as property values, never as colour stops.
const CSS_WIDE_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

/// Normalize a theme colour entry into a gradient-ready stop list.
///
/// Returns `None` when any stop is a CSS-wide keyword; the entry generates
/// no utilities. A single colour becomes a two-stop fade: the computed
/// zero-alpha variant comes first when `transparent_first` is set, last
/// otherwise. Multi-colour input passes through unchanged and
/// `transparent_first` is ignored.
pub fn normalize(spec: &ColourSpec, transparent_first: bool) -> Option<Vec<String>> {
    let stops = spec.raw_stops();

    if stops
        .iter()
        .any(|stop| CSS_WIDE_KEYWORDS.contains(&stop.trim()))
    {
        return None;
    }

    match stops.len() {
        1 => {
            let colour = stops[0].clone();
            let transparent = transparent_of(&colour);
            if transparent_first {
                Some(vec![transparent, colour])
            } else {
                Some(vec![colour, transparent])
            }
        }
        _ => Some(stops),
    }
}
