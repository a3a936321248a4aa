//! Per-family Cartesian expansion.
//!
//! Each gradient family expands the product of its applicable axes into an
//! ordered utility mapping. Colour entries are validated up front, once per
//! entry, so the expansion loops only ever see normalized stop lists: a
//! rejected colour disappears from the whole family, not from single cells.
//!
//! Nesting order fixes the output order (lengths, then colours, then the
//! geometry axes) and nothing else; every full key tuple yields a unique
//! selector under sane configuration.

use crate::registry::UtilityMap;
use crate::theme::{AxisTable, ColourTable};

use super::selector::{linear_class, radial_class};
use super::stops::normalize;
use super::value::{linear_value, radial_value};

/// Colour entries that survived normalization, in table order.
pub type ValidatedColours = Vec<(String, Vec<String>)>;

/// Normalize every colour entry of a table, dropping rejected entries.
pub fn validate_colours(colours: &ColourTable, transparent_first: bool) -> ValidatedColours {
    colours
        .iter()
        .filter_map(|(key, spec)| {
            normalize(spec, transparent_first).map(|stops| (key.to_string(), stops))
        })
        .collect()
}

/// Expand colour x direction into linear gradient utilities.
pub fn linear_utilities(directions: &AxisTable, colours: &ValidatedColours) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    for (colour_key, stops) in colours {
        for (direction_key, direction) in directions.iter() {
            utilities.insert(
                linear_class(direction_key, colour_key, None),
                linear_value(direction, stops, None),
            );
        }
    }
    utilities
}

/// Expand length x colour x direction into repeating linear utilities.
///
/// An empty length table yields an empty mapping; the length axis is what
/// makes the family repeat.
pub fn repeating_linear_utilities(
    directions: &AxisTable,
    colours: &ValidatedColours,
    lengths: &AxisTable,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    for (length_key, length) in lengths.iter() {
        for (colour_key, stops) in colours {
            for (direction_key, direction) in directions.iter() {
                utilities.insert(
                    linear_class(direction_key, colour_key, Some(length_key)),
                    linear_value(direction, stops, Some(length)),
                );
            }
        }
    }
    utilities
}

/// Expand colour x position x size x shape into radial gradient utilities.
pub fn radial_utilities(
    shapes: &AxisTable,
    sizes: &AxisTable,
    positions: &AxisTable,
    colours: &ValidatedColours,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    for (colour_key, stops) in colours {
        for (position_key, position) in positions.iter() {
            for (size_key, size) in sizes.iter() {
                for (shape_key, shape) in shapes.iter() {
                    utilities.insert(
                        radial_class(shape_key, size_key, position_key, colour_key, None),
                        radial_value(shape, size, position, stops, None),
                    );
                }
            }
        }
    }
    utilities
}

/// Expand length x colour x position x size x shape into repeating radial
/// utilities.
pub fn repeating_radial_utilities(
    shapes: &AxisTable,
    sizes: &AxisTable,
    positions: &AxisTable,
    colours: &ValidatedColours,
    lengths: &AxisTable,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    for (length_key, length) in lengths.iter() {
        for (colour_key, stops) in colours {
            for (position_key, position) in positions.iter() {
                for (size_key, size) in sizes.iter() {
                    for (shape_key, shape) in shapes.iter() {
                        utilities.insert(
                            radial_class(
                                shape_key,
                                size_key,
                                position_key,
                                colour_key,
                                Some(length_key),
                            ),
                            radial_value(shape, size, position, stops, Some(length)),
                        );
                    }
                }
            }
        }
    }
    utilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{defaults, ColourSpec};

    fn colour_table(entries: &[(&str, ColourSpec)]) -> ColourTable {
        let mut table = ColourTable::new();
        for (name, spec) in entries {
            table.insert(*name, spec.clone());
        }
        table
    }

    fn two_stop(name: &str, a: &str, b: &str) -> (String, Vec<String>) {
        (name.to_string(), vec![a.to_string(), b.to_string()])
    }

    #[test]
    fn test_validate_colours_filters_keywords() {
        let table = colour_table(&[
            ("ok", ColourSpec::Stops(vec!["red".into(), "blue".into()])),
            ("bad", ColourSpec::Single("inherit".into())),
        ]);

        let validated = validate_colours(&table, true);
        assert_eq!(validated.len(), 1);
        assert_eq!(validated[0].0, "ok");
    }

    #[test]
    fn test_validate_colours_keeps_table_order() {
        let table = colour_table(&[
            ("z", ColourSpec::Single("#fff".into())),
            ("a", ColourSpec::Single("#000".into())),
        ]);

        let keys: Vec<String> = validate_colours(&table, true)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_linear_one_colour_eight_directions() {
        let colours = vec![two_stop("ice", "rgba(255, 255, 255, 0)", "#fff")];
        let utilities = linear_utilities(&defaults::directions(), &colours);

        assert_eq!(utilities.len(), 8);
        assert_eq!(
            utilities.get("bg-gradient-t-ice"),
            Some("linear-gradient(to top, rgba(255, 255, 255, 0), #fff)")
        );
        // "to bottom" matches the CSS implicit default and is elided.
        assert_eq!(
            utilities.get("bg-gradient-b-ice"),
            Some("linear-gradient(rgba(255, 255, 255, 0), #fff)")
        );
    }

    #[test]
    fn test_radial_default_axes_nine_positions() {
        let colours = vec![two_stop("ice", "#fff", "rgba(255, 255, 255, 0)")];
        let utilities = radial_utilities(
            &defaults::shapes(),
            &defaults::sizes(),
            &defaults::positions(),
            &colours,
        );

        // 1 shape x 1 size x 9 positions.
        assert_eq!(utilities.len(), 9);
        assert_eq!(
            utilities.get("bg-radial-ice"),
            Some("radial-gradient(closest-side, #fff, rgba(255, 255, 255, 0))")
        );
        assert_eq!(
            utilities.get("bg-radial-t-ice"),
            Some("radial-gradient(closest-side at top, #fff, rgba(255, 255, 255, 0))")
        );
    }

    #[test]
    fn test_repeating_linear_empty_lengths_empty_output() {
        let colours = vec![two_stop("ice", "red", "blue")];
        let utilities =
            repeating_linear_utilities(&defaults::directions(), &colours, &AxisTable::new());

        assert!(utilities.is_empty());
    }

    #[test]
    fn test_repeating_linear_length_axis_multiplies() {
        let colours = vec![two_stop("ice", "red", "blue")];
        let lengths = AxisTable::from([("sm", "8px"), ("lg", "32px")]);
        let utilities = repeating_linear_utilities(&defaults::directions(), &colours, &lengths);

        assert_eq!(utilities.len(), 16);
        assert_eq!(
            utilities.get("bg-gradient-t-ice-sm"),
            Some("repeating-linear-gradient(to top, red, blue 8px)")
        );
        assert_eq!(
            utilities.get("bg-gradient-b-ice-lg"),
            Some("repeating-linear-gradient(red, blue 32px)")
        );
    }

    #[test]
    fn test_repeating_radial_full_product() {
        let colours = vec![
            two_stop("a", "red", "blue"),
            two_stop("b", "gold", "transparent"),
        ];
        let shapes = AxisTable::from([("default", "ellipse"), ("circle", "circle")]);
        let sizes = AxisTable::from([("default", "farthest-corner")]);
        let positions = AxisTable::from([("default", "center"), ("t", "top")]);
        let lengths = AxisTable::from([("sm", "1rem")]);

        let utilities =
            repeating_radial_utilities(&shapes, &sizes, &positions, &colours, &lengths);

        // 1 length x 2 colours x 2 positions x 1 size x 2 shapes.
        assert_eq!(utilities.len(), 8);
        assert_eq!(
            utilities.get("bg-radial-a-sm"),
            Some("repeating-radial-gradient(red, blue 1rem)")
        );
        assert_eq!(
            utilities.get("bg-radial-circle-t-b-sm"),
            Some("repeating-radial-gradient(circle at top, gold, transparent 1rem)")
        );
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let colours = vec![two_stop("ice", "red", "blue")];
        let first = linear_utilities(&defaults::directions(), &colours);
        let second = linear_utilities(&defaults::directions(), &colours);

        assert_eq!(first, second);
    }
}
