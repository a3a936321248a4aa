//! Individual validation checks.

use std::collections::HashMap;

use crate::gradient::{linear_class, normalize, radial_class, validate_colours};
use crate::theme::{AxisTable, ColourTable, Theme};

use super::warning::{Diagnostic, ValidationResult};

/// Warn about colour entries the generator will silently skip.
pub fn check_css_wide_keywords(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    let sections: [(&str, Option<&ColourTable>); 4] = [
        ("linear", theme.linear.colors.as_ref()),
        ("radial", theme.radial.colors.as_ref()),
        ("repeating-linear", theme.repeating_linear.colors.as_ref()),
        ("repeating-radial", theme.repeating_radial.colors.as_ref()),
    ];

    for (section, colours) in sections {
        let Some(colours) = colours else { continue };
        for (name, spec) in colours.iter() {
            if normalize(spec, true).is_none() {
                result.push(
                    Diagnostic::warning(
                        "gradx::validate::css-wide-keyword",
                        format!(
                            "colour '{}' in {} colours contains a CSS-wide keyword and generates nothing",
                            name, section
                        ),
                    )
                    .with_help(
                        "inherit, initial, unset, and revert are not valid gradient colour stops"
                            .to_string(),
                    ),
                );
            }
        }
    }

    result
}

/// Warn when two utility tuples map to the same class name.
///
/// Default-key elision can fold distinct radial tuples onto one selector
/// (shape key `t` vs position key `t`), and flat-axis names can shadow
/// linear names. The generator resolves collisions by last-write-wins, so
/// this is the only place they become visible.
pub fn check_selector_collisions(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut seen: HashMap<String, usize> = HashMap::new();
    for selector in all_selectors(theme) {
        *seen.entry(selector).or_insert(0) += 1;
    }

    let mut colliding: Vec<(&String, &usize)> =
        seen.iter().filter(|(_, count)| **count > 1).collect();
    colliding.sort();

    for (selector, count) in colliding {
        result.push(
            Diagnostic::warning(
                "gradx::validate::selector-collision",
                format!("{} utilities share the class name '{}'", count, selector),
            )
            .with_help("Rename the colliding axis keys in the theme".to_string()),
        );
    }

    result
}

/// Warn about flat-axis entries with fewer than two colour stops.
pub fn check_flat_stop_counts(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, spec) in theme.gradients.iter() {
        if spec.raw_stops().len() < 2 {
            result.push(
                Diagnostic::warning(
                    "gradx::validate::single-stop",
                    format!("gradient '{}' has fewer than two colour stops", name),
                )
                .with_help("Flat gradients are emitted verbatim; list explicit stops".to_string()),
            );
        }
    }

    result
}

/// Warn when the theme configures no colours at all.
pub fn check_empty_theme(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    let empty = theme.linear_colours().is_empty()
        && theme.radial_colours().is_empty()
        && theme.repeating_linear_colours().is_empty()
        && theme.repeating_radial_colours().is_empty()
        && theme.gradients.is_empty();

    if empty {
        result.push(
            Diagnostic::warning(
                "gradx::validate::no-colours",
                "no colour tables configured; only bg-none will be generated",
            )
            .with_help("Add colours under linear.colors, radial.colors, or gradients".to_string()),
        );
    }

    result
}

/// Every class name the engine would emit, including duplicates.
fn all_selectors(theme: &Theme) -> Vec<String> {
    let mut selectors = vec!["bg-none".to_string()];

    let linear_colours = validate_colours(&theme.linear_colours(), true);
    for (colour_key, _) in &linear_colours {
        for (direction_key, _) in theme.linear_directions().iter() {
            selectors.push(linear_class(direction_key, colour_key, None));
        }
    }

    let radial_colours = validate_colours(&theme.radial_colours(), false);
    push_radial_selectors(
        &mut selectors,
        &theme.radial_shapes(),
        &theme.radial_sizes(),
        &theme.radial_positions(),
        &radial_colours.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>(),
        None,
    );

    let repeating_linear_colours = validate_colours(&theme.repeating_linear_colours(), true);
    for (length_key, _) in theme.repeating_linear_lengths().iter() {
        for (colour_key, _) in &repeating_linear_colours {
            for (direction_key, _) in theme.repeating_linear_directions().iter() {
                selectors.push(linear_class(direction_key, colour_key, Some(length_key)));
            }
        }
    }

    let repeating_radial_colours = validate_colours(&theme.repeating_radial_colours(), false);
    let repeating_radial_keys: Vec<String> = repeating_radial_colours
        .iter()
        .map(|(k, _)| k.clone())
        .collect();
    for (length_key, _) in theme.repeating_radial_lengths().iter() {
        push_radial_selectors(
            &mut selectors,
            &theme.repeating_radial_shapes(),
            &theme.repeating_radial_sizes(),
            &theme.repeating_radial_positions(),
            &repeating_radial_keys,
            Some(length_key),
        );
    }

    for (name, _) in theme.gradients.iter() {
        for suffix in ["to-top", "to-right", "to-bottom", "to-left"] {
            selectors.push(format!("bg-gradient-{}-{}", suffix, name));
        }
    }

    selectors
}

fn push_radial_selectors(
    selectors: &mut Vec<String>,
    shapes: &AxisTable,
    sizes: &AxisTable,
    positions: &AxisTable,
    colour_keys: &[String],
    length_key: Option<&str>,
) {
    for colour_key in colour_keys {
        for (position_key, _) in positions.iter() {
            for (size_key, _) in sizes.iter() {
                for (shape_key, _) in shapes.iter() {
                    selectors.push(radial_class(
                        shape_key,
                        size_key,
                        position_key,
                        colour_key,
                        length_key,
                    ));
                }
            }
        }
    }
}
