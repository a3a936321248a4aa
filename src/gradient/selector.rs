//! Utility class-name construction.
//!
//! Selectors mirror theme keys, never CSS values. Radial axis keys named
//! `default` are dropped from the class name, so the all-defaults radial
//! utility for colour `ice` is plain `bg-radial-ice`. The assembled name
//! goes through CSS identifier escaping before use as a selector.

use crate::escape::escape_class;

/// Axis keys equal to this literal are left out of radial class names.
pub const DEFAULT_KEY: &str = "default";

/// Class name for a linear gradient utility: `bg-gradient-<dir>-<color>`,
/// with `-<length>` appended for the repeating family.
pub fn linear_class(direction_key: &str, colour_key: &str, length_key: Option<&str>) -> String {
    let mut name = format!("bg-gradient-{}-{}", direction_key, colour_key);
    if let Some(length_key) = length_key {
        name.push('-');
        name.push_str(length_key);
    }
    escape_class(&name)
}

/// Class name for a radial gradient utility:
/// `bg-radial[-<shape>][-<size>][-<position>]-<color>[-<length>]`.
///
/// Shape, size, and position keys appear in that order and only when they
/// differ from [`DEFAULT_KEY`].
pub fn radial_class(
    shape_key: &str,
    size_key: &str,
    position_key: &str,
    colour_key: &str,
    length_key: Option<&str>,
) -> String {
    let mut name = String::from("bg-radial");
    for key in [shape_key, size_key, position_key] {
        if key != DEFAULT_KEY {
            name.push('-');
            name.push_str(key);
        }
    }
    name.push('-');
    name.push_str(colour_key);
    if let Some(length_key) = length_key {
        name.push('-');
        name.push_str(length_key);
    }
    escape_class(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_class() {
        assert_eq!(linear_class("t", "ice", None), "bg-gradient-t-ice");
        assert_eq!(linear_class("br", "fade", None), "bg-gradient-br-fade");
    }

    #[test]
    fn test_linear_class_with_length() {
        assert_eq!(linear_class("t", "ice", Some("sm")), "bg-gradient-t-ice-sm");
    }

    #[test]
    fn test_radial_class_all_defaults() {
        assert_eq!(
            radial_class("default", "default", "default", "ice", None),
            "bg-radial-ice"
        );
    }

    #[test]
    fn test_radial_class_non_default_position() {
        assert_eq!(
            radial_class("default", "default", "t", "ice", None),
            "bg-radial-t-ice"
        );
    }

    #[test]
    fn test_radial_class_axis_order() {
        assert_eq!(
            radial_class("circle", "sm", "tr", "glow", None),
            "bg-radial-circle-sm-tr-glow"
        );
    }

    #[test]
    fn test_radial_class_with_length() {
        assert_eq!(
            radial_class("default", "default", "default", "glow", Some("lg")),
            "bg-radial-glow-lg"
        );
    }

    #[test]
    fn test_class_names_are_escaped() {
        assert_eq!(
            radial_class("default", "default", "default", "ice", Some("50%")),
            "bg-radial-ice-50\\%"
        );
    }
}
