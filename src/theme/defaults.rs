//! Built-in fallback tables.
//!
//! These mirror the defaults gradient utilities ship with when the theme
//! leaves an axis unconfigured. Colour and length tables default to empty,
//! so a theme with no colours generates no gradient utilities.

use super::tables::AxisTable;

/// Compass direction keys for linear gradients.
pub fn directions() -> AxisTable {
    AxisTable::from([
        ("t", "to top"),
        ("tr", "to top right"),
        ("r", "to right"),
        ("br", "to bottom right"),
        ("b", "to bottom"),
        ("bl", "to bottom left"),
        ("l", "to left"),
        ("tl", "to top left"),
    ])
}

/// Radial gradient shapes.
pub fn shapes() -> AxisTable {
    AxisTable::from([("default", "ellipse")])
}

/// Radial gradient sizes (non-repeating).
pub fn sizes() -> AxisTable {
    AxisTable::from([("default", "closest-side")])
}

/// Radial gradient sizes for the repeating family.
///
/// `closest-side` collapses a repeating gradient into a single cycle, so the
/// repeating family defaults to `farthest-corner` instead.
pub fn repeating_sizes() -> AxisTable {
    AxisTable::from([("default", "farthest-corner")])
}

/// Radial gradient centre positions.
pub fn positions() -> AxisTable {
    AxisTable::from([
        ("default", "center"),
        ("t", "top"),
        ("tr", "top right"),
        ("r", "right"),
        ("br", "bottom right"),
        ("b", "bottom"),
        ("bl", "bottom left"),
        ("l", "left"),
        ("tl", "top left"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_directions() {
        let table = directions();
        assert_eq!(table.len(), 8);
        assert_eq!(table.get("t"), Some("to top"));
        assert_eq!(table.get("br"), Some("to bottom right"));
    }

    #[test]
    fn test_radial_defaults() {
        assert_eq!(shapes().get("default"), Some("ellipse"));
        assert_eq!(sizes().get("default"), Some("closest-side"));
        assert_eq!(repeating_sizes().get("default"), Some("farthest-corner"));
    }

    #[test]
    fn test_nine_positions() {
        let table = positions();
        assert_eq!(table.len(), 9);
        assert_eq!(table.get("default"), Some("center"));
        assert_eq!(table.get("bl"), Some("bottom left"));
    }
}
