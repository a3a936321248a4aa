//! CSS gradient value construction.
//!
//! Arguments that match CSS's own implicit defaults are left out of the
//! emitted function call: `linear-gradient(to bottom, ...)` renders as
//! `linear-gradient(...)` because the browser already defaults the gradient
//! line to `to bottom`. This elision is about CSS values and is independent
//! of the `default`-key elision in class names.

/// Gradient lines the browser treats as the implicit default.
const DEFAULT_GRADIENT_LINES: [&str; 5] =
    ["to bottom", "180deg", "0.5turn", "200grad", "3.1416rad"];

/// Radial shape the browser treats as the implicit default.
const DEFAULT_SHAPE: &str = "ellipse";

/// Radial size the browser treats as the implicit default.
const DEFAULT_SIZE: &str = "farthest-corner";

/// Spellings of the implicit centre position.
const DEFAULT_POSITIONS: [&str; 6] = [
    "center",
    "center center",
    "50%",
    "50% 50%",
    "center 50%",
    "50% center",
];

/// Build a `linear-gradient()` value, or `repeating-linear-gradient()` when
/// a length is given.
pub fn linear_value(direction: &str, colours: &[String], length: Option<&str>) -> String {
    let mut args: Vec<String> = Vec::with_capacity(2);
    if !DEFAULT_GRADIENT_LINES.contains(&direction) {
        args.push(direction.to_string());
    }
    args.push(colour_list(colours, length));

    let function = if length.is_some() {
        "repeating-linear-gradient"
    } else {
        "linear-gradient"
    };
    format!("{}({})", function, args.join(", "))
}

/// Build a `radial-gradient()` value, or `repeating-radial-gradient()` when
/// a length is given.
///
/// Shape, size, and `at <position>` form a single space-joined leading
/// argument; each piece appears only when it differs from the CSS default.
pub fn radial_value(
    shape: &str,
    size: &str,
    position: &str,
    colours: &[String],
    length: Option<&str>,
) -> String {
    let mut head: Vec<String> = Vec::with_capacity(3);
    if shape != DEFAULT_SHAPE {
        head.push(shape.to_string());
    }
    if size != DEFAULT_SIZE {
        head.push(size.to_string());
    }
    if !DEFAULT_POSITIONS.contains(&position) {
        head.push(format!("at {}", position));
    }

    let mut args: Vec<String> = Vec::with_capacity(2);
    if !head.is_empty() {
        args.push(head.join(" "));
    }
    args.push(colour_list(colours, length));

    let function = if length.is_some() {
        "repeating-radial-gradient"
    } else {
        "radial-gradient"
    };
    format!("{}({})", function, args.join(", "))
}

/// Join colour stops, appending the repeat length once after the full list.
///
/// The length lands on the final stop only (`red, blue 20px`), which sets
/// the repeat cycle width. It is never distributed per stop.
fn colour_list(colours: &[String], length: Option<&str>) -> String {
    let joined = colours.join(", ");
    match length {
        Some(length) => format!("{} {}", joined, length),
        None => joined,
    }
}
