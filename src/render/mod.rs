//! Stylesheet rendering for generated utilities.

mod css;

pub use css::render_stylesheet;
