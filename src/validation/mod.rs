//! Theme validation.
//!
//! The generation core never fails on questionable configuration: rejected
//! colours are silently filtered and colliding selectors silently overwrite.
//! These checks surface both ahead of time. Used by `gradx validate` and
//! `gradx build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::theme::Theme;

/// Run all validation checks against a loaded theme.
pub fn validate_theme(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_css_wide_keywords(theme));
    result.merge(checks::check_selector_collisions(theme));
    result.merge(checks::check_flat_stop_counts(theme));
    result.merge(checks::check_empty_theme(theme));

    result
}
