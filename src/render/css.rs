//! CSS output.
//!
//! Renders collected utility groups to a plain stylesheet, one rule per
//! utility, in registration order. Variants are not expanded here; each
//! group's variant list is carried as a comment for the host pipeline that
//! owns variant semantics.

use std::fmt::Write;

use crate::registry::CollectedUtilities;

/// Render all non-empty utility groups as a CSS stylesheet.
pub fn render_stylesheet(collected: &CollectedUtilities) -> String {
    let mut css = String::new();

    for group in collected.groups() {
        if group.utilities.is_empty() {
            continue;
        }

        if !css.is_empty() {
            css.push('\n');
        }

        if !group.variants.is_empty() {
            let _ = writeln!(css, "/* variants: {} */", group.variants.join(", "));
        }

        for (selector, value) in group.utilities.iter() {
            let _ = writeln!(css, ".{} {{ background-image: {}; }}", selector, value);
        }
    }

    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::gradient::generate;
    use crate::registry::{CollectedUtilities, UtilityMap, UtilitySink};
    use crate::theme::Theme;

    #[test]
    fn test_empty_groups_are_skipped() {
        let mut sink = CollectedUtilities::new();
        sink.add_utilities(UtilityMap::new(), vec!["responsive".to_string()]);

        assert_eq!(render_stylesheet(&sink), "");
    }

    #[test]
    fn test_variants_comment_omitted_when_empty() {
        let mut sink = CollectedUtilities::new();
        let mut map = UtilityMap::new();
        map.insert("bg-none", "none");
        sink.add_utilities(map, vec![]);

        assert_eq!(
            render_stylesheet(&sink),
            ".bg-none { background-image: none; }\n"
        );
    }

    #[test]
    fn test_groups_separated_by_blank_line() {
        let mut sink = CollectedUtilities::new();

        let mut first = UtilityMap::new();
        first.insert("bg-none", "none");
        sink.add_utilities(first, vec![]);

        let mut second = UtilityMap::new();
        second.insert("bg-gradient-t-ice", "linear-gradient(to top, red, blue)");
        sink.add_utilities(second, vec!["hover".to_string()]);

        let css = render_stylesheet(&sink);
        assert_eq!(
            css,
            ".bg-none { background-image: none; }\n\
             \n\
             /* variants: hover */\n\
             .bg-gradient-t-ice { background-image: linear-gradient(to top, red, blue); }\n"
        );
    }

    #[test]
    fn test_generated_stylesheet_snapshot() {
        let theme = Theme::parse(
            "variants: [responsive]\nlinear:\n  directions:\n    t: to top\n  colors:\n    ice: \"#afdcdc\"",
        )
        .unwrap();
        let mut sink = CollectedUtilities::new();
        generate(&theme, &mut sink);

        let css = render_stylesheet(&sink);
        insta::assert_snapshot!(css.trim_end(), @r"
        /* variants: responsive */
        .bg-none { background-image: none; }

        /* variants: responsive */
        .bg-gradient-t-ice { background-image: linear-gradient(to top, rgba(175, 220, 220, 0), #afdcdc); }
        ");
    }
}
