//! Build command implementation.
//!
//! Loads the theme, validates it, runs the generator once, and writes the
//! rendered stylesheet.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GradxError, Result};
use crate::gradient::generate;
use crate::output::{plural, Printer};
use crate::registry::CollectedUtilities;
use crate::render::render_stylesheet;
use crate::theme::Theme;
use crate::validation::validate_theme;

/// Generate a CSS stylesheet from a theme file
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Theme file to read
    #[arg(default_value = "gradients.yaml")]
    pub theme: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(long, short, default_value = "gradients.css")]
    pub output: PathBuf,

    /// Fail on validation warnings instead of printing them
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let printer = Printer::new();
    let theme = Theme::load(&args.theme)?;

    let validation = validate_theme(&theme);
    for diagnostic in validation.iter() {
        printer.warning("Warning", &diagnostic.message);
        if let Some(help) = &diagnostic.help {
            printer.info("Help", help);
        }
    }
    if args.strict && !validation.is_ok() {
        return Err(GradxError::Validation {
            message: format!(
                "{} in strict mode",
                plural(
                    validation.warning_count() + validation.error_count(),
                    "diagnostic",
                    "diagnostics"
                )
            ),
            help: Some("Fix the reported theme issues or drop --strict".to_string()),
        });
    }

    let mut collected = CollectedUtilities::new();
    generate(&theme, &mut collected);
    let css = render_stylesheet(&collected);

    printer.status(
        "Generating",
        &format!(
            "{} in {}",
            plural(collected.len(), "utility", "utilities"),
            plural(collected.groups().len(), "group", "groups")
        ),
    );

    if args.output.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(css.as_bytes())?;
    } else {
        fs::write(&args.output, &css).map_err(|e| GradxError::Io {
            path: args.output.clone(),
            message: format!("Failed to write stylesheet: {}", e),
        })?;
        printer.status("Finished", &args.output.display().to_string());
    }

    Ok(())
}
