//! Validate command implementation.
//!
//! Loads a theme and reports diagnostics without generating any CSS.

use std::path::PathBuf;

use clap::Args;

use crate::error::{GradxError, Result};
use crate::output::{plural, Printer};
use crate::theme::Theme;
use crate::validation::{validate_theme, Severity};

/// Check a theme file without generating output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Theme file to check
    #[arg(default_value = "gradients.yaml")]
    pub theme: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();
    let theme = Theme::load(&args.theme)?;
    let result = validate_theme(&theme);

    for diagnostic in result.iter() {
        let label = printer.severity(
            &diagnostic.severity.to_string(),
            diagnostic.severity == Severity::Error,
        );
        eprintln!("  {}[{}]: {}", label, diagnostic.code, diagnostic.message);
        if let Some(help) = &diagnostic.help {
            eprintln!("    help: {}", help);
        }
    }

    if result.has_errors() {
        return Err(GradxError::Validation {
            message: format!(
                "{} found",
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    if result.is_ok() {
        printer.status("Validated", &args.theme.display().to_string());
    } else {
        printer.warning(
            "Validated",
            &format!(
                "{} with {}",
                args.theme.display(),
                plural(result.warning_count(), "warning", "warnings")
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_clean_theme() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "linear:\n  colors:\n    ice: \"#fff\"").unwrap();

        run(ValidateArgs {
            theme: file.path().to_path_buf(),
        })
        .unwrap();
    }

    #[test]
    fn test_validate_missing_file() {
        let result = run(ValidateArgs {
            theme: PathBuf::from("/nonexistent/gradients.yaml"),
        });

        assert!(result.is_err());
    }
}
