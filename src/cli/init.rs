//! Init command implementation.
//!
//! Writes a starter `gradients.yaml` with a commented example of every
//! configuration axis.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GradxError, Result};
use crate::output::Printer;

/// Default theme filename.
pub const THEME_FILENAME: &str = "gradients.yaml";

const STARTER_THEME: &str = "\
# gradx theme. Every section is optional; unset axes use built-in defaults.

# Variant modifiers passed through to the host pipeline.
variants: [responsive]

linear:
  colors:
    ice: \"#afdcdc\"
    sunset: [\"#ff5e62\", \"#ff9966\"]
  # directions:
  #   t: to top

radial:
  colors:
    glow: gold
  # shapes:
  #   default: ellipse
  #   circle: circle
  # sizes:
  #   default: closest-side
  # positions:
  #   default: center

# The length axis makes a repeating family repeat; no lengths, no utilities.
# repeating-linear:
#   lengths:
#     sm: 8px
#     lg: 32px

# Flat generator: fixed to-top/right/bottom/left utilities, stops verbatim.
# gradients:
#   dusk: [\"#2c3e50\", \"#fd746c\"]
";

/// Write a starter gradients.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the theme into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing gradients.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();
    let theme_path = args.path.join(THEME_FILENAME);

    if theme_path.exists() && !args.force {
        return Err(GradxError::Theme {
            message: format!("{} already exists", THEME_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&theme_path, STARTER_THEME).map_err(|e| GradxError::Io {
        path: theme_path.clone(),
        message: format!("Failed to write theme: {}", e),
    })?;

    printer.status("Created", &theme_path.display().to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_starter_theme_parses() {
        let theme = Theme::parse(STARTER_THEME).unwrap();

        assert_eq!(theme.linear_colours().len(), 2);
        assert_eq!(theme.radial_colours().len(), 1);
        assert_eq!(theme.background_image_variants(), vec!["responsive"]);
    }

    #[test]
    fn test_init_writes_theme() {
        let dir = tempfile::tempdir().unwrap();

        run(InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();

        assert!(dir.path().join(THEME_FILENAME).exists());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(THEME_FILENAME), "variants: []").unwrap();

        let result = run(InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        });

        assert!(result.is_err());
    }
}
