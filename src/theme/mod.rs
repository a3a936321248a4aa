//! Theme configuration (gradients.yaml) parsing and lookup.
//!
//! The theme file declares the configuration axes the generator expands:
//! directions, shapes, sizes, positions, colours, and lengths, grouped per
//! gradient family. Every axis has a built-in fallback (see [`defaults`]),
//! and the repeating families fall back to their non-repeating sibling's
//! configured tables before the built-in defaults.

pub mod defaults;
mod tables;

use std::path::Path;

use serde::Deserialize;

use crate::error::{GradxError, Result};

pub use tables::{AxisTable, ColourSpec, ColourTable};

/// Theme configuration loaded from gradients.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    /// Linear gradient axes.
    pub linear: LinearSection,

    /// Radial gradient axes.
    pub radial: RadialSection,

    /// Repeating linear gradient axes.
    pub repeating_linear: RepeatingLinearSection,

    /// Repeating radial gradient axes.
    pub repeating_radial: RepeatingRadialSection,

    /// Flat-axis gradient table: name -> explicit colour stops.
    pub gradients: ColourTable,

    /// Default variant modifiers for every utility group that does not set
    /// its own. Opaque to the generator; interpreted by the host pipeline.
    pub variants: Vec<String>,
}

/// Linear gradient configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinearSection {
    pub directions: Option<AxisTable>,
    pub colors: Option<ColourTable>,
    pub variants: Option<Vec<String>>,
}

/// Radial gradient configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RadialSection {
    pub shapes: Option<AxisTable>,
    pub sizes: Option<AxisTable>,
    pub positions: Option<AxisTable>,
    pub colors: Option<ColourTable>,
    pub variants: Option<Vec<String>>,
}

/// Repeating linear gradient configuration.
///
/// The length table is the repeating axis: with no lengths configured the
/// family generates nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepeatingLinearSection {
    pub directions: Option<AxisTable>,
    pub colors: Option<ColourTable>,
    pub lengths: Option<AxisTable>,
    pub variants: Option<Vec<String>>,
}

/// Repeating radial gradient configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepeatingRadialSection {
    pub shapes: Option<AxisTable>,
    pub sizes: Option<AxisTable>,
    pub positions: Option<AxisTable>,
    pub colors: Option<ColourTable>,
    pub lengths: Option<AxisTable>,
    pub variants: Option<Vec<String>>,
}

impl Theme {
    /// Load a theme from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GradxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a theme from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GradxError::Parse {
            message: format!("Invalid theme: {}", e),
            help: Some("Check gradients.yaml syntax".to_string()),
        })
    }

    // -- Linear axes --

    pub fn linear_directions(&self) -> AxisTable {
        self.linear
            .directions
            .clone()
            .unwrap_or_else(defaults::directions)
    }

    pub fn linear_colours(&self) -> ColourTable {
        self.linear.colors.clone().unwrap_or_default()
    }

    pub fn linear_variants(&self) -> Vec<String> {
        self.section_variants(&self.linear.variants)
    }

    // -- Radial axes --

    pub fn radial_shapes(&self) -> AxisTable {
        self.radial.shapes.clone().unwrap_or_else(defaults::shapes)
    }

    pub fn radial_sizes(&self) -> AxisTable {
        self.radial.sizes.clone().unwrap_or_else(defaults::sizes)
    }

    pub fn radial_positions(&self) -> AxisTable {
        self.radial
            .positions
            .clone()
            .unwrap_or_else(defaults::positions)
    }

    pub fn radial_colours(&self) -> ColourTable {
        self.radial.colors.clone().unwrap_or_default()
    }

    pub fn radial_variants(&self) -> Vec<String> {
        self.section_variants(&self.radial.variants)
    }

    // -- Repeating linear axes (fall back to the linear section) --

    pub fn repeating_linear_directions(&self) -> AxisTable {
        self.repeating_linear
            .directions
            .clone()
            .unwrap_or_else(|| self.linear_directions())
    }

    pub fn repeating_linear_colours(&self) -> ColourTable {
        self.repeating_linear
            .colors
            .clone()
            .unwrap_or_else(|| self.linear_colours())
    }

    pub fn repeating_linear_lengths(&self) -> AxisTable {
        self.repeating_linear.lengths.clone().unwrap_or_default()
    }

    pub fn repeating_linear_variants(&self) -> Vec<String> {
        self.section_variants(&self.repeating_linear.variants)
    }

    // -- Repeating radial axes (fall back to the radial section) --

    pub fn repeating_radial_shapes(&self) -> AxisTable {
        self.repeating_radial
            .shapes
            .clone()
            .unwrap_or_else(|| self.radial_shapes())
    }

    pub fn repeating_radial_sizes(&self) -> AxisTable {
        self.repeating_radial
            .sizes
            .clone()
            .or_else(|| self.radial.sizes.clone())
            .unwrap_or_else(defaults::repeating_sizes)
    }

    pub fn repeating_radial_positions(&self) -> AxisTable {
        self.repeating_radial
            .positions
            .clone()
            .unwrap_or_else(|| self.radial_positions())
    }

    pub fn repeating_radial_colours(&self) -> ColourTable {
        self.repeating_radial
            .colors
            .clone()
            .unwrap_or_else(|| self.radial_colours())
    }

    pub fn repeating_radial_lengths(&self) -> AxisTable {
        self.repeating_radial.lengths.clone().unwrap_or_default()
    }

    pub fn repeating_radial_variants(&self) -> Vec<String> {
        self.section_variants(&self.repeating_radial.variants)
    }

    // -- Shared --

    /// Variants for the plain `bg-none` utility and the flat-axis group.
    pub fn background_image_variants(&self) -> Vec<String> {
        self.variants.clone()
    }

    fn section_variants(&self, section: &Option<Vec<String>>) -> Vec<String> {
        section.clone().unwrap_or_else(|| self.variants.clone())
    }
}
