//! Chart configuration types.

use crate::ParseError;
use salesmap_core::Size;
use salesmap_layout::Tiling;
use serde::{Deserialize, Serialize};

/// Published video-game sales dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// Complete chart configuration, loaded from YAML or taken from defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Drawing surface width in px
    pub width: f64,
    /// Drawing surface height in px
    pub height: f64,
    /// Share of the width given to the treemap; the legend gets the rest
    pub treemap_fraction: f64,
    /// Gap between sibling rectangles in px
    pub padding: f64,
    /// Tiling algorithm
    pub tile: Tiling,
    /// Leaf label placement
    pub label: LabelConfig,
    /// Tooltip behaviour
    pub tooltip: TooltipConfig,
    /// Legend geometry
    pub legend: LegendConfig,
    /// Where the dataset comes from
    pub data: DataSource,
    /// Element ids the chart binds to in the host page
    pub anchors: Anchors,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 720.0,
            treemap_fraction: 0.8,
            padding: 2.0,
            tile: Tiling::Squarify,
            label: LabelConfig::default(),
            tooltip: TooltipConfig::default(),
            legend: LegendConfig::default(),
            data: DataSource::default(),
            anchors: Anchors::default(),
        }
    }
}

/// Offsets of the per-word labels inside a leaf rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Horizontal offset from the rectangle's left edge
    pub text_offset_x: f64,
    /// Baseline of the first word, from the rectangle's top edge
    pub text_offset_y: f64,
    /// Distance between consecutive word baselines
    pub text_line_height: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text_offset_x: 5.0,
            text_offset_y: 15.0,
            text_line_height: 15.0,
        }
    }
}

/// How the tooltip is shown and hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    /// `visibility: visible | hidden`
    #[default]
    Visibility,
    /// `display: block | none`
    Display,
}

impl Toggle {
    /// Style property and value that reveal the tooltip.
    #[must_use]
    pub const fn shown(self) -> (&'static str, &'static str) {
        match self {
            Self::Visibility => ("visibility", "visible"),
            Self::Display => ("display", "block"),
        }
    }

    /// Style property and value that hide the tooltip.
    #[must_use]
    pub const fn hidden(self) -> (&'static str, &'static str) {
        match self {
            Self::Visibility => ("visibility", "hidden"),
            Self::Display => ("display", "none"),
        }
    }
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Pixels right of the pointer
    pub offset_x: f64,
    /// Pixels below the pointer
    pub offset_y: f64,
    /// Show/hide mechanism
    pub toggle: Toggle,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_y: 10.0,
            toggle: Toggle::Visibility,
        }
    }
}

/// Legend swatch and label geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Inset of the first row from the legend's top-left corner
    pub padding: f64,
    /// Vertical distance between rows
    pub line_height: f64,
    /// Swatch width
    pub box_width: f64,
    /// Swatch height
    pub box_height: f64,
    /// Space between swatch and label
    pub gap: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            padding: 25.0,
            line_height: 25.0,
            box_width: 20.0,
            box_height: 20.0,
            gap: 30.0,
        }
    }
}

impl LegendConfig {
    /// X of every label: right of the swatch plus the gap.
    #[must_use]
    pub fn label_x(&self) -> f64 {
        self.padding + self.box_width + self.gap
    }

    /// Y of the swatch in row `row`.
    #[must_use]
    pub fn row_y(&self, row: usize) -> f64 {
        self.padding + self.line_height * row as f64
    }
}

/// Dataset location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSource {
    /// URL fetched by the browser runtime
    pub url: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

/// Ids of the host page elements the chart draws into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anchors {
    /// The `svg` drawing surface
    pub surface: String,
    /// Tooltip container
    pub tooltip: String,
    /// Tooltip name line
    pub info_name: String,
    /// Tooltip category line
    pub info_category: String,
    /// Tooltip value line
    pub info_value: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            surface: "graph".to_string(),
            tooltip: "tooltip".to_string(),
            info_name: "info-name".to_string(),
            info_category: "info-category".to_string(),
            info_value: "info-value".to_string(),
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ParseError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParseError::invalid(field, "must be finite and non-negative"))
    }
}

fn finite(field: &str, value: f64) -> Result<(), ParseError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParseError::invalid(field, "must be finite"))
    }
}

impl ChartConfig {
    /// Parse and validate a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value fails [`Self::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check every numeric field.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParseError::invalid(field, "must be finite and positive"));
            }
        }
        if !(self.treemap_fraction > 0.0 && self.treemap_fraction <= 1.0) {
            return Err(ParseError::invalid("treemap_fraction", "must be in (0, 1]"));
        }
        non_negative("padding", self.padding)?;

        finite("label.text_offset_x", self.label.text_offset_x)?;
        finite("label.text_offset_y", self.label.text_offset_y)?;
        non_negative("label.text_line_height", self.label.text_line_height)?;

        finite("tooltip.offset_x", self.tooltip.offset_x)?;
        finite("tooltip.offset_y", self.tooltip.offset_y)?;

        let legend = &self.legend;
        non_negative("legend.padding", legend.padding)?;
        non_negative("legend.line_height", legend.line_height)?;
        non_negative("legend.box_width", legend.box_width)?;
        non_negative("legend.box_height", legend.box_height)?;
        non_negative("legend.gap", legend.gap)?;

        for (field, id) in [
            ("anchors.surface", &self.anchors.surface),
            ("anchors.tooltip", &self.anchors.tooltip),
            ("anchors.info_name", &self.anchors.info_name),
            ("anchors.info_category", &self.anchors.info_category),
            ("anchors.info_value", &self.anchors.info_value),
        ] {
            if id.trim().is_empty() {
                return Err(ParseError::invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }

    /// Whole drawing surface.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width of the treemap region.
    #[must_use]
    pub fn treemap_width(&self) -> f64 {
        self.width * self.treemap_fraction
    }

    /// Treemap region, anchored at the surface origin.
    #[must_use]
    pub fn treemap_size(&self) -> Size {
        Size::new(self.treemap_width(), self.height)
    }

    /// Width left for the legend.
    #[must_use]
    pub fn legend_width(&self) -> f64 {
        self.width - self.treemap_width()
    }
}
