use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::theme::Theme;

/// Geometry knobs for the architecture diagram. Distances prefixed with
/// `arrow_` and the `unit` scale are in data coordinates; everything else
/// is pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Pixels per data unit of the position table.
    pub unit: f32,
    pub margin: f32,
    pub marker_size: f32,
    /// Arrowhead offset back from the destination, normalized by edge
    /// length (data units).
    pub arrow_offset: f32,
    pub arrow_size: f32,
    pub label_line_height: f32,
    /// Hover text carries at most this many item labels per component.
    pub hover_max_items: usize,
    /// Labels longer than this are truncated with an ellipsis.
    pub truncate_chars: usize,
    /// Display names longer than this consult the alias table.
    pub alias_threshold_chars: usize,
    pub legend_gap: f32,
    pub board: BoardLayoutConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: 110.0,
            margin: 40.0,
            marker_size: 30.0,
            arrow_offset: 0.3,
            arrow_size: 8.0,
            label_line_height: 1.4,
            hover_max_items: 6,
            truncate_chars: 12,
            alias_threshold_chars: 15,
            legend_gap: 18.0,
            board: BoardLayoutConfig::default(),
        }
    }
}

/// Geometry of the 2x2 feature board grid, all in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLayoutConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub cell_gap_x: f32,
    pub cell_gap_y: f32,
    pub bar_height: f32,
    /// Left gutter reserved for feature name labels.
    pub label_gutter: f32,
    pub axis_height: f32,
    /// X axis domain upper bound; headroom past 100 keeps value text
    /// inside the plot.
    pub x_max: f32,
    pub tick_step: f32,
}

impl Default for BoardLayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 420.0,
            cell_height: 240.0,
            cell_gap_x: 48.0,
            cell_gap_y: 56.0,
            bar_height: 20.0,
            label_gutter: 96.0,
            axis_height: 44.0,
            x_max: 105.0,
            tick_step: 25.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutOverrides>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    text_color: Option<String>,
    line_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOverrides {
    unit: Option<f32>,
    margin: Option<f32>,
    marker_size: Option<f32>,
    arrow_offset: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.unit {
            config.layout.unit = v;
        }
        if let Some(v) = layout.margin {
            config.layout.margin = v;
        }
        if let Some(v) = layout.marker_size {
            config.layout.marker_size = v;
        }
        if let Some(v) = layout.arrow_offset {
            config.layout.arrow_offset = v;
        }
    }

    Ok(config)
}
