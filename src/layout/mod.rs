mod architecture;
mod features;
mod text;

pub use architecture::compute_architecture_layout;
pub use features::compute_feature_board_layout;
pub use text::truncate_label;

use crate::model::MarkerShape;

/// Measured multi-line text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

/// A component marker, positioned in pixel space at its center.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub marker: MarkerShape,
    pub size: f32,
    pub label: TextBlock,
    /// Annotation lines surfaced as hover text.
    pub hover: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EdgeLayout {
    pub points: [(f32, f32); 2],
    pub label: String,
    pub arrow: Option<ArrowLayout>,
}

/// Arrowhead marker: position of its tip anchor and the edge heading in
/// screen space.
#[derive(Debug, Clone)]
pub struct ArrowLayout {
    pub x: f32,
    pub y: f32,
    pub angle_deg: f32,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: TextBlock,
    pub color: String,
    pub marker: MarkerShape,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct ArchitectureLayout {
    pub title: TextBlock,
    pub title_y: f32,
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<EdgeLayout>,
    pub legend: Vec<LegendEntry>,
}

/// One horizontal bar of the feature board.
#[derive(Debug, Clone)]
pub struct BarLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub axis_label: TextBlock,
    pub value_text: String,
    pub hover: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AxisTick {
    pub label: String,
    pub x: f32,
}

/// One subplot cell of the feature board grid.
#[derive(Debug, Clone)]
pub struct CellLayout {
    pub title: TextBlock,
    pub title_x: f32,
    pub title_y: f32,
    pub plot_x: f32,
    pub plot_y: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    pub bars: Vec<BarLayout>,
    pub ticks: Vec<AxisTick>,
    pub x_title: TextBlock,
    pub y_title: TextBlock,
}

#[derive(Debug, Clone)]
pub struct FeatureBoardLayout {
    pub title: TextBlock,
    pub title_y: f32,
    pub cells: Vec<CellLayout>,
}

#[derive(Debug, Clone)]
pub enum DiagramData {
    Architecture(ArchitectureLayout),
    FeatureBoard(FeatureBoardLayout),
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub diagram: DiagramData,
}
