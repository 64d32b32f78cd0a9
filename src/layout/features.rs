use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::FeatureBoard;
use crate::theme::Theme;

use super::text::{measure_label, measure_label_with_font_size, truncate_label};
use super::{AxisTick, BarLayout, CellLayout, DiagramData, FeatureBoardLayout, Layout};

const CELL_TITLE_GAP: f32 = 10.0;

/// Lays out the feature board: one horizontal-bar subplot per category in
/// a fixed grid, plus the aggregate completion statistic in the figure
/// title.
pub fn compute_feature_board_layout(
    board: &FeatureBoard,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout> {
    let b = &config.board;
    let rows = board
        .categories
        .iter()
        .map(|c| c.cell.row)
        .max()
        .unwrap_or(1)
        .max(1);
    let cols = board
        .categories
        .iter()
        .map(|c| c.cell.col)
        .max()
        .unwrap_or(1)
        .max(1);

    let title_text = format!("{} - {}% Complete", board.title, board.overall_completion());
    let title = measure_label_with_font_size(&title_text, theme.title_font_size, theme, config);
    let title_y = config.margin + title.height / 2.0;
    let grid_top = config.margin + title.height + config.legend_gap;

    let mut cells = Vec::with_capacity(board.categories.len());
    for category in &board.categories {
        let cell_x =
            config.margin + (category.cell.col.saturating_sub(1)) as f32 * (b.cell_width + b.cell_gap_x);
        let cell_y =
            grid_top + (category.cell.row.saturating_sub(1)) as f32 * (b.cell_height + b.cell_gap_y);

        let cell_title = measure_label(&category.name, theme, config);
        let plot_x = cell_x + b.label_gutter;
        let plot_y = cell_y + cell_title.height + CELL_TITLE_GAP;
        let plot_width = b.cell_width - b.label_gutter;
        let plot_height = b.cell_height - cell_title.height - CELL_TITLE_GAP - b.axis_height;

        let stride = plot_height / category.features.len().max(1) as f32;
        let mut bars = Vec::with_capacity(category.features.len());
        for (idx, feature) in category.features.iter().enumerate() {
            let completion = feature.completion();
            let display = feature.display_value();
            let hover = vec![
                feature.name.clone(),
                format!("Value: {display}"),
                format!("Status: {}", feature.status),
                format!("Completion: {completion}%"),
            ];
            bars.push(BarLayout {
                x: plot_x,
                y: plot_y + idx as f32 * stride + (stride - b.bar_height) / 2.0,
                width: completion as f32 / b.x_max * plot_width,
                height: b.bar_height,
                color: category.color.clone(),
                axis_label: measure_label(
                    &truncate_label(&feature.name, config.truncate_chars),
                    theme,
                    config,
                ),
                value_text: display,
                hover,
            });
        }

        let mut ticks = Vec::new();
        let mut tick = 0.0;
        while tick <= 100.0 {
            ticks.push(AxisTick {
                label: format!("{tick:.0}"),
                x: plot_x + tick / b.x_max * plot_width,
            });
            tick += b.tick_step.max(1.0);
        }

        cells.push(CellLayout {
            title: cell_title,
            title_x: plot_x + plot_width / 2.0,
            title_y: cell_y + theme.font_size,
            plot_x,
            plot_y,
            plot_width,
            plot_height,
            bars,
            ticks,
            x_title: measure_label("Completion %", theme, config),
            y_title: measure_label("Features", theme, config),
        });
    }

    let grid_width = cols as f32 * b.cell_width + (cols - 1) as f32 * b.cell_gap_x;
    let grid_height = rows as f32 * b.cell_height + (rows - 1) as f32 * b.cell_gap_y;
    let width = (config.margin * 2.0 + grid_width)
        .max(config.margin * 2.0 + title.width)
        .max(200.0);
    let height = (grid_top + grid_height + config.margin).max(200.0);

    Ok(Layout {
        width,
        height,
        diagram: DiagramData::FeatureBoard(FeatureBoardLayout {
            title,
            title_y,
            cells,
        }),
    })
}
