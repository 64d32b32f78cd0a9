use std::path::Path;

use crate::config::LayoutConfig;
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::{
    ArchitectureLayout, CellLayout, DiagramData, FeatureBoardLayout, Layout, TextBlock,
};
use crate::model::MarkerShape;
use crate::theme::Theme;

pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width.max(200.0);
    let height = layout.height.max(200.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    match &layout.diagram {
        DiagramData::Architecture(arch) => {
            render_architecture(&mut svg, arch, width, theme, config)
        }
        DiagramData::FeatureBoard(board) => {
            render_feature_board(&mut svg, board, width, theme, config)
        }
    }

    svg.push_str("</svg>");
    svg
}

fn render_architecture(
    svg: &mut String,
    arch: &ArchitectureLayout,
    width: f32,
    theme: &Theme,
    config: &LayoutConfig,
) {
    title_svg(svg, &arch.title, width / 2.0, arch.title_y, theme);

    for entry in &arch.legend {
        let center = entry.y + entry.size / 2.0;
        svg.push_str(&marker_svg(
            entry.marker,
            entry.x + entry.size / 2.0,
            center,
            entry.size,
            &entry.color,
            &theme.marker_outline,
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            entry.x + entry.size + 5.0,
            center,
            theme.font_family,
            theme.font_size,
            theme.text_color,
            escape_xml(&entry.label.lines[0])
        ));
    }

    for edge in &arch.edges {
        let [(x1, y1), (x2, y2)] = edge.points;
        svg.push_str("<g>");
        svg.push_str(&format!(
            "<title>{}</title>",
            escape_xml(&edge.label)
        ));
        svg.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"2\"/>",
            theme.line_color
        ));
        if let Some(arrow) = &edge.arrow {
            let half = arrow.size * 0.6;
            svg.push_str(&format!(
                "<polygon points=\"{:.2},0 {:.2},{:.2} {:.2},{:.2}\" fill=\"{}\" transform=\"translate({:.2} {:.2}) rotate({:.2})\"/>",
                arrow.size,
                -half,
                half,
                -half,
                -half,
                theme.line_color,
                arrow.x,
                arrow.y,
                arrow.angle_deg
            ));
        }
        svg.push_str("</g>");
    }

    for node in &arch.nodes {
        svg.push_str("<g>");
        svg.push_str(&format!(
            "<title>{}</title>",
            escape_xml(&node.hover.join("\n"))
        ));
        svg.push_str(&marker_svg(
            node.marker,
            node.x,
            node.y,
            node.size,
            &node.color,
            &theme.marker_outline,
        ));
        svg.push_str(&text_block_svg(
            node.x,
            node.y,
            &node.label,
            theme.font_size,
            &theme.text_color,
            theme,
            config,
        ));
        svg.push_str("</g>");
    }
}

fn render_feature_board(
    svg: &mut String,
    board: &FeatureBoardLayout,
    width: f32,
    theme: &Theme,
    config: &LayoutConfig,
) {
    title_svg(svg, &board.title, width / 2.0, board.title_y, theme);
    for cell in &board.cells {
        render_cell(svg, cell, theme, config);
    }
}

fn render_cell(svg: &mut String, cell: &CellLayout, theme: &Theme, config: &LayoutConfig) {
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        cell.title_x,
        cell.title_y,
        theme.font_family,
        theme.font_size,
        theme.text_color,
        escape_xml(&cell.title.lines[0])
    ));

    let axis_y = cell.plot_y + cell.plot_height;
    for tick in &cell.ticks {
        svg.push_str(&format!(
            "<line x1=\"{x:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"0.5\"/>",
            cell.plot_y,
            axis_y,
            theme.axis_color,
            x = tick.x
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            tick.x,
            axis_y + theme.font_size + 4.0,
            theme.font_family,
            theme.font_size,
            theme.muted_text_color,
            escape_xml(&tick.label)
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{axis_y:.2}\" x2=\"{:.2}\" y2=\"{axis_y:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
        cell.plot_x,
        cell.plot_x + cell.plot_width,
        theme.muted_text_color
    ));

    for bar in &cell.bars {
        let bar_center = bar.y + bar.height / 2.0;
        svg.push_str("<g>");
        svg.push_str(&format!(
            "<title>{}</title>",
            escape_xml(&bar.hover.join("\n"))
        ));
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"2\" ry=\"2\" fill=\"{}\"/>",
            bar.x, bar.y, bar.width, bar.height, bar.color
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{bar_center:.2}\" text-anchor=\"end\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            bar.x - 6.0,
            theme.font_family,
            theme.font_size,
            theme.text_color,
            escape_xml(&bar.axis_label.lines[0])
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{bar_center:.2}\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            bar.x + bar.width + 4.0,
            theme.font_family,
            theme.font_size,
            theme.text_color,
            escape_xml(&bar.value_text)
        ));
        svg.push_str("</g>");
    }

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        cell.plot_x + cell.plot_width / 2.0,
        axis_y + config.board.axis_height - 4.0,
        theme.font_family,
        theme.font_size,
        theme.muted_text_color,
        escape_xml(&cell.x_title.lines[0])
    ));
    let y_title_x = cell.plot_x - config.board.label_gutter + 10.0;
    let y_title_y = cell.plot_y + cell.plot_height / 2.0;
    svg.push_str(&format!(
        "<text x=\"{y_title_x:.2}\" y=\"{y_title_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" transform=\"rotate(-90 {y_title_x:.2} {y_title_y:.2})\">{}</text>",
        theme.font_family,
        theme.font_size,
        theme.muted_text_color,
        escape_xml(&cell.y_title.lines[0])
    ));
}

fn title_svg(svg: &mut String, title: &TextBlock, x: f32, y: f32, theme: &Theme) {
    svg.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        theme.font_family,
        theme.title_font_size,
        theme.text_color,
        escape_xml(&title.lines[0])
    ));
}

fn marker_svg(shape: MarkerShape, x: f32, y: f32, size: f32, fill: &str, outline: &str) -> String {
    let r = size / 2.0;
    let stroke = format!("fill=\"{fill}\" stroke=\"{outline}\" stroke-width=\"2\"");
    match shape {
        MarkerShape::Square => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{size:.2}\" height=\"{size:.2}\" rx=\"2\" ry=\"2\" {stroke}/>",
            x - r,
            y - r
        ),
        MarkerShape::Circle => {
            format!("<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{r:.2}\" {stroke}/>")
        }
        MarkerShape::Diamond => polygon(
            &[(x, y - r), (x + r, y), (x, y + r), (x - r, y)],
            &stroke,
        ),
        MarkerShape::TriangleUp => polygon(
            &[
                (x, y - r),
                (x + 0.866 * r, y + 0.5 * r),
                (x - 0.866 * r, y + 0.5 * r),
            ],
            &stroke,
        ),
        MarkerShape::Hexagon => {
            let points: Vec<(f32, f32)> = (0..6)
                .map(|i| {
                    let angle = (60.0 * i as f32 - 30.0).to_radians();
                    (x + r * angle.cos(), y + r * angle.sin())
                })
                .collect();
            polygon(&points, &stroke)
        }
        MarkerShape::Star => {
            let inner = r * 0.45;
            let points: Vec<(f32, f32)> = (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { r } else { inner };
                    let angle = (36.0 * i as f32 - 90.0).to_radians();
                    (x + radius * angle.cos(), y + radius * angle.sin())
                })
                .collect();
            polygon(&points, &stroke)
        }
    }
}

fn polygon(points: &[(f32, f32)], attrs: &str) -> String {
    let list = points
        .iter()
        .map(|(px, py)| format!("{px:.2},{py:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<polygon points=\"{list}\" {attrs}/>")
}

fn text_block_svg(
    x: f32,
    y: f32,
    label: &TextBlock,
    font_size: f32,
    fill: &str,
    theme: &Theme,
    config: &LayoutConfig,
) -> String {
    let line_height = font_size * config.label_line_height;
    let total_height = label.lines.len() as f32 * line_height;
    let start_y = y - total_height / 2.0 + line_height / 2.0;
    let mut text = String::new();
    text.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{start_y:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{font_size}\" fill=\"{fill}\">",
        theme.font_family
    ));
    for (idx, line) in label.lines.iter().enumerate() {
        let dy = if idx == 0 { 0.0 } else { line_height };
        text.push_str(&format!(
            "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\">{}</tspan>",
            escape_xml(line)
        ));
    }
    text.push_str("</text>");
    text
}

pub fn write_output_svg(svg: &str, output: &Path) -> Result<()> {
    std::fs::write(output, svg)?;
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or_else(|| usvg::Size::from_wh(800.0, 600.0).expect("nonzero fallback size"));

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|err| crate::error::Error::Render(format!("svg parse failed: {err}")))?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| crate::error::Error::Render("failed to allocate pixmap".to_string()))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap
        .save_png(output)
        .map_err(|err| crate::error::Error::Render(format!("png encode failed: {err}")))?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::dataset;
    use crate::layout::{compute_architecture_layout, compute_feature_board_layout};

    #[test]
    fn render_architecture_svg() {
        let spec = dataset::architecture().expect("builtin architecture dataset");
        let styles = dataset::styles().expect("builtin style table");
        let theme = Theme::dashboard();
        let config = LayoutConfig::default();
        let layout =
            compute_architecture_layout(&spec, &styles, &theme, &config).expect("layout");
        let svg = render_svg(&layout, &theme, &config);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Frontend"));
        assert!(svg.contains("HTTPS Delivery"));
        // One rotated arrowhead polygon per flow edge.
        assert_eq!(svg.matches("rotate(").count(), spec.flow.len());
    }

    #[test]
    fn render_feature_board_svg() {
        let board = dataset::feature_board().expect("builtin feature board");
        let theme = Theme::dashboard();
        let config = LayoutConfig::default();
        let layout = compute_feature_board_layout(&board, &theme, &config).expect("layout");
        let svg = render_svg(&layout, &theme, &config);
        assert!(svg.contains("AI Dashboard Overview - 65% Complete"));
        assert!(svg.contains("2.1s"));
        assert!(svg.contains("Input Saniti..."));
    }

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml("Search & Filter"), "Search &amp; Filter");
        assert_eq!(escape_xml("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
    }
}
