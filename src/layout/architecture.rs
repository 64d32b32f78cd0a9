use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::{ArchitectureSpec, CategoryTag, StyleTable};
use crate::theme::Theme;

use super::text::{measure_label, measure_label_with_font_size, truncate_label};
use super::{
    ArchitectureLayout, ArrowLayout, DiagramData, EdgeLayout, Layout, LegendEntry, NodeLayout,
};

const LEGEND_BOX_SIZE: f32 = 12.0;
const LEGEND_LABEL_GAP: f32 = 5.0;

/// Lays out the component/flow diagram: markers at their fixed data-space
/// positions, directed edges with offset arrowheads, and a legend row of
/// the categories in play.
pub fn compute_architecture_layout(
    spec: &ArchitectureSpec,
    styles: &StyleTable,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout> {
    // One data unit of padding on every side, matching the fixed axis
    // ranges the diagram was designed against.
    const PAD: f32 = 1.0;

    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for &(x, y) in spec.positions.values() {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if spec.positions.is_empty() {
        min_x = 0.0;
        max_x = 0.0;
        min_y = 0.0;
        max_y = 0.0;
    }

    let title = measure_label_with_font_size(&spec.title, theme.title_font_size, theme, config);
    let title_y = config.margin + title.height / 2.0;
    let legend_y = config.margin + title.height + config.legend_gap;
    let plot_top = legend_y + LEGEND_BOX_SIZE + config.legend_gap;

    let to_px = |(dx, dy): (f32, f32)| -> (f32, f32) {
        (
            config.margin + (dx - min_x + PAD) * config.unit,
            plot_top + (max_y + PAD - dy) * config.unit,
        )
    };

    let mut nodes = Vec::with_capacity(spec.components.len() + 1);
    let mut legend_tags: Vec<CategoryTag> = Vec::new();

    for component in &spec.components {
        let (x, y) = to_px(spec.position(&component.name)?);
        let display = spec.display_name(&component.name, config.alias_threshold_chars);
        let mut hover = vec![component.name.clone()];
        hover.extend(
            component
                .items
                .iter()
                .take(config.hover_max_items)
                .map(|item| truncate_label(item, config.truncate_chars)),
        );
        nodes.push(NodeLayout {
            name: component.name.clone(),
            x,
            y,
            color: styles.color(component.tag)?.to_string(),
            marker: styles.marker(component.tag)?,
            size: config.marker_size,
            label: measure_label(&display, theme, config),
            hover,
        });
        if !legend_tags.contains(&component.tag) {
            legend_tags.push(component.tag);
        }
    }

    // The terminal node sits outside the declarative component list but
    // shares the position table.
    let terminal = &spec.terminal;
    let (x, y) = to_px(spec.position(&terminal.name)?);
    let mut hover = vec![terminal.name.clone()];
    hover.extend(terminal.hover.iter().cloned());
    nodes.push(NodeLayout {
        name: terminal.name.clone(),
        x,
        y,
        color: styles.color(terminal.tag)?.to_string(),
        marker: styles.marker(terminal.tag)?,
        size: config.marker_size,
        label: measure_label(&terminal.name, theme, config),
        hover,
    });
    if !legend_tags.contains(&terminal.tag) {
        legend_tags.push(terminal.tag);
    }

    let mut edges = Vec::with_capacity(spec.flow.len());
    for flow in &spec.flow {
        let from = spec.position(&flow.from)?;
        let to = spec.position(&flow.to)?;
        let start = to_px(from);
        let end = to_px(to);
        let arrow = arrowhead_anchor(from, to, config.arrow_offset).map(|anchor| {
            let (ax, ay) = to_px(anchor);
            ArrowLayout {
                x: ax,
                y: ay,
                angle_deg: (end.1 - start.1).atan2(end.0 - start.0).to_degrees(),
                size: config.arrow_size,
            }
        });
        edges.push(EdgeLayout {
            points: [start, end],
            label: flow.label.clone(),
            arrow,
        });
    }

    let legend = place_legend(&legend_tags, styles, legend_y, theme, config)?;

    let plot_width = (max_x - min_x + PAD * 2.0) * config.unit;
    let plot_height = (max_y - min_y + PAD * 2.0) * config.unit;
    let legend_width = legend
        .last()
        .map(|entry| entry.x + LEGEND_BOX_SIZE + LEGEND_LABEL_GAP + entry.label.width)
        .unwrap_or(0.0);
    let width = (config.margin * 2.0 + plot_width)
        .max(config.margin * 2.0 + title.width)
        .max(config.margin + legend_width)
        .max(200.0);
    let height = (plot_top + plot_height + config.margin).max(200.0);

    Ok(Layout {
        width,
        height,
        diagram: DiagramData::Architecture(ArchitectureLayout {
            title,
            title_y,
            nodes,
            edges,
            legend,
        }),
    })
}

/// Data-space anchor of the arrowhead: `offset` units back from the
/// destination along the source->destination unit vector. Degenerate
/// zero-length edges get no arrowhead.
pub(crate) fn arrowhead_anchor(
    from: (f32, f32),
    to: (f32, f32),
    offset: f32,
) -> Option<(f32, f32)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return None;
    }
    Some((to.0 - dx / length * offset, to.1 - dy / length * offset))
}

fn place_legend(
    tags: &[CategoryTag],
    styles: &StyleTable,
    legend_y: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Vec<LegendEntry>> {
    let mut legend = Vec::with_capacity(tags.len());
    let mut x_cursor = config.margin;
    for &tag in tags {
        let label = measure_label(tag.label(), theme, config);
        let advance = LEGEND_BOX_SIZE + LEGEND_LABEL_GAP + label.width + config.legend_gap;
        legend.push(LegendEntry {
            label,
            color: styles.color(tag)?.to_string(),
            marker: styles.marker(tag)?,
            x: x_cursor,
            y: legend_y,
            size: LEGEND_BOX_SIZE,
        });
        x_cursor += advance;
    }
    Ok(legend)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::error::Error;
    use crate::model::{Component, FlowEdge, MarkerShape, TerminalNode};

    fn tiny_spec() -> ArchitectureSpec {
        let mut positions = BTreeMap::new();
        positions.insert("A".to_string(), (1.0, 4.0));
        positions.insert("B".to_string(), (3.0, 4.0));
        positions.insert("Users".to_string(), (5.0, 2.0));
        ArchitectureSpec {
            title: "Test Diagram".to_string(),
            components: vec![
                Component {
                    name: "A".to_string(),
                    tag: CategoryTag::Data,
                    items: vec!["model_list_headers.csv".to_string()],
                },
                Component {
                    name: "B".to_string(),
                    tag: CategoryTag::Frontend,
                    items: Vec::new(),
                },
            ],
            flow: vec![FlowEdge {
                from: "A".to_string(),
                to: "B".to_string(),
                label: "loads".to_string(),
            }],
            positions,
            aliases: BTreeMap::new(),
            terminal: TerminalNode {
                name: "Users".to_string(),
                tag: CategoryTag::Users,
                hover: vec!["End Users".to_string()],
            },
        }
    }

    fn tiny_styles() -> StyleTable {
        let mut colors = BTreeMap::new();
        let mut markers = BTreeMap::new();
        for (tag, color, marker) in [
            (CategoryTag::Data, "#1FB8CD", MarkerShape::Square),
            (CategoryTag::Frontend, "#FFC185", MarkerShape::Circle),
            (CategoryTag::Users, "#B4413C", MarkerShape::Star),
        ] {
            colors.insert(tag, color.to_string());
            markers.insert(tag, marker);
        }
        StyleTable { colors, markers }
    }

    #[test]
    fn arrowhead_sits_fixed_offset_before_destination() {
        let anchor = arrowhead_anchor((1.0, 4.0), (3.0, 4.0), 0.3).expect("anchor");
        assert!((anchor.0 - 2.7).abs() < 1e-6);
        assert!((anchor.1 - 4.0).abs() < 1e-6);
    }

    #[test]
    fn arrowhead_follows_the_edge_direction() {
        let anchor = arrowhead_anchor((0.0, 0.0), (0.0, 2.0), 0.3).expect("anchor");
        assert!((anchor.0 - 0.0).abs() < 1e-6);
        assert!((anchor.1 - 1.7).abs() < 1e-6);
    }

    #[test]
    fn degenerate_edge_gets_no_arrowhead() {
        assert!(arrowhead_anchor((2.0, 2.0), (2.0, 2.0), 0.3).is_none());
    }

    #[test]
    fn layout_places_every_node_and_edge() {
        let layout = compute_architecture_layout(
            &tiny_spec(),
            &tiny_styles(),
            &Theme::dashboard(),
            &LayoutConfig::default(),
        )
        .expect("layout");
        let DiagramData::Architecture(arch) = layout.diagram else {
            panic!("expected architecture diagram");
        };
        assert_eq!(arch.nodes.len(), 3);
        assert_eq!(arch.edges.len(), 1);
        assert_eq!(arch.legend.len(), 3);
        assert!(arch.edges[0].arrow.is_some());
    }

    #[test]
    fn hover_text_truncates_long_items() {
        let layout = compute_architecture_layout(
            &tiny_spec(),
            &tiny_styles(),
            &Theme::dashboard(),
            &LayoutConfig::default(),
        )
        .expect("layout");
        let DiagramData::Architecture(arch) = layout.diagram else {
            panic!("expected architecture diagram");
        };
        assert_eq!(arch.nodes[0].hover[1], "model_list_h...");
    }

    #[test]
    fn hover_text_caps_item_count() {
        let mut spec = tiny_spec();
        spec.components[0].items = (0..10).map(|i| format!("item {i}")).collect();
        let layout = compute_architecture_layout(
            &spec,
            &tiny_styles(),
            &Theme::dashboard(),
            &LayoutConfig::default(),
        )
        .expect("layout");
        let DiagramData::Architecture(arch) = layout.diagram else {
            panic!("expected architecture diagram");
        };
        // Component name plus at most six item lines.
        assert_eq!(arch.nodes[0].hover.len(), 7);
    }

    #[test]
    fn flow_to_unregistered_component_fails() {
        let mut spec = tiny_spec();
        spec.flow.push(FlowEdge {
            from: "B".to_string(),
            to: "Missing".to_string(),
            label: "broken".to_string(),
        });
        let result = compute_architecture_layout(
            &spec,
            &tiny_styles(),
            &Theme::dashboard(),
            &LayoutConfig::default(),
        );
        assert!(matches!(result, Err(Error::UnknownComponent(name)) if name == "Missing"));
    }

    #[test]
    fn unstyled_category_fails() {
        let mut styles = tiny_styles();
        styles.colors.remove(&CategoryTag::Frontend);
        let result = compute_architecture_layout(
            &tiny_spec(),
            &styles,
            &Theme::dashboard(),
            &LayoutConfig::default(),
        );
        assert!(matches!(result, Err(Error::UnknownCategory(_))));
    }
}
