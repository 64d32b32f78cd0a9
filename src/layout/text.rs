use crate::config::LayoutConfig;
use crate::text_metrics;
use crate::theme::Theme;

use super::TextBlock;

/// Cuts `text` to its first `max_chars` characters plus an ellipsis when it
/// runs longer.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

pub(super) fn measure_label(text: &str, theme: &Theme, config: &LayoutConfig) -> TextBlock {
    measure_label_with_font_size(text, theme.font_size, theme, config)
}

pub(super) fn measure_label_with_font_size(
    text: &str,
    font_size: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> TextBlock {
    let mut lines: Vec<String> = text.split('\n').map(|line| line.trim().to_string()).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let width = lines
        .iter()
        .map(|line| text_metrics::text_width(line, font_size, &theme.font_family))
        .fold(0.0, f32::max);
    let height = lines.len() as f32 * font_size * config.label_line_height;

    TextBlock {
        lines,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_labels_alone() {
        assert_eq!(truncate_label("index.html", 12), "index.html");
        assert_eq!(truncate_label("model_list.c", 12), "model_list.c");
    }

    #[test]
    fn truncate_cuts_to_prefix_plus_ellipsis() {
        assert_eq!(truncate_label("Input Sanitization", 12), "Input Saniti...");
        assert_eq!(truncate_label("model_list_headers.csv", 12), "model_list_h...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_label("ééééééééééééé", 12), "éééééééééééé...");
    }

    #[test]
    fn measure_label_produces_nonempty_block() {
        let theme = Theme::dashboard();
        let config = LayoutConfig::default();
        let block = measure_label("CSV Loading", &theme, &config);
        assert_eq!(block.lines.len(), 1);
        assert!(block.width > 0.0);
        assert!(block.height > 0.0);
    }

    #[test]
    fn measure_label_splits_on_newlines() {
        let theme = Theme::dashboard();
        let config = LayoutConfig::default();
        let block = measure_label("End Users\nDevelopers", &theme, &config);
        assert_eq!(block.lines.len(), 2);
    }
}
