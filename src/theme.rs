use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub title_font_size: f32,
    pub background: String,
    pub text_color: String,
    pub muted_text_color: String,
    pub line_color: String,
    pub axis_color: String,
    pub marker_outline: String,
}

impl Theme {
    /// Palette matched to the dashboard the charts describe.
    pub fn dashboard() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 10.0,
            title_font_size: 17.0,
            background: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            muted_text_color: "#5B6770".to_string(),
            line_color: "#13343B".to_string(),
            axis_color: "#C7D2E5".to_string(),
            marker_outline: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dashboard()
    }
}
