//! Builtin datasets. Each is an embedded JSON payload deserialized once at
//! startup; a missing field fails deserialization before any rendering is
//! attempted.

use crate::error::Result;
use crate::model::{ArchitectureSpec, FeatureBoard, StyleTable};

const ARCHITECTURE: &str = r#"{
  "title": "AI Models Dashboard Architecture",
  "components": [
    {
      "name": "Data Sources",
      "type": "data",
      "items": ["model_list.csv", "model_list_headers.csv", "last-updated.txt"]
    },
    {
      "name": "Frontend",
      "type": "frontend",
      "items": ["index.html", "style.css", "app.js"]
    },
    {
      "name": "Features",
      "type": "features",
      "items": [
        "Interactive Table",
        "Search & Filter",
        "Dynamic Tags",
        "Export CSV",
        "Theme Toggle",
        "Responsive Design"
      ]
    },
    {
      "name": "Security",
      "type": "security",
      "items": ["Input Sanitization", "CSP Headers", "HTTPS", "XSS Protection"]
    },
    {
      "name": "Deployment",
      "type": "deployment",
      "items": ["GitHub Repository", "GitHub Actions", "GitHub Pages", "Custom Domain"]
    }
  ],
  "flow": [
    { "from": "Data Sources", "to": "Frontend", "label": "CSV Loading" },
    { "from": "Frontend", "to": "Features", "label": "User Interface" },
    { "from": "Features", "to": "Security", "label": "Input Processing" },
    { "from": "Frontend", "to": "Deployment", "label": "Static Files" },
    { "from": "Deployment", "to": "Users", "label": "HTTPS Delivery" }
  ],
  "positions": {
    "Data Sources": [1, 4],
    "Frontend": [3, 4],
    "Features": [5, 5],
    "Security": [7, 5],
    "Deployment": [5, 2],
    "Users": [7, 2]
  },
  "aliases": {
    "Data Sources": "Data Sources",
    "Deployment": "Deploy"
  },
  "terminal": {
    "name": "Users",
    "type": "users",
    "hover": ["End Users", "Developers"]
  }
}"#;

const STYLES: &str = r##"{
  "colors": {
    "data": "#1FB8CD",
    "frontend": "#FFC185",
    "features": "#ECEBD5",
    "security": "#5D878F",
    "deployment": "#D2BA4C",
    "users": "#B4413C"
  },
  "markers": {
    "data": "square",
    "frontend": "circle",
    "features": "diamond",
    "security": "triangle-up",
    "deployment": "hexagon",
    "users": "star"
  }
}"##;

const FEATURES: &str = r##"{
  "title": "AI Dashboard Overview",
  "categories": [
    {
      "name": "Core Features",
      "cell": { "row": 1, "col": 1 },
      "color": "#1FB8CD",
      "features": [
        { "name": "Interactive Table", "value": 15, "max": 15, "unit": "models", "status": "complete" },
        { "name": "Search & Filter", "value": 100, "max": 100, "unit": "%", "status": "complete" },
        { "name": "Provider Tags", "value": 8, "max": 10, "unit": "providers", "status": "active" },
        { "name": "Export Options", "value": 2, "max": 3, "unit": "formats", "status": "active" },
        { "name": "Themes", "value": 2, "max": 2, "unit": "modes", "status": "complete" }
      ]
    },
    {
      "name": "Performance",
      "cell": { "row": 1, "col": 2 },
      "color": "#FFC185",
      "features": [
        { "name": "Load Time", "value": 2.1, "max": 3.0, "unit": "seconds", "status": "excellent", "direction": "lower_is_better" },
        { "name": "Mobile Score", "value": 95, "max": 100, "unit": "%", "status": "excellent" },
        { "name": "Accessibility", "value": 98, "max": 100, "unit": "%", "status": "excellent" },
        { "name": "SEO Score", "value": 92, "max": 100, "unit": "%", "status": "good" }
      ]
    },
    {
      "name": "Security",
      "cell": { "row": 2, "col": 1 },
      "color": "#ECEBD5",
      "features": [
        { "name": "Input Sanitization", "value": 100, "max": 100, "unit": "%", "status": "secure" },
        { "name": "CSP Headers", "value": 100, "max": 100, "unit": "%", "status": "secure" },
        { "name": "HTTPS Only", "value": 100, "max": 100, "unit": "%", "status": "secure" },
        { "name": "XSS Protection", "value": 100, "max": 100, "unit": "%", "status": "secure" }
      ]
    },
    {
      "name": "Compatibility",
      "cell": { "row": 2, "col": 2 },
      "color": "#5D878F",
      "features": [
        { "name": "Modern Browsers", "value": 100, "max": 100, "unit": "%", "status": "supported" },
        { "name": "Mobile Devices", "value": 100, "max": 100, "unit": "%", "status": "supported" },
        { "name": "Screen Sizes", "value": 5, "max": 5, "unit": "ranges", "status": "responsive" },
        { "name": "GitHub Pages", "value": 100, "max": 100, "unit": "%", "status": "compatible" }
      ]
    }
  ]
}"##;

pub fn architecture() -> Result<ArchitectureSpec> {
    Ok(serde_json::from_str(ARCHITECTURE)?)
}

pub fn styles() -> Result<StyleTable> {
    Ok(serde_json::from_str(STYLES)?)
}

pub fn feature_board() -> Result<FeatureBoard> {
    Ok(serde_json::from_str(FEATURES)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryTag, MarkerShape};

    #[test]
    fn architecture_dataset_parses() {
        let spec = architecture().expect("builtin architecture dataset");
        assert_eq!(spec.components.len(), 5);
        assert_eq!(spec.flow.len(), 5);
        assert_eq!(spec.terminal.name, "Users");
    }

    #[test]
    fn every_flow_endpoint_has_a_position() {
        let spec = architecture().expect("builtin architecture dataset");
        for edge in &spec.flow {
            assert!(spec.position(&edge.from).is_ok(), "no position: {}", edge.from);
            assert!(spec.position(&edge.to).is_ok(), "no position: {}", edge.to);
        }
    }

    #[test]
    fn every_category_tag_has_a_style() {
        let table = styles().expect("builtin style table");
        let spec = architecture().expect("builtin architecture dataset");
        for component in &spec.components {
            assert!(table.color(component.tag).is_ok());
            assert!(table.marker(component.tag).is_ok());
        }
        assert_eq!(table.marker(CategoryTag::Users).unwrap(), MarkerShape::Star);
        assert_eq!(table.marker(CategoryTag::Security).unwrap(), MarkerShape::TriangleUp);
    }

    #[test]
    fn feature_board_dataset_parses() {
        let board = feature_board().expect("builtin feature board");
        assert_eq!(board.categories.len(), 4);
        assert_eq!(board.total_features(), 17);
    }

    #[test]
    fn load_time_carries_the_direction_flag() {
        let board = feature_board().expect("builtin feature board");
        let load_time = board
            .features()
            .find(|f| f.name == "Load Time")
            .expect("Load Time entry");
        assert_eq!(load_time.direction, crate::model::Direction::LowerIsBetter);
        assert_eq!(load_time.completion(), 30);
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let malformed = r##"{ "title": "x", "categories": [
            { "name": "c", "cell": { "row": 1, "col": 1 }, "color": "#000",
              "features": [ { "name": "f", "value": 1 } ] } ] }"##;
        let parsed: crate::error::Result<FeatureBoard> =
            serde_json::from_str::<FeatureBoard>(malformed).map_err(Into::into);
        assert!(parsed.is_err());
    }
}
