use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification used to pick a component's visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Data,
    Frontend,
    Features,
    Security,
    Deployment,
    Users,
}

impl CategoryTag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Frontend => "Frontend",
            Self::Features => "Features",
            Self::Security => "Security",
            Self::Deployment => "Deployment",
            Self::Users => "Users",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerShape {
    Square,
    Circle,
    Diamond,
    TriangleUp,
    Hexagon,
    Star,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: CategoryTag,
    pub items: Vec<String>,
}

/// Directed relationship between two named components.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// The synthetic sink node appended after the declarative component list.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalNode {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: CategoryTag,
    pub hover: Vec<String>,
}

/// Complete architecture diagram description: components, flows, and the
/// fixed position table they are laid out from. Constructed once, never
/// mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureSpec {
    pub title: String,
    pub components: Vec<Component>,
    pub flow: Vec<FlowEdge>,
    pub positions: BTreeMap<String, (f32, f32)>,
    /// Display aliases for names too long to fit inside a marker.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    pub terminal: TerminalNode,
}

impl ArchitectureSpec {
    /// Position lookup. A component without a registered position is a
    /// fatal data error.
    pub fn position(&self, name: &str) -> Result<(f32, f32)> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownComponent(name.to_string()))
    }

    /// Alias lookup for display names exceeding `max_chars`. A long name
    /// without an alias entry is left unmodified.
    pub fn display_name(&self, name: &str, max_chars: usize) -> String {
        if name.chars().count() > max_chars {
            if let Some(alias) = self.aliases.get(name) {
                return alias.clone();
            }
        }
        name.to_string()
    }
}

/// Category tag -> fill color and marker shape. Passed into the layout
/// explicitly so tests can substitute alternate tables.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleTable {
    pub colors: BTreeMap<CategoryTag, String>,
    pub markers: BTreeMap<CategoryTag, MarkerShape>,
}

impl StyleTable {
    pub fn color(&self, tag: CategoryTag) -> Result<&str> {
        self.colors
            .get(&tag)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownCategory(tag.label().to_string()))
    }

    pub fn marker(&self, tag: CategoryTag) -> Result<MarkerShape> {
        self.markers
            .get(&tag)
            .copied()
            .ok_or_else(|| Error::UnknownCategory(tag.label().to_string()))
    }
}

/// Whether a larger value moves a feature toward completion or away from
/// it. Latency-style metrics carry `LowerIsBetter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub name: String,
    pub value: f64,
    pub max: f64,
    pub unit: String,
    pub status: String,
    #[serde(default)]
    pub direction: Direction,
}

impl Feature {
    /// Normalized progress in [0, 100] for `value` in [0, max].
    pub fn completion(&self) -> u32 {
        let ratio = match self.direction {
            Direction::HigherIsBetter => self.value / self.max,
            Direction::LowerIsBetter => (self.max - self.value) / self.max,
        };
        (ratio * 100.0).round() as u32
    }

    /// Value string shown at the bar end: percentage form for `%`, `Ns`
    /// form for seconds, `value/max` otherwise.
    pub fn display_value(&self) -> String {
        match self.unit.as_str() {
            "%" => format!("{}%", self.value),
            "seconds" => format!("{}s", self.value),
            _ => format!("{}/{}", self.value, self.max),
        }
    }
}

/// 1-based cell coordinates inside the subplot grid.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    pub cell: GridCell,
    pub color: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureBoard {
    pub title: String,
    pub categories: Vec<FeatureCategory>,
}

impl FeatureBoard {
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.categories.iter().flat_map(|c| c.features.iter())
    }

    pub fn total_features(&self) -> usize {
        self.features().count()
    }

    pub fn completed_features(&self) -> usize {
        self.features().filter(|f| f.completion() == 100).count()
    }

    /// Share of features whose completion is exactly 100, as a rounded
    /// percentage of the total.
    pub fn overall_completion(&self) -> u32 {
        let total = self.total_features();
        if total == 0 {
            return 0;
        }
        (self.completed_features() as f64 / total as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(name: &str, value: f64, max: f64, unit: &str, direction: Direction) -> Feature {
        Feature {
            name: name.to_string(),
            value,
            max,
            unit: unit.to_string(),
            status: "active".to_string(),
            direction,
        }
    }

    #[test]
    fn completion_scales_value_against_max() {
        let f = feature("Provider Tags", 8.0, 10.0, "providers", Direction::HigherIsBetter);
        assert_eq!(f.completion(), 80);
    }

    #[test]
    fn completion_rounds_to_nearest_integer() {
        let f = feature("Export Options", 2.0, 3.0, "formats", Direction::HigherIsBetter);
        assert_eq!(f.completion(), 67);
    }

    #[test]
    fn completion_inverts_for_lower_is_better() {
        let f = feature("Load Time", 2.1, 3.0, "seconds", Direction::LowerIsBetter);
        assert_eq!(f.completion(), 30);
    }

    #[test]
    fn completion_stays_in_percent_range() {
        for value in [0.0, 1.0, 49.5, 99.9, 100.0] {
            let f = feature("x", value, 100.0, "%", Direction::HigherIsBetter);
            assert!(f.completion() <= 100);
            let g = feature("y", value, 100.0, "%", Direction::LowerIsBetter);
            assert!(g.completion() <= 100);
        }
    }

    #[test]
    fn display_value_percent_form() {
        let f = feature("Mobile Score", 95.0, 100.0, "%", Direction::HigherIsBetter);
        assert_eq!(f.display_value(), "95%");
    }

    #[test]
    fn display_value_seconds_form() {
        let f = feature("Load Time", 2.1, 3.0, "seconds", Direction::LowerIsBetter);
        assert_eq!(f.display_value(), "2.1s");
    }

    #[test]
    fn display_value_ratio_form() {
        let f = feature("Export Options", 2.0, 3.0, "formats", Direction::HigherIsBetter);
        assert_eq!(f.display_value(), "2/3");
    }

    #[test]
    fn display_name_prefers_alias_only_past_threshold() {
        let mut aliases = BTreeMap::new();
        aliases.insert(
            "Continuous Deployment".to_string(),
            "Deploy".to_string(),
        );
        let spec = ArchitectureSpec {
            title: String::new(),
            components: Vec::new(),
            flow: Vec::new(),
            positions: BTreeMap::new(),
            aliases,
            terminal: TerminalNode {
                name: "Users".to_string(),
                tag: CategoryTag::Users,
                hover: Vec::new(),
            },
        };
        assert_eq!(spec.display_name("Continuous Deployment", 15), "Deploy");
        assert_eq!(spec.display_name("Frontend", 15), "Frontend");
        // A long name with no alias entry is left as-is.
        assert_eq!(
            spec.display_name("Observability Pipeline", 15),
            "Observability Pipeline"
        );
    }

    #[test]
    fn missing_position_is_a_lookup_failure() {
        let spec = ArchitectureSpec {
            title: String::new(),
            components: Vec::new(),
            flow: Vec::new(),
            positions: BTreeMap::new(),
            aliases: BTreeMap::new(),
            terminal: TerminalNode {
                name: "Users".to_string(),
                tag: CategoryTag::Users,
                hover: Vec::new(),
            },
        };
        assert!(matches!(
            spec.position("Frontend"),
            Err(Error::UnknownComponent(_))
        ));
    }

    #[test]
    fn missing_style_is_a_lookup_failure() {
        let table = StyleTable {
            colors: BTreeMap::new(),
            markers: BTreeMap::new(),
        };
        assert!(matches!(
            table.color(CategoryTag::Data),
            Err(Error::UnknownCategory(_))
        ));
    }
}
