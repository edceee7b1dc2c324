//! Series configuration shared by the chart wrapper components.
//!
//! A [`ChartConfig`] maps a series key to its display label, an optional icon
//! and either a static color or a light/dark color pair. Colors become CSS
//! custom properties (`--color-KEY`) scoped to one chart container.

pub mod tooltip;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Theme;

pub use tooltip::{
    legend_items, tooltip_model, ChartPayloadItem, Indicator, LegendItem, TooltipModel,
    TooltipOptions, TooltipRow,
};

/// Selector prefix each theme's color block is scoped under
pub fn theme_selector_prefix(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "",
        Theme::Dark => ".dark",
    }
}

/// Color source of a series. A static color and a per-theme pair are
/// mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    #[default]
    None,
    Static(String),
    Themed { light: String, dark: String },
}

impl SeriesColor {
    pub fn for_theme(&self, theme: Theme) -> Option<&str> {
        match self {
            SeriesColor::None => None,
            SeriesColor::Static(color) => Some(color.as_str()),
            SeriesColor::Themed { light, dark } => match theme {
                Theme::Light => Some(light.as_str()),
                Theme::Dark => Some(dark.as_str()),
            },
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SeriesColor::None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub label: Option<String>,
    /// Icon name rendered instead of the color indicator
    pub icon: Option<String>,
    #[serde(default)]
    pub color: SeriesColor,
}

impl SeriesConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = SeriesColor::Static(color.into());
        self
    }

    pub fn with_theme_colors(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.color = SeriesColor::Themed {
            light: light.into(),
            dark: dark.into(),
        };
        self
    }
}

/// Series configuration in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    series: Vec<(String, SeriesConfig)>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, key: impl Into<String>, config: SeriesConfig) -> Self {
        self.insert(key, config);
        self
    }

    /// Adds or replaces the entry for `key`
    pub fn insert(&mut self, key: impl Into<String>, config: SeriesConfig) {
        let key = key.into();
        match self.series.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = config,
            None => self.series.push((key, config)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SeriesConfig> {
        self.series.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesConfig)> {
        self.series.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Configuration entry for a data point.
    ///
    /// When the point's own payload carries a field named `key`, that field's
    /// value is the lookup key; otherwise `key` itself is. Unconfigured keys
    /// yield `None`.
    pub fn resolve(&self, key: &str, payload: &Map<String, Value>) -> Option<&SeriesConfig> {
        let lookup = match payload.get(key) {
            Some(value) => normalize_key(value),
            None => key.to_string(),
        };
        self.get(&lookup)
    }

    /// `<style>` body defining `--color-KEY` for every colored series, one
    /// block per theme. `None` when no series carries a color.
    pub fn style_css(&self, chart_id: &str) -> Option<String> {
        let colored: Vec<_> = self.iter().filter(|(_, c)| c.color.is_set()).collect();
        if colored.is_empty() {
            return None;
        }

        let blocks: Vec<String> = Theme::all()
            .into_iter()
            .map(|theme| {
                let rules = colored
                    .iter()
                    .filter_map(|(key, c)| {
                        c.color
                            .for_theme(theme)
                            .map(|color| format!("  --color-{key}: {color};"))
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                let selector = match theme_selector_prefix(theme) {
                    "" => format!("[data-chart={chart_id}]"),
                    prefix => format!("{prefix} [data-chart={chart_id}]"),
                };
                format!("{selector} {{\n{rules}\n}}")
            })
            .collect();

        Some(blocks.join("\n"))
    }
}

/// String key of a series name: lists are joined with `.`, strings are taken
/// as-is, anything else uses its JSON text.
pub fn normalize_key(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts
            .iter()
            .map(normalize_key)
            .collect::<Vec<_>>()
            .join("."),
        other => other.to_string(),
    }
}
