//! Tooltip and legend content derived from a chart's hovered payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{normalize_key, ChartConfig, SeriesConfig};
use crate::shared::number_format::format_number;

/// One data point handed to the tooltip or legend by the charting primitive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPayloadItem {
    /// Series name; a list name is joined with `.`
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub data_key: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub color: Option<String>,
    /// The raw data row the point came from
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl ChartPayloadItem {
    fn name_key(&self) -> Option<String> {
        self.name.as_ref().map(normalize_key)
    }

    fn fill(&self) -> Option<String> {
        self.payload
            .get("fill")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    #[default]
    Dot,
    Line,
    Dashed,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Dot => "dot",
            Indicator::Line => "line",
            Indicator::Dashed => "dashed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipOptions {
    pub hide_label: bool,
    pub hide_indicator: bool,
    pub indicator: Indicator,
    /// Payload field used to look up each row's configuration
    pub name_key: Option<String>,
    /// Payload field used to look up the tooltip heading
    pub label_key: Option<String>,
    /// Axis label supplied by the charting primitive
    pub label: Option<String>,
    /// Overrides every row's indicator color
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipRow {
    pub key: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub indicator_color: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipModel {
    pub label: Option<String>,
    /// Single-row tooltips with a non-dot indicator render the heading inside the row
    pub nest_label: bool,
    pub indicator: Indicator,
    pub hide_indicator: bool,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub key: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

fn resolve_for<'a>(
    config: &'a ChartConfig,
    item: &ChartPayloadItem,
    key: &str,
) -> Option<&'a SeriesConfig> {
    config.resolve(key, &item.payload)
}

fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64().map(format_number),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn tooltip_label(config: &ChartConfig, items: &[ChartPayloadItem], opts: &TooltipOptions) -> Option<String> {
    if opts.hide_label {
        return None;
    }
    let item = items.first()?;
    let key = opts
        .label_key
        .clone()
        .or_else(|| item.data_key.clone())
        .or_else(|| item.name_key())
        .unwrap_or_else(|| "value".to_string());

    match (&opts.label_key, &opts.label) {
        (None, Some(label)) => Some(
            config
                .get(label)
                .and_then(|c| c.label.clone())
                .unwrap_or_else(|| label.clone()),
        ),
        _ => resolve_for(config, item, &key).and_then(|c| c.label.clone()),
    }
}

/// Content of the tooltip, or `None` when nothing is hovered.
pub fn tooltip_model(
    config: &ChartConfig,
    active: bool,
    items: &[ChartPayloadItem],
    opts: &TooltipOptions,
) -> Option<TooltipModel> {
    if !active || items.is_empty() {
        return None;
    }

    let rows = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let key = opts
                .name_key
                .clone()
                .or_else(|| item.name_key())
                .or_else(|| item.data_key.clone())
                .unwrap_or_else(|| "value".to_string());
            let series = resolve_for(config, item, &key);
            TooltipRow {
                key: item.data_key.clone().unwrap_or_else(|| idx.to_string()),
                label: series
                    .and_then(|c| c.label.clone())
                    .or_else(|| item.name_key()),
                icon: series.and_then(|c| c.icon.clone()),
                indicator_color: opts
                    .color
                    .clone()
                    .or_else(|| item.fill())
                    .or_else(|| item.color.clone()),
                value: item.value.as_ref().and_then(format_value),
            }
        })
        .collect();

    Some(TooltipModel {
        label: tooltip_label(config, items, opts),
        nest_label: items.len() == 1 && opts.indicator != Indicator::Dot,
        indicator: opts.indicator,
        hide_indicator: opts.hide_indicator,
        rows,
    })
}

/// Legend entries; an unconfigured series gets no label.
pub fn legend_items(
    config: &ChartConfig,
    items: &[ChartPayloadItem],
    name_key: Option<&str>,
) -> Vec<LegendItem> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let key = name_key
                .map(str::to_string)
                .or_else(|| item.data_key.clone())
                .unwrap_or_else(|| "value".to_string());
            let series = resolve_for(config, item, &key);
            LegendItem {
                key: item
                    .value
                    .as_ref()
                    .map(normalize_key)
                    .unwrap_or_else(|| idx.to_string()),
                label: series.and_then(|c| c.label.clone()),
                icon: series.and_then(|c| c.icon.clone()),
                color: item.color.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ChartConfig {
        ChartConfig::new()
            .with_series("sales", SeriesConfig::new("Sales").with_color("#16a34a"))
            .with_series("returns", SeriesConfig::new("Returns").with_icon("package"))
            .with_series("january", SeriesConfig::new("January"))
    }

    fn item(data_key: &str, value: Value) -> ChartPayloadItem {
        ChartPayloadItem {
            name: Some(json!(data_key)),
            data_key: Some(data_key.to_string()),
            value: Some(value),
            color: Some("#111".to_string()),
            payload: Map::new(),
        }
    }

    #[test]
    fn test_inactive_or_empty_renders_nothing() {
        let items = vec![item("sales", json!(10))];
        assert_eq!(tooltip_model(&config(), false, &items, &TooltipOptions::default()), None);
        assert_eq!(tooltip_model(&config(), true, &[], &TooltipOptions::default()), None);
    }

    #[test]
    fn test_rows_use_configured_labels_and_format_values() {
        let items = vec![item("sales", json!(1234567)), item("returns", json!(12.5))];
        let model = tooltip_model(&config(), true, &items, &TooltipOptions::default()).unwrap();
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.rows[0].label.as_deref(), Some("Sales"));
        assert_eq!(model.rows[0].value.as_deref(), Some("1,234,567"));
        assert_eq!(model.rows[1].icon.as_deref(), Some("package"));
        assert_eq!(model.rows[1].value.as_deref(), Some("12.5"));
        assert!(!model.nest_label);
    }

    #[test]
    fn test_unconfigured_row_falls_back_to_name() {
        let items = vec![item("refunds", json!(3))];
        let model = tooltip_model(&config(), true, &items, &TooltipOptions::default()).unwrap();
        assert_eq!(model.rows[0].label.as_deref(), Some("refunds"));
        assert_eq!(model.rows[0].icon, None);
        assert_eq!(model.label, None);
    }

    #[test]
    fn test_heading_from_axis_label() {
        let items = vec![item("sales", json!(5))];
        let opts = TooltipOptions {
            label: Some("january".to_string()),
            ..TooltipOptions::default()
        };
        let model = tooltip_model(&config(), true, &items, &opts).unwrap();
        assert_eq!(model.label.as_deref(), Some("January"));

        let opts = TooltipOptions {
            label: Some("Week 3".to_string()),
            ..TooltipOptions::default()
        };
        let model = tooltip_model(&config(), true, &items, &opts).unwrap();
        assert_eq!(model.label.as_deref(), Some("Week 3"));
    }

    #[test]
    fn test_heading_from_label_key_in_payload() {
        let mut point = item("visitors", json!(40));
        point.payload = json!({ "channel": "sales", "fill": "#abc" })
            .as_object()
            .cloned()
            .unwrap();
        let opts = TooltipOptions {
            label_key: Some("channel".to_string()),
            name_key: Some("channel".to_string()),
            indicator: Indicator::Line,
            ..TooltipOptions::default()
        };
        let model = tooltip_model(&config(), true, &[point], &opts).unwrap();
        assert_eq!(model.label.as_deref(), Some("Sales"));
        assert_eq!(model.rows[0].label.as_deref(), Some("Sales"));
        assert_eq!(model.rows[0].indicator_color.as_deref(), Some("#abc"));
        assert!(model.nest_label);
    }

    #[test]
    fn test_hide_label_and_color_override() {
        let items = vec![item("sales", json!(null))];
        let opts = TooltipOptions {
            hide_label: true,
            color: Some("red".to_string()),
            ..TooltipOptions::default()
        };
        let model = tooltip_model(&config(), true, &items, &opts).unwrap();
        assert_eq!(model.label, None);
        assert_eq!(model.rows[0].indicator_color.as_deref(), Some("red"));
        assert_eq!(model.rows[0].value, None);
    }

    #[test]
    fn test_legend_items() {
        let items = vec![item("sales", json!("sales")), item("refunds", json!("refunds"))];
        let legend = legend_items(&config(), &items, None);
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label.as_deref(), Some("Sales"));
        assert_eq!(legend[0].key, "sales");
        assert_eq!(legend[1].label, None);
        assert_eq!(legend[1].color.as_deref(), Some("#111"));
    }
}
