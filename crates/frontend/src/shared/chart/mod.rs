//! Themable chart container plus tooltip and legend renderers.
//!
//! The container scopes `--color-KEY` custom properties from a
//! [`ChartConfig`] to its own DOM subtree; tooltip and legend content look the
//! hovered series up in that configuration.

use std::sync::Arc;

use contracts::shared::chart::{
    legend_items, tooltip_model, ChartConfig, ChartPayloadItem, Indicator, TooltipOptions,
};
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::icons::icon;

#[derive(Clone)]
pub struct ChartContext {
    pub config: Arc<ChartConfig>,
}

/// Configuration of the enclosing [`ChartContainer`].
pub fn use_chart() -> ChartContext {
    use_context::<ChartContext>().expect("use_chart must be used within <ChartContainer>")
}

/// `data-chart` value for a container: the caller's id, or a fresh one.
pub fn chart_dom_id(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("chart-{id}"),
        None => format!("chart-{}", Uuid::new_v4().simple()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendAlign {
    Top,
    #[default]
    Bottom,
}

#[component]
pub fn ChartContainer(
    config: ChartConfig,
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let chart_id = chart_dom_id(id.as_deref());
    let css = config.style_css(&chart_id);
    provide_context(ChartContext {
        config: Arc::new(config),
    });

    view! {
        <div
            data-chart=chart_id
            class=move || format!("chart-container {}", class.get().unwrap_or_default())
        >
            {css.map(|css| view! { <style>{css}</style> })}
            {children()}
        </div>
    }
}

fn indicator_class(indicator: Indicator, nest_label: bool) -> String {
    let mut class = format!("chart-indicator chart-indicator--{}", indicator.as_str());
    if nest_label && indicator == Indicator::Dashed {
        class.push_str(" chart-indicator--nested");
    }
    class
}

#[component]
pub fn ChartTooltipContent(
    active: bool,
    payload: Vec<ChartPayloadItem>,
    #[prop(optional)]
    options: TooltipOptions,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let ChartContext { config } = use_chart();
    let Some(model) = tooltip_model(&config, active, &payload, &options) else {
        return ().into_any();
    };

    let heading = model
        .label
        .clone()
        .map(|label| view! { <div class="chart-tooltip__label">{label}</div> });
    let nest_label = model.nest_label;
    let (outer_heading, inner_heading) = if nest_label {
        (None, heading)
    } else {
        (heading, None)
    };
    let mut inner_heading = inner_heading;

    let rows = model
        .rows
        .into_iter()
        .map(|row| {
            let marker = match (&row.icon, model.hide_indicator) {
                (Some(name), _) => Some(icon(name)),
                (None, false) => {
                    let color = row.indicator_color.clone().unwrap_or_default();
                    Some(
                        view! {
                            <div
                                class=indicator_class(model.indicator, nest_label)
                                style=format!("--color-bg: {color}; --color-border: {color};")
                            ></div>
                        }
                        .into_any(),
                    )
                }
                (None, true) => None,
            };
            view! {
                <div class="chart-tooltip__row" data-key=row.key>
                    {marker}
                    <div class="chart-tooltip__body">
                        <div class="chart-tooltip__name">
                            {inner_heading.take()}
                            <span class="muted">{row.label}</span>
                        </div>
                        {row.value.map(|value| view! { <span class="chart-tooltip__value">{value}</span> })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=move || format!("chart-tooltip {}", class.get().unwrap_or_default())>
            {outer_heading}
            <div class="chart-tooltip__rows">{rows}</div>
        </div>
    }
    .into_any()
}

#[component]
pub fn ChartLegendContent(
    payload: Vec<ChartPayloadItem>,
    #[prop(optional)]
    hide_icon: bool,
    #[prop(optional)]
    vertical_align: LegendAlign,
    #[prop(optional, into)]
    name_key: Option<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let ChartContext { config } = use_chart();
    let items = legend_items(&config, &payload, name_key.as_deref());
    if items.is_empty() {
        return ().into_any();
    }

    let align_class = match vertical_align {
        LegendAlign::Top => "chart-legend--top",
        LegendAlign::Bottom => "chart-legend--bottom",
    };

    view! {
        <div class=move || format!("chart-legend {} {}", align_class, class.get().unwrap_or_default())>
            {items
                .into_iter()
                .map(|item| {
                    let marker = match (&item.icon, hide_icon) {
                        (Some(name), false) => icon(name),
                        _ => {
                            let color = item.color.clone().unwrap_or_default();
                            view! {
                                <div class="chart-legend__swatch" style=format!("background-color: {color};")></div>
                            }
                            .into_any()
                        }
                    };
                    view! {
                        <div class="chart-legend__item" data-key=item.key>
                            {marker}
                            {item.label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
