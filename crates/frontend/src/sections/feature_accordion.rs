use contracts::{panel_display, FeatureItem, FeatureTag};
use leptos::prelude::*;

use crate::shared::components::ui::Badge;

/// Badge variant for a feature tag
pub fn tag_badge_variant(tag: FeatureTag) -> &'static str {
    match tag {
        FeatureTag::New => "primary",
        FeatureTag::Popular => "secondary",
        FeatureTag::ComingSoon => "outline",
    }
}

/// Feature grid of one category. Collapsed panels show the first three
/// features and how many are left out.
#[component]
pub fn FeatureAccordion(features: &'static [FeatureItem], expanded: bool) -> impl IntoView {
    let display = panel_display(features, expanded);
    let state_class = if expanded {
        "accordion accordion--expanded"
    } else {
        "accordion accordion--collapsed"
    };

    view! {
        <div class=state_class>
            <div class="feature-grid">
                {display
                    .visible
                    .iter()
                    .map(|feature| view! { <FeatureCard feature=feature /> })
                    .collect_view()}
            </div>
            {display.hidden_label().map(|label| view! {
                <div class="accordion__more">
                    <span class="muted">{label}</span>
                </div>
            })}
        </div>
    }
}

#[component]
fn FeatureCard(feature: &'static FeatureItem) -> impl IntoView {
    view! {
        <div class="feature-card" data-feature=feature.id.clone()>
            <h4 class="feature-card__title">{feature.title.clone()}</h4>
            {feature.tag.map(|tag| view! {
                <Badge variant=tag_badge_variant(tag) class="feature-card__tag">{tag.label()}</Badge>
            })}
        </div>
    }
}
