use contracts::SiteConfig;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Highlight tiles under the call-to-action buttons: (icon, caption)
const HIGHLIGHTS: [(&str, &str); 4] = [
    ("shopping-bag", "Sales & Billing"),
    ("package", "Inventory Control"),
    ("bar-chart", "Reporting"),
    ("tag", "Customer Loyalty"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let site = SiteConfig::builtin();
    let hero = &site.hero;

    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="hero__content container">
                <div class="hero__text">
                    <h1 class="hero__title">
                        {hero.title.clone()} " "
                        <span class="accent">{hero.highlight.clone()}</span>
                    </h1>
                    <p class="hero__tagline muted">{site.brand.tagline.clone()}</p>

                    <div class="hero__actions">
                        <Button size="lg">{icon("shopping-bag")} "Get Started"</Button>
                        <Button variant="outline" size="lg">"View Demo"</Button>
                    </div>

                    <div class="hero__highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|(name, caption)| view! {
                                <div class="hero__highlight">
                                    <div class="hero__highlight-icon">{icon(name)}</div>
                                    <p>{*caption}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero__media">
                    <div class="hero__image-frame">
                        <img class="hero__image" src=hero.image_url.clone() alt=hero.image_alt.clone() />
                    </div>
                    <div class="hero__badge">
                        <span class="hero__badge-count">{hero.feature_count.clone()}</span>
                        <span class="hero__badge-label">"Features"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
