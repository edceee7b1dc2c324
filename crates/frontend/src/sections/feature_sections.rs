use contracts::{CategorySection, FeatureCatalog, FeatureTab};
use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::sections::feature_accordion::FeatureAccordion;
use crate::shared::icons::icon;

/// Tabbed showcase of the whole catalog
#[component]
pub fn FeatureSections() -> impl IntoView {
    let ctx = use_global_context();
    let catalog = FeatureCatalog::builtin();

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"All the features you need"</h2>
                    <p class="section-description muted">
                        "Our comprehensive system includes 50+ features to streamline your business operations"
                    </p>
                </div>

                <TabList ctx=ctx />

                <div class="features__panels" data-tab=move || ctx.active_tab().as_str()>
                    {move || {
                        let selection = ctx.selection.get();
                        catalog
                            .sections(&selection)
                            .into_iter()
                            .map(|section| view! { <CategoryBlock section=section ctx=ctx /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TabList(ctx: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="tabs__list" role="tablist">
            {FeatureTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = move || ctx.active_tab() == tab;
                    view! {
                        <button
                            role="tab"
                            class=move || if is_active() { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryBlock(section: CategorySection<'static>, ctx: AppGlobalContext) -> impl IntoView {
    let category = section.category;
    let header_class = if section.toggleable {
        "category__header category__header--toggle"
    } else {
        "category__header"
    };

    view! {
        <div class="category" data-category=category.id.clone()>
            <div
                class=header_class
                on:click=move |_| {
                    if section.toggleable {
                        ctx.toggle_category(&category.id);
                    }
                }
            >
                <div class="category__title">
                    {icon(&category.icon)}
                    <h3>{category.name.clone()}</h3>
                </div>
            </div>
            <FeatureAccordion features=section.features expanded=section.expanded />
        </div>
    }
}
