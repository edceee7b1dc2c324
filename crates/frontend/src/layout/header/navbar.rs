use contracts::SiteConfig;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;

/// Scroll offset after which the bar gets its solid background
pub const SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = SiteConfig::builtin();
    let ctx = use_global_context();
    let scrolled = RwSignal::new(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        let next = is_scrolled(y);
        if scrolled.get_untracked() != next {
            scrolled.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <nav
            data-zone="navbar"
            class=move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }
        >
            <div class="navbar__content container">
                <a class="navbar__brand" href="#">
                    {icon("shopping-bag")}
                    <span class="navbar__title">{site.brand.name.clone()}</span>
                </a>

                <div class="navbar__links">
                    {site
                        .nav_links
                        .iter()
                        .map(|link| view! {
                            <a class="navbar__link" href=link.href.clone()>{link.label.clone()}</a>
                        })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <ThemeToggle />
                    <Button class="navbar__cta">"Get Started"</Button>
                    <Button
                        variant="ghost"
                        size="icon"
                        class="navbar__menu-toggle"
                        aria_label="Toggle menu"
                        on_click=Callback::new(move |_| ctx.toggle_mobile_menu())
                    >
                        {icon("menu")}
                    </Button>
                </div>
            </div>
            <MobileMenu />
        </nav>
    }
}

/// Slide-in sheet with the same links for narrow screens.
#[component]
fn MobileMenu() -> impl IntoView {
    let site = SiteConfig::builtin();
    let ctx = use_global_context();

    view! {
        <Show when=move || ctx.mobile_menu_open.get()>
            <div class="sheet-overlay" on:click=move |_| ctx.close_mobile_menu()></div>
            <aside class="sheet sheet--right">
                <button
                    class="button button--ghost button--icon sheet__close"
                    aria-label="Close menu"
                    on:click=move |_| ctx.close_mobile_menu()
                >
                    {icon("close")}
                </button>
                <div class="sheet__links">
                    {site
                        .nav_links
                        .iter()
                        .map(|link| view! {
                            <a
                                class="navbar__link"
                                href=link.href.clone()
                                on:click=move |_| ctx.close_mobile_menu()
                            >
                                {link.label.clone()}
                            </a>
                        })
                        .collect_view()}
                    <Button class="sheet__cta">"Get Started"</Button>
                </div>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }
}
