//! Light/dark theme for the page.
//!
//! The preference is read from localStorage on startup and written back on
//! every change. The active theme is applied as a `light`/`dark` class on the
//! root `<html>` element.

use contracts::{SiteConfig, Theme, ThemePreference};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::storage::LocalStorageStore;

/// Swap the theme class on `<html>`.
fn apply_theme_class(theme: Theme) {
    let root = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root,
        None => return,
    };

    let classes = root.class_list();
    for other in Theme::all() {
        let _ = classes.remove_1(other.as_str());
    }
    let _ = classes.add_1(theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    preference: StoredValue<ThemePreference<LocalStorageStore>>,
}

impl ThemeContext {
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Set the theme and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.preference.update_value(|pref| pref.set(theme));
        self.theme.set(theme);
        apply_theme_class(theme);
        log::debug!("theme -> {}", theme);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let site = SiteConfig::builtin();
    let preference = ThemePreference::load_with_key(
        LocalStorageStore,
        site.theme.storage_key.as_str(),
        site.theme.default,
    );
    let initial = preference.theme();
    apply_theme_class(initial);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        preference: StoredValue::new(preference),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Icon shown on the toggle: the sun switches back to light, the moon to dark.
pub fn toggle_icon_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "sun",
        Theme::Light => "moon",
    }
}

/// Navbar button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="button button--ghost button--icon"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || icon(toggle_icon_name(ctx.get_theme()))}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_icon_shows_target_theme() {
        assert_eq!(toggle_icon_name(Theme::Dark), "sun");
        assert_eq!(toggle_icon_name(Theme::Light), "moon");
    }
}
