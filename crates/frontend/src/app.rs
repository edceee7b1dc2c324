use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Selection state of the feature showcase, shared via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}
