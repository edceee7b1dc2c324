use contracts::{FeatureTab, PanelState, SelectionState};
use leptos::prelude::*;

/// Page-wide UI state shared through context.
///
/// Components read `selection` reactively and change it only through the
/// methods below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selection: RwSignal<SelectionState>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(SelectionState::new()),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn active_tab(&self) -> FeatureTab {
        self.selection.with(|s| s.active_tab())
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.selection.with(|s| s.is_expanded(category_id))
    }

    pub fn select_tab(&self, tab: FeatureTab) {
        let changed = self
            .selection
            .with_untracked(|s| s.active_tab() != tab);
        if changed {
            self.selection.update(|s| {
                s.select_tab(tab);
            });
            log::debug!("feature tab -> {}", tab);
        }
    }

    pub fn toggle_category(&self, category_id: &str) {
        let mut state = PanelState::Collapsed;
        self.selection.update(|s| state = s.toggle_category(category_id));
        log::debug!("category '{}' -> {:?}", category_id, state);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
