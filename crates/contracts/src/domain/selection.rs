//! Selection state of the feature showcase: which tab is active and which
//! category panel (if any) is expanded.

use crate::domain::catalog::FeatureItem;
use crate::enums::FeatureTab;

/// Features a collapsed panel still shows
pub const COLLAPSED_VISIBLE: usize = 3;

/// Display state of a single category panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

/// At most one category is expanded at a time; every other panel is collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    expanded_category: Option<String>,
    active_tab: FeatureTab,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded_category(&self) -> Option<&str> {
        self.expanded_category.as_deref()
    }

    pub fn active_tab(&self) -> FeatureTab {
        self.active_tab
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded_category.as_deref() == Some(category_id)
    }

    pub fn panel_state(&self, category_id: &str) -> PanelState {
        if self.is_expanded(category_id) {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    /// Header click on a category panel. Returns the panel's new state.
    pub fn toggle_category(&mut self, category_id: &str) -> PanelState {
        if self.is_expanded(category_id) {
            self.expanded_category = None;
            PanelState::Collapsed
        } else {
            self.expanded_category = Some(category_id.to_string());
            PanelState::Expanded
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded_category = None;
    }

    /// Returns `false` when `tab` was already active.
    pub fn select_tab(&mut self, tab: FeatureTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }
}

/// What a panel renders for a given expansion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDisplay<'a> {
    pub visible: &'a [FeatureItem],
    /// Features left out of `visible`
    pub hidden: usize,
}

impl PanelDisplay<'_> {
    /// "N more features..." line, only when something is hidden
    pub fn hidden_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("{} more features...", self.hidden))
    }
}

pub fn panel_display(features: &[FeatureItem], expanded: bool) -> PanelDisplay<'_> {
    if expanded {
        return PanelDisplay {
            visible: features,
            hidden: 0,
        };
    }
    let shown = features.len().min(COLLAPSED_VISIBLE);
    PanelDisplay {
        visible: &features[..shown],
        hidden: features.len() - shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(count: usize) -> Vec<FeatureItem> {
        (0..count)
            .map(|i| FeatureItem::new(format!("f-{i}"), format!("Feature {i}"), None))
            .collect()
    }

    #[test]
    fn test_initially_collapsed() {
        let state = SelectionState::new();
        assert_eq!(state.expanded_category(), None);
        assert_eq!(state.panel_state("sales-billing"), PanelState::Collapsed);
        assert_eq!(state.active_tab(), FeatureTab::All);
    }

    #[test]
    fn test_double_toggle_collapses() {
        let mut state = SelectionState::new();
        assert_eq!(state.toggle_category("sales-billing"), PanelState::Expanded);
        assert_eq!(state.toggle_category("sales-billing"), PanelState::Collapsed);
        assert_eq!(state.panel_state("sales-billing"), PanelState::Collapsed);
        assert_eq!(state.expanded_category(), None);
    }

    #[test]
    fn test_at_most_one_expanded() {
        let mut state = SelectionState::new();
        state.toggle_category("inventory-control");
        state.toggle_category("sales-billing");
        assert!(!state.is_expanded("inventory-control"));
        assert!(state.is_expanded("sales-billing"));
        assert_eq!(state.expanded_category(), Some("sales-billing"));
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let mut state = SelectionState::new();
        assert!(state.select_tab(FeatureTab::Popular));
        let snapshot = state.clone();
        assert!(!state.select_tab(FeatureTab::Popular));
        assert_eq!(state, snapshot);
        assert!(!SelectionState::new().select_tab(FeatureTab::All));
    }

    #[test]
    fn test_tab_change_keeps_expanded_category() {
        let mut state = SelectionState::new();
        state.toggle_category("sales-billing");
        state.select_tab(FeatureTab::Core);
        state.select_tab(FeatureTab::All);
        assert!(state.is_expanded("sales-billing"));
        state.collapse_all();
        assert_eq!(state.expanded_category(), None);
    }

    #[test]
    fn test_collapsed_panel_shows_three_and_hidden_count() {
        let items = features(7);
        let display = panel_display(&items, false);
        assert_eq!(display.visible, &items[..3]);
        assert_eq!(display.hidden, 4);
        assert_eq!(display.hidden_label().as_deref(), Some("4 more features..."));
    }

    #[test]
    fn test_expanded_panel_shows_all() {
        let items = features(7);
        let display = panel_display(&items, true);
        assert_eq!(display.visible.len(), 7);
        assert_eq!(display.hidden_label(), None);
    }

    #[test]
    fn test_short_collapsed_panel_hides_nothing() {
        let items = features(2);
        let display = panel_display(&items, false);
        assert_eq!(display.visible.len(), 2);
        assert_eq!(display.hidden, 0);
        assert_eq!(display.hidden_label(), None);
    }
}
