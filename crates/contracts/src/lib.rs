//! Platform-independent model of the Shop Mins landing page: the feature
//! catalog, showcase selection state, theme preference, site content and the
//! chart wrapper's series configuration.

pub mod domain;
pub mod enums;
pub mod error;
pub mod shared;

pub use domain::catalog::{Category, CategorySection, FeatureCatalog, FeatureItem};
pub use domain::selection::{panel_display, PanelDisplay, PanelState, SelectionState};
pub use enums::{FeatureTab, FeatureTag, Theme};
pub use error::ContentError;
pub use shared::site_config::SiteConfig;
pub use shared::storage::{KeyValueStore, MemoryStore, ThemePreference, THEME_STORAGE_KEY};
