pub mod feature_tab;
pub mod feature_tag;
pub mod theme;

pub use feature_tab::FeatureTab;
pub use feature_tag::FeatureTag;
pub use theme::Theme;
