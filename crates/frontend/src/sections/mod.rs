pub mod feature_accordion;
pub mod feature_sections;
pub mod hero;

pub use feature_accordion::FeatureAccordion;
pub use feature_sections::FeatureSections;
pub use hero::Hero;
