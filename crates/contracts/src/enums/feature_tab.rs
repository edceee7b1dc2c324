use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ContentError;

/// Filtered views offered by the feature showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureTab {
    #[default]
    All,
    Popular,
    Advanced,
    Core,
}

impl FeatureTab {
    /// Stable value used in markup and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureTab::All => "all",
            FeatureTab::Popular => "popular",
            FeatureTab::Advanced => "advanced",
            FeatureTab::Core => "core",
        }
    }

    /// Label of the tab trigger
    pub fn label(&self) -> &'static str {
        match self {
            FeatureTab::All => "All Features",
            FeatureTab::Popular => "Popular",
            FeatureTab::Advanced => "Advanced",
            FeatureTab::Core => "Core",
        }
    }

    /// Tabs in display order
    pub fn all() -> [FeatureTab; 4] {
        [
            FeatureTab::All,
            FeatureTab::Popular,
            FeatureTab::Advanced,
            FeatureTab::Core,
        ]
    }
}

impl FromStr for FeatureTab {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureTab::all()
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| ContentError::UnknownTab(s.to_string()))
    }
}

impl std::fmt::Display for FeatureTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(FeatureTab::default(), FeatureTab::All);
    }

    #[test]
    fn test_parse_roundtrip_and_unknown() {
        for tab in FeatureTab::all() {
            assert_eq!(tab.as_str().parse::<FeatureTab>().unwrap(), tab);
        }
        assert!(matches!(
            "trending".parse::<FeatureTab>(),
            Err(ContentError::UnknownTab(value)) if value == "trending"
        ));
    }
}
