use serde::{Deserialize, Serialize};

/// Display emphasis attached to a feature record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureTag {
    New,
    Popular,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl FeatureTag {
    /// Text shown on the badge
    pub fn label(&self) -> &'static str {
        match self {
            FeatureTag::New => "New",
            FeatureTag::Popular => "Popular",
            FeatureTag::ComingSoon => "Coming Soon",
        }
    }

    pub fn all() -> [FeatureTag; 3] {
        [FeatureTag::New, FeatureTag::Popular, FeatureTag::ComingSoon]
    }
}

impl std::fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serde_names() {
        for tag in FeatureTag::all() {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.label()));
        }
        let parsed: FeatureTag = serde_json::from_str("\"Coming Soon\"").unwrap();
        assert_eq!(parsed, FeatureTag::ComingSoon);
    }
}
