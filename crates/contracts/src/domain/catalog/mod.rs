//! Static feature catalog of the landing page.
//!
//! The catalog is an ordered list of categories, each holding an ordered list
//! of feature records. It is parsed once from the embedded `catalog.json` and
//! never changes afterwards. All accessors are total: an unknown category id
//! yields an empty list instead of an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::selection::SelectionState;
use crate::enums::{FeatureTab, FeatureTag};
use crate::error::ContentError;

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Number of leading items shown in the "Popular" view
pub const POPULAR_COUNT: usize = 3;
/// Number of leading items shown in the "Core" view
pub const CORE_COUNT: usize = 2;
/// Items after this position belong to the "Advanced" view
pub const ADVANCED_AFTER_INDEX: usize = 4;
/// Categories listed in the "Advanced" view, in display order
pub const ADVANCED_CATEGORY_IDS: [&str; 3] =
    ["inventory-control", "reporting-utilities", "sales-billing"];

/// One named capability entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<FeatureTag>,
}

impl FeatureItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tag: Option<FeatureTag>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tag,
        }
    }
}

/// Named grouping of related features
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name resolved by the frontend icon set
    pub icon: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

/// One category block as rendered by a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: &'a Category,
    pub features: &'a [FeatureItem],
    /// Whether the panel shows every feature it was given
    pub expanded: bool,
    /// Whether clicking the header toggles the panel
    pub toggleable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    categories: Vec<Category>,
}

static BUILTIN: Lazy<FeatureCatalog> = Lazy::new(|| match FeatureCatalog::from_json(CATALOG_JSON) {
    Ok(catalog) => catalog,
    Err(e) => {
        log::error!("{e}; falling back to an empty catalog");
        FeatureCatalog::default()
    }
});

impl FeatureCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Catalog shipped with the page
    pub fn builtin() -> &'static FeatureCatalog {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Full list for a category, empty when the id is unknown
    pub fn all_features(&self, category_id: &str) -> &[FeatureItem] {
        self.category(category_id)
            .map(|c| c.features.as_slice())
            .unwrap_or(&[])
    }

    /// First three items of the category.
    ///
    /// Selection is positional; the `Popular` tag on a record plays no part.
    pub fn popular_features(&self, category_id: &str) -> &[FeatureItem] {
        prefix(self.all_features(category_id), POPULAR_COUNT)
    }

    /// First two items of the category
    pub fn core_features(&self, category_id: &str) -> &[FeatureItem] {
        prefix(self.all_features(category_id), CORE_COUNT)
    }

    /// Items from the sixth onward.
    ///
    /// Returns `None` for categories outside [`ADVANCED_CATEGORY_IDS`] (and for
    /// designated ids the catalog does not contain): those are absent from the
    /// advanced view rather than shown empty.
    pub fn advanced_features(&self, category_id: &str) -> Option<&[FeatureItem]> {
        if !ADVANCED_CATEGORY_IDS.contains(&category_id) {
            return None;
        }
        self.category(category_id)
            .map(|c| c.features.get(ADVANCED_AFTER_INDEX + 1..).unwrap_or(&[]))
    }

    pub fn total_features(&self) -> usize {
        self.categories.iter().map(|c| c.features.len()).sum()
    }

    /// `(category id, feature id)` pairs whose feature id repeats inside its category
    pub fn duplicate_feature_ids(&self) -> Vec<(String, String)> {
        let mut duplicates = Vec::new();
        for category in &self.categories {
            for (i, item) in category.features.iter().enumerate() {
                if category.features[..i].iter().any(|other| other.id == item.id) {
                    duplicates.push((category.id.clone(), item.id.clone()));
                }
            }
        }
        duplicates
    }

    /// Blocks rendered by the active tab of `selection`.
    ///
    /// Only the "All" tab honours the expanded category; the filtered tabs
    /// always show their slice in full.
    pub fn sections(&self, selection: &SelectionState) -> Vec<CategorySection<'_>> {
        match selection.active_tab() {
            FeatureTab::All => self
                .categories
                .iter()
                .map(|category| CategorySection {
                    category,
                    features: &category.features,
                    expanded: selection.is_expanded(&category.id),
                    toggleable: true,
                })
                .collect(),
            FeatureTab::Popular => self.fixed_sections(|c| prefix(&c.features, POPULAR_COUNT)),
            FeatureTab::Core => self.fixed_sections(|c| prefix(&c.features, CORE_COUNT)),
            FeatureTab::Advanced => ADVANCED_CATEGORY_IDS
                .iter()
                .filter_map(|id| {
                    let category = self.category(id)?;
                    let features = self.advanced_features(id)?;
                    Some(CategorySection {
                        category,
                        features,
                        expanded: true,
                        toggleable: false,
                    })
                })
                .collect(),
        }
    }

    fn fixed_sections<'a, F>(&'a self, pick: F) -> Vec<CategorySection<'a>>
    where
        F: Fn(&'a Category) -> &'a [FeatureItem],
    {
        self.categories
            .iter()
            .map(|category| CategorySection {
                category,
                features: pick(category),
                expanded: true,
                toggleable: false,
            })
            .collect()
    }
}

fn prefix(items: &[FeatureItem], n: usize) -> &[FeatureItem] {
    &items[..items.len().min(n)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FeatureCatalog {
        let items = |prefix: &str, count: usize| -> Vec<FeatureItem> {
            (0..count)
                .map(|i| FeatureItem::new(format!("{prefix}-{i}"), format!("Feature {i}"), None))
                .collect()
        };
        FeatureCatalog::new(vec![
            Category {
                id: "sales-billing".into(),
                name: "Sales & Billing".into(),
                icon: "receipt".into(),
                features: items("sb", 7),
            },
            Category {
                id: "customer-loyalty".into(),
                name: "Customer & Loyalty Management".into(),
                icon: "users".into(),
                features: items("cl", 1),
            },
            Category {
                id: "inventory-control".into(),
                name: "Inventory Control".into(),
                icon: "package".into(),
                features: items("ic", 4),
            },
        ])
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = FeatureCatalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.all_features("sales-billing").len(), 7);
        assert_eq!(FeatureCatalog::builtin(), &catalog);
        assert!(catalog.duplicate_feature_ids().is_empty());
    }

    #[test]
    fn test_builtin_has_every_advanced_category() {
        let catalog = FeatureCatalog::builtin();
        for id in ADVANCED_CATEGORY_IDS {
            assert!(catalog.category(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_sales_billing_scenario() {
        let catalog = sample_catalog();
        let all = catalog.all_features("sales-billing");
        assert_eq!(catalog.core_features("sales-billing"), &all[0..2]);
        assert_eq!(catalog.popular_features("sales-billing"), &all[0..3]);
        assert_eq!(catalog.advanced_features("sales-billing"), Some(&all[5..7]));
    }

    #[test]
    fn test_views_are_prefixes() {
        for catalog in [sample_catalog(), FeatureCatalog::builtin().clone()] {
            for category in catalog.categories() {
                let all = catalog.all_features(&category.id);
                let core = catalog.core_features(&category.id);
                let popular = catalog.popular_features(&category.id);
                assert!(core.len() <= CORE_COUNT);
                assert!(popular.len() <= POPULAR_COUNT);
                assert!(all.starts_with(core));
                assert!(all.starts_with(popular));
            }
        }
    }

    #[test]
    fn test_short_category_prefixes() {
        let catalog = sample_catalog();
        assert_eq!(catalog.popular_features("customer-loyalty").len(), 1);
        assert_eq!(catalog.core_features("customer-loyalty").len(), 1);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.all_features("gift-cards").is_empty());
        assert!(catalog.popular_features("gift-cards").is_empty());
        assert!(catalog.core_features("gift-cards").is_empty());
        assert_eq!(catalog.advanced_features("gift-cards"), None);
    }

    #[test]
    fn test_advanced_only_for_designated_categories() {
        let catalog = FeatureCatalog::builtin();
        for category in catalog.categories() {
            let advanced = catalog.advanced_features(&category.id);
            if ADVANCED_CATEGORY_IDS.contains(&category.id.as_str()) {
                assert!(advanced.is_some());
            } else {
                assert_eq!(advanced, None, "{} should be absent", category.id);
            }
        }
    }

    #[test]
    fn test_advanced_short_designated_category_is_empty() {
        let catalog = sample_catalog();
        assert_eq!(catalog.advanced_features("inventory-control"), Some(&[][..]));
        // designated but missing from this catalog
        assert_eq!(catalog.advanced_features("reporting-utilities"), None);
    }

    #[test]
    fn test_sections_per_tab() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::new();
        selection.toggle_category("customer-loyalty");

        let all = catalog.sections(&selection);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|s| s.toggleable));
        assert_eq!(
            all.iter().filter(|s| s.expanded).map(|s| s.category.id.as_str()).collect::<Vec<_>>(),
            vec!["customer-loyalty"]
        );

        selection.select_tab(FeatureTab::Core);
        let core = catalog.sections(&selection);
        assert_eq!(core.len(), 3);
        assert!(core.iter().all(|s| s.expanded && !s.toggleable));
        assert_eq!(core[0].features.len(), 2);

        selection.select_tab(FeatureTab::Advanced);
        let advanced = catalog.sections(&selection);
        let ids: Vec<_> = advanced.iter().map(|s| s.category.id.as_str()).collect();
        assert_eq!(ids, vec!["inventory-control", "sales-billing"]);
        assert_eq!(advanced[1].features.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let catalog = FeatureCatalog::new(vec![Category {
            id: "x".into(),
            name: "X".into(),
            icon: "tag".into(),
            features: vec![
                FeatureItem::new("a", "A", None),
                FeatureItem::new("a", "A again", Some(FeatureTag::New)),
            ],
        }]);
        assert_eq!(
            catalog.duplicate_feature_ids(),
            vec![("x".to_string(), "a".to_string())]
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            FeatureCatalog::from_json("{\"categories\": 3}"),
            Err(ContentError::Catalog(_))
        ));
    }
}
