use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::Theme;
use crate::error::ContentError;
use crate::shared::storage::THEME_STORAGE_KEY;

/// Page content embedded in the bundle
const SITE_TOML: &str = include_str!("site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub hero: HeroConfig,
    pub contact: ContactConfig,
    pub theme: ThemeConfig,
    pub nav_links: Vec<Link>,
    #[serde(default)]
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub title: String,
    /// Trailing part of the title rendered in the accent color
    pub highlight: String,
    /// Externally hosted banner image; reachability is not checked
    pub image_url: String,
    pub image_alt: String,
    pub feature_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub support_links: Vec<Link>,
    #[serde(default)]
    pub legal_links: Vec<Link>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig {
                name: "Shop Mins".to_string(),
                tagline: "Offline-ready POS and inventory system for local grocery stores"
                    .to_string(),
            },
            hero: HeroConfig {
                title: "Shop Mins Billing &".to_string(),
                highlight: "Inventory System".to_string(),
                image_url: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                image_alt: "Shop Mins Dashboard".to_string(),
                feature_count: "50+".to_string(),
            },
            contact: ContactConfig {
                email: "contact@shopmins.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                address: "123 Main St, City".to_string(),
                github_url: "https://github.com/shopmins".to_string(),
            },
            theme: ThemeConfig {
                storage_key: THEME_STORAGE_KEY.to_string(),
                default: Theme::Light,
            },
            nav_links: vec![
                Link::new("Home", "#"),
                Link::new("Features", "#features"),
                Link::new("About", "#about"),
                Link::new("Contact", "#contact"),
            ],
            footer: FooterConfig {
                support_links: vec![
                    Link::new("Documentation", "#"),
                    Link::new("FAQ", "#"),
                    Link::new("Community", "#"),
                    Link::new("Help Center", "#"),
                ],
                legal_links: vec![
                    Link::new("Privacy Policy", "#"),
                    Link::new("Terms of Service", "#"),
                ],
            },
        }
    }
}

static BUILTIN: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml(SITE_TOML) {
    Ok(config) => config,
    Err(e) => {
        log::error!("{e}; using default site configuration");
        SiteConfig::default()
    }
});

impl SiteConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Embedded configuration, parsed on first access
    pub fn builtin() -> &'static SiteConfig {
        &BUILTIN
    }

    /// Footer "Quick Links" mirror the navigation bar
    pub fn quick_links(&self) -> &[Link] {
        &self.nav_links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = SiteConfig::from_toml(SITE_TOML);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.brand.name, "Shop Mins");
        assert_eq!(config.theme.storage_key, THEME_STORAGE_KEY);
        assert_eq!(config.theme.default, Theme::Light);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(SiteConfig::from_toml(SITE_TOML).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_quick_links_follow_nav() {
        let config = SiteConfig::default();
        let labels: Vec<_> = config.quick_links().iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Features", "About", "Contact"]);
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        let contents = SITE_TOML.replace("default = \"light\"", "default = \"sepia\"");
        assert!(matches!(
            SiteConfig::from_toml(&contents),
            Err(ContentError::SiteConfig(_))
        ));
    }
}
