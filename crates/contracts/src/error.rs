use thiserror::Error;

/// Errors raised while loading embedded page content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse feature catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to parse site configuration: {0}")]
    SiteConfig(#[from] toml::de::Error),

    #[error("unknown theme: '{0}'")]
    UnknownTheme(String),

    #[error("unknown feature tab: '{0}'")]
    UnknownTab(String),
}
