//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current site format version
pub const SITE_FORMAT_VERSION: u32 = 1;

/// Number of similar posts shown on a post detail page
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Public site settings
    #[serde(default)]
    pub site: PublicConfig,

    /// Listing and detail page settings
    #[serde(default)]
    pub blog: BlogConfig,

    /// Full-text search ranking configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Share-by-email configuration
    #[serde(default)]
    pub share: ShareConfig,
}

/// Public site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicConfig {
    /// Scheme and host used to build absolute post URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Listing and detail page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Posts per page on the post list
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,

    /// Similar posts shown on a post detail page
    #[serde(default = "default_similar_posts")]
    pub similar_posts: usize,
}

/// Full-text search ranking configuration
///
/// Title and body weights feed the FTS5 `bm25()` column weights. Equal weights
/// reproduce the engine's default, unweighted ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of the title column (default 1.0)
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Weight of the body column (default 1.0)
    #[serde(default = "default_body_weight")]
    pub body_weight: f64,

    /// Maximum number of hits returned when the caller does not ask for a limit
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,
}

/// Share-by-email configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Sender address of share messages
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

fn default_version() -> u32 {
    SITE_FORMAT_VERSION
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_posts_per_page() -> usize {
    3
}

fn default_similar_posts() -> usize {
    DEFAULT_SIMILAR_LIMIT
}

fn default_title_weight() -> f64 {
    1.0
}

fn default_body_weight() -> f64 {
    1.0
}

fn default_search_limit() -> usize {
    20
}

fn default_from_address() -> String {
    "admin@myblog.com".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            version: default_version(),
            site: PublicConfig::default(),
            blog: BlogConfig::default(),
            search: SearchConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

impl Default for PublicConfig {
    fn default() -> Self {
        PublicConfig {
            base_url: default_base_url(),
        }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        BlogConfig {
            posts_per_page: default_posts_per_page(),
            similar_posts: default_similar_posts(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            title_weight: default_title_weight(),
            body_weight: default_body_weight(),
            default_limit: default_search_limit(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            from_address: default_from_address(),
        }
    }
}
