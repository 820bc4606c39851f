//! Site configuration for quill
//!
//! Configuration is stored in `.quill/config.toml`. Every field has a default,
//! so a missing or partial file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{QuillError, Result};
use crate::ranking::SearchWeights;

pub use types::{
    BlogConfig, PublicConfig, SearchConfig, ShareConfig, SiteConfig, DEFAULT_SIMILAR_LIMIT,
    SITE_FORMAT_VERSION,
};

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QuillError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the rankers and paginator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.blog.posts_per_page == 0 {
            crate::bail_invalid!("blog.posts_per_page", self.blog.posts_per_page);
        }
        if self.blog.similar_posts == 0 {
            crate::bail_invalid!("blog.similar_posts", self.blog.similar_posts);
        }
        if self.search.default_limit == 0 {
            crate::bail_invalid!("search.default_limit", self.search.default_limit);
        }
        for (name, weight) in [
            ("search.title_weight", self.search.title_weight),
            ("search.body_weight", self.search.body_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                crate::bail_invalid!(name, weight);
            }
        }
        Ok(())
    }

    /// Column weights for the text relevance ranker
    pub fn search_weights(&self) -> SearchWeights {
        SearchWeights {
            title: self.search.title_weight,
            body: self.search.body_weight,
        }
    }
}
