//! Site management for quill
//!
//! A site is a directory holding the configuration and the content database.
//! Default location: `.quill/`

pub mod paths;
mod query;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::db::Database;
use crate::error::{QuillError, Result};
use paths::{CONFIG_FILE, SITE_DIR};

pub use query::{PostDetail, PostList};

/// An opened quill site
#[derive(Debug)]
pub struct Site {
    /// Root path of the site directory
    root: PathBuf,
    config: SiteConfig,
    db: Database,
}

impl Site {
    /// Discover a site by walking up from the given directory
    pub fn discover(root: &Path) -> Result<Self> {
        let site_path = paths::discover_site(root)?;
        Self::open(&site_path)
    }

    /// Open an existing site directory
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(QuillError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            SiteConfig::default()
        };

        let db = Database::open(path)?;

        Ok(Site {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a site under the given project directory
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(SITE_DIR))
    }

    /// Initialize a site at an explicit path.
    ///
    /// Idempotent: an existing configuration is kept as is.
    pub fn init_at(site_root: &Path) -> Result<Self> {
        fs::create_dir_all(site_root)?;

        let config_path = site_root.join(CONFIG_FILE);
        if !config_path.exists() {
            SiteConfig::default().save(&config_path)?;
            tracing::debug!(path = %config_path.display(), "wrote default config");
        }

        Self::open(site_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
