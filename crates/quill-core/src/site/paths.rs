use std::path::{Path, PathBuf};

use crate::error::{QuillError, Result};

/// Site directory name (hidden)
pub const SITE_DIR: &str = ".quill";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` to the nearest directory containing a site
pub fn discover_site(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let site_path = current.join(SITE_DIR);
        if site_path.is_dir() {
            return Ok(site_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(QuillError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
