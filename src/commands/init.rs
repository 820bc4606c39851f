//! `quill init` command - create a new site
//!
//! Idempotent: an existing configuration and database are kept.

use std::path::Path;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use quill_core::error::Result;
use quill_core::site::Site;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let site = match cli.store.as_ref() {
        Some(path) => Site::init_at(&resolve_store_path(root, path))?,
        None => Site::init(root)?,
    };

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Site initialized"),
            &[("store", serde_json::json!(site.root().display().to_string()))],
        ),
        human => {
            if !cli.quiet {
                println!("Initialized quill site at {}", site.root().display());
            }
        }
    )
}
