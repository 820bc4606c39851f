//! `quill user` commands

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use quill_core::error::Result;
use quill_core::site::Site;

/// Delete a user; their posts and those posts' comments go with them
pub fn delete(cli: &Cli, site: &Site, username: &str) -> Result<()> {
    site.db().delete_user(username)?;

    output_by_format_result!(cli.format,
        json => print_json_status("ok", None, &[("deleted", serde_json::json!(username))]),
        human => {
            if !cli.quiet {
                println!("Deleted user {}", username);
            }
        }
    )
}
