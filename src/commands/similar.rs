//! `quill similar` command - posts ranked by shared tags

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, post_line, print_json};
use quill_core::error::Result;
use quill_core::site::Site;

/// Execute the similar command
pub fn execute(cli: &Cli, site: &Site, id: i64, limit: Option<usize>) -> Result<()> {
    let similar = site.similar_posts(id, limit)?;
    tracing::debug!(post_id = id, results = similar.len(), "similar");

    output_by_format_result!(cli.format,
        json => print_json(&similar),
        human => {
            if similar.is_empty() {
                if !cli.quiet {
                    println!("No similar posts");
                }
            } else {
                for item in &similar {
                    println!("{}  shared_tags={}", post_line(&item.post), item.same_tags);
                }
            }
        }
    )
}
