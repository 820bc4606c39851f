//! `quill search` command - full-text search over published posts
//!
//! - plain queries: every word must appear; stop words and punctuation are ignored
//! - `--raw`: FTS5 query syntax, syntax errors are usage errors
//! - results ordered by relevance, then newest first

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, post_line, print_json};
use quill_core::error::Result;
use quill_core::site::Site;

/// Execute the search command
pub fn execute(
    cli: &Cli,
    site: &Site,
    query: Option<&str>,
    raw: bool,
    limit: Option<usize>,
) -> Result<()> {
    if cli.verbose {
        tracing::debug!(?query, raw, ?limit, "search_params");
    }

    let hits = site.search(query, raw, limit)?;

    output_by_format_result!(cli.format,
        json => print_json(&hits),
        human => {
            if hits.is_empty() {
                if !cli.quiet {
                    println!("No results found");
                }
            } else {
                for hit in &hits {
                    println!("{}  rank={:.3e}", post_line(&hit.post), hit.rank);
                }
            }
        }
    )
}
