//! `quill tags` command - tag cloud with published post counts

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use quill_core::error::Result;
use quill_core::post::Tag;
use quill_core::site::Site;

#[derive(Serialize)]
struct TagCount<'a> {
    #[serde(flatten)]
    tag: &'a Tag,
    posts: i64,
}

/// Execute the tags command
pub fn execute(cli: &Cli, site: &Site) -> Result<()> {
    let tags = site.db().list_tags()?;

    output_by_format_result!(cli.format,
        json => {
            let counts: Vec<TagCount> = tags
                .iter()
                .map(|(tag, posts)| TagCount { tag, posts: *posts })
                .collect();
            print_json(&counts)
        },
        human => {
            if tags.is_empty() {
                if !cli.quiet {
                    println!("No tags");
                }
            } else {
                for (tag, posts) in &tags {
                    println!("{:>4}  {} ({})", posts, tag.name, tag.slug);
                }
            }
        }
    )
}
