//! `quill list` command - paginated published posts
//!
//! - `--tag` restricts the listing to a tag slug
//! - `--page` never fails: junk selects the first page, out of range the last

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, post_line, print_json};
use quill_core::error::Result;
use quill_core::site::Site;

/// Execute the list command
pub fn execute(cli: &Cli, site: &Site, tag: Option<&str>, page: Option<&str>) -> Result<()> {
    let list = site.post_list(tag, page)?;

    output_by_format_result!(cli.format,
        json => print_json(&list),
        human => {
            if let Some(tag) = &list.tag {
                println!("Posts tagged with \"{}\"", tag.name);
                println!();
            }
            if list.posts.is_empty() {
                if !cli.quiet {
                    println!("No posts found");
                }
            } else {
                for post in &list.posts {
                    println!("{}", post_line(post));
                }
            }
            if !cli.quiet && list.page.num_pages > 1 {
                println!();
                println!("Page {} of {}", list.page.number, list.page.num_pages);
            }
        }
    )
}
