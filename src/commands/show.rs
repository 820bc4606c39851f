//! `quill show` command - a published post addressed by date and slug

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, post_line, print_json};
use quill_core::error::Result;
use quill_core::site::{PostDetail, Site};

/// Execute the show command
pub fn execute(cli: &Cli, site: &Site, year: i32, month: u32, day: u32, slug: &str) -> Result<()> {
    let detail = site.post_detail(year, month, day, slug)?;

    output_by_format_result!(cli.format,
        json => print_json(&detail),
        human => {
            print_human(&detail);
        }
    )
}

fn print_human(detail: &PostDetail) {
    let post = &detail.post;
    println!("{}", post.title);
    println!(
        "Published {} by {}",
        post.publish.format("%b %-d, %Y"),
        post.author
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.body);
    println!();

    println!("Similar posts");
    if detail.similar.is_empty() {
        println!("  There are no similar posts yet.");
    }
    for similar in &detail.similar {
        println!("{}", post_line(&similar.post));
    }
    println!();

    match detail.comments.len() {
        1 => println!("1 comment"),
        n => println!("{} comments", n),
    }
    for (i, comment) in detail.comments.iter().enumerate() {
        println!();
        println!(
            "Comment {} by {} {}",
            i + 1,
            comment.name,
            comment.created.format("%Y-%m-%d %H:%M")
        );
        println!("{}", comment.body);
    }
}
