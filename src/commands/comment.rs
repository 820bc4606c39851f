//! `quill comment` commands

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use quill_core::error::Result;
use quill_core::post::CommentForm;
use quill_core::site::Site;

/// Add a comment; human output is the new comment's ID
pub fn add(cli: &Cli, site: &Site, post_id: i64, form: &CommentForm) -> Result<()> {
    let comment = site.db().add_comment(post_id, form)?;

    output_by_format_result!(cli.format,
        json => print_json(&comment),
        human => {
            println!("{}", comment.id);
        }
    )
}

/// Comments on a post, oldest first; hidden ones only with `all`
pub fn list(cli: &Cli, site: &Site, post_id: i64, all: bool) -> Result<()> {
    site.db().require_post(post_id)?;
    let comments = if all {
        site.db().all_comments(post_id)?
    } else {
        site.db().active_comments(post_id)?
    };

    output_by_format_result!(cli.format,
        json => print_json(&comments),
        human => {
            if comments.is_empty() {
                if !cli.quiet {
                    println!("No comments");
                }
            } else {
                for comment in &comments {
                    let hidden = if comment.active { "" } else { "  (hidden)" };
                    println!(
                        "{:>4}  {}  {} <{}>{}",
                        comment.id,
                        comment.created.format("%Y-%m-%d %H:%M"),
                        comment.name,
                        comment.email,
                        hidden
                    );
                    println!("      {}", comment.body);
                }
            }
        }
    )
}

/// Show or hide a comment
pub fn set_active(cli: &Cli, site: &Site, id: i64, active: bool) -> Result<()> {
    let comment = site.db().set_comment_active(id, active)?;

    output_by_format_result!(cli.format,
        json => print_json(&comment),
        human => {
            if !cli.quiet {
                let state = if comment.active { "visible" } else { "hidden" };
                println!("Comment {} is now {}", comment.id, state);
            }
        }
    )
}
