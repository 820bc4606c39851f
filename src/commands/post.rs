//! `quill post` commands - authoring

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_json_status};
use quill_core::db::PostEdit;
use quill_core::error::Result;
use quill_core::post::{NewPost, PostStatus};
use quill_core::site::Site;

/// Create a post; human output is the new post's ID
pub fn create(cli: &Cli, site: &Site, new_post: &NewPost) -> Result<()> {
    let post = site.db().create_post(new_post)?;

    output_by_format_result!(cli.format,
        json => print_json(&post),
        human => {
            println!("{}", post.id);
        }
    )
}

/// Apply an edit; only the given fields change
pub fn edit(cli: &Cli, site: &Site, id: i64, edit: &PostEdit) -> Result<()> {
    let post = site.db().edit_post(id, edit)?;

    output_by_format_result!(cli.format,
        json => print_json(&post),
        human => {
            if !cli.quiet {
                println!("Updated post {}: {}", post.id, post.absolute_url());
            }
        }
    )
}

pub fn set_status(cli: &Cli, site: &Site, id: i64, status: PostStatus) -> Result<()> {
    let post = site.db().set_post_status(id, status)?;

    output_by_format_result!(cli.format,
        json => print_json(&post),
        human => {
            if !cli.quiet {
                println!("Post {} is now {}", post.id, post.status);
            }
        }
    )
}

pub fn set_tags(cli: &Cli, site: &Site, id: i64, tags: &[String]) -> Result<()> {
    let post = site.db().set_post_tags(id, tags)?;

    output_by_format_result!(cli.format,
        json => print_json(&post),
        human => {
            if !cli.quiet {
                if post.tags.is_empty() {
                    println!("Post {} has no tags", post.id);
                } else {
                    println!("Post {} tags: {}", post.id, post.tags.join(", "));
                }
            }
        }
    )
}

pub fn delete(cli: &Cli, site: &Site, id: i64) -> Result<()> {
    site.db().delete_post(id)?;

    output_by_format_result!(cli.format,
        json => print_json_status("ok", None, &[("deleted", serde_json::json!(id))]),
        human => {
            if !cli.quiet {
                println!("Deleted post {}", id);
            }
        }
    )
}
