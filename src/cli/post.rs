//! Post subcommands for authoring

use super::parse::parse_publish;
use chrono::{DateTime, Utc};
use clap::Subcommand;

/// Post subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Create a new post
    New {
        /// Post title
        title: String,

        /// Author username (created on first use)
        #[arg(long, short, env = "QUILL_AUTHOR")]
        author: String,

        /// Post body
        #[arg(long, short, default_value = "")]
        body: String,

        /// Tags (can be specified multiple times)
        #[arg(long, short, action = clap::ArgAction::Append)]
        tag: Vec<String>,

        /// URL slug (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Publish timestamp (RFC 3339, defaults to now)
        #[arg(long, value_parser = parse_publish)]
        publish: Option<DateTime<Utc>>,

        /// Publish immediately instead of saving a draft
        #[arg(long)]
        published: bool,
    },

    /// Change the title, slug, body or publish time of a post
    Edit {
        /// Post ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New URL slug
        #[arg(long)]
        slug: Option<String>,

        /// New body
        #[arg(long, short)]
        body: Option<String>,

        /// New publish timestamp (RFC 3339)
        #[arg(long, value_parser = parse_publish)]
        publish: Option<DateTime<Utc>>,
    },

    /// Make a post visible to readers
    Publish {
        /// Post ID
        id: i64,
    },

    /// Return a post to draft
    Draft {
        /// Post ID
        id: i64,
    },

    /// Replace the tags of a post
    Tag {
        /// Post ID
        id: i64,

        /// New tag set (none clears it)
        tags: Vec<String>,
    },

    /// Delete a post and its comments
    Delete {
        /// Post ID
        id: i64,
    },
}
