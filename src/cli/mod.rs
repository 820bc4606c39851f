//! CLI argument parsing for quill
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod comment;
pub mod parse;
pub mod paths;
pub mod post;
pub mod user;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;

pub use args::{ListArgs, SearchArgs, ShareArgs, ShowArgs, SimilarArgs};
pub use comment::CommentCommands;
pub use quill_core::format::OutputFormat;
pub use post::PostCommands;
pub use user::UserCommands;

/// Quill - a small blog engine with related-post and full-text ranking
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the site
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit site directory path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, a level (`debug`) or directives (`quill_core=trace`)
    #[arg(long, global = true, env = "QUILL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quill site
    Init,

    /// Create and manage posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// List published posts
    List(ListArgs),

    /// Show a published post with its comments and similar posts
    Show(ShowArgs),

    /// Add and moderate comments
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// List tags with the number of published posts using each
    Tags,

    /// Manage post authors
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Posts sharing the most tags with a post
    Similar(SimilarArgs),

    /// Full-text search over published posts
    Search(SearchArgs),

    /// Compose a message recommending a post
    Share(ShareArgs),
}
