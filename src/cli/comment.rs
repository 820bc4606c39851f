//! Comment subcommands

use clap::Subcommand;

/// Comment subcommands
#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment to a published post
    Add {
        /// Post ID
        post_id: i64,

        /// Commenter name
        #[arg(long)]
        name: String,

        /// Commenter email
        #[arg(long)]
        email: String,

        /// Comment text
        #[arg(long)]
        body: String,
    },

    /// List comments on a post
    List {
        /// Post ID
        post_id: i64,

        /// Include hidden comments
        #[arg(long)]
        all: bool,
    },

    /// Hide a comment from readers
    Hide {
        /// Comment ID
        id: i64,
    },

    /// Make a hidden comment visible again
    Show {
        /// Comment ID
        id: i64,
    },
}
