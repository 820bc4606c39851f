//! User subcommands

use clap::Subcommand;

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Delete a user together with their posts
    Delete {
        /// Username
        username: String,
    },
}
