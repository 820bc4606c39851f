//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use quill_core::error::Result;
use quill_core::site::Site;

/// Discover or open a site based on CLI configuration
pub fn discover_or_open_site(cli: &Cli, root: &PathBuf) -> Result<Site> {
    if let Some(path) = &cli.store {
        Site::open(&resolve_store_path(root, path))
    } else {
        Site::discover(root)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_site(&self) -> Result<Site> {
        let site = discover_or_open_site(self.cli, self.root)?;
        super::trace_command!(self.cli, self.start, "discover_site");
        Ok(site)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("quill {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A small blog engine with related-post and full-text ranking.");
        println!();
        println!("Run `quill --help` for usage information.");
        Ok(())
    }
}
