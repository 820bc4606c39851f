//! `quill share` command - compose a recommendation message
//!
//! Nothing is sent; the message is written to stdout the way a console mail
//! backend would print it.

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use quill_core::error::Result;
use quill_core::share::ShareForm;
use quill_core::site::Site;

/// Execute the share command
pub fn execute(cli: &Cli, site: &Site, id: i64, form: &ShareForm) -> Result<()> {
    let message = site.share_post(id, form)?;

    output_by_format_result!(cli.format,
        json => print_json(&message),
        human => {
            print!("{}", message.to_console());
        }
    )
}
