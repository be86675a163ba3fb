//! Reset command: delete every record, insert nothing

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::Collection;
use crate::error::Result;
use crate::loader;

/// Run the reset command
pub async fn run(opts: &GlobalOptions, only: Option<Collection>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.authenticated_client().await?;

    for summary in loader::reset(&client, only).await? {
        println!(
            "{} {}: deleted {}",
            "✓".green(),
            summary.collection.to_string().bold(),
            summary.deleted
        );
    }
    Ok(())
}
