//! Dump command: list the records in a collection

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::Collection;
use crate::error::Result;
use crate::loader;
use crate::output;

/// Run the dump command
pub async fn run(opts: &GlobalOptions, collection: Collection, auth: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client(auth).await?;

    let records = loader::list_collection(&client, collection).await?;
    for record in &records {
        log::info!("Found: {}", record.name);
    }

    println!("{}", output::render_records(collection, &records, ctx.format)?);
    Ok(())
}
