//! Seed command: wipe and reinsert the fixtures, then hand over to the shell

use std::io::IsTerminal;

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, SeedArgs, shell};
use crate::error::Result;
use crate::fixtures::FixtureSet;
use crate::loader::{self, LoadSummary};

/// Run the seed command
pub async fn run(opts: &GlobalOptions, args: &SeedArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let fixtures = FixtureSet::load(ctx.fixtures_path().as_deref())?;

    // The authenticated client is dropped before the shell opens
    let summaries = {
        let client = ctx.authenticated_client().await?;
        loader::load(&client, &fixtures, args.only, args.verify).await?
    };
    print_summaries(&summaries, args.verify);

    if args.no_shell || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    let explorer = ctx.anonymous_client()?;
    shell::interact(&explorer, ctx.base_url()).await
}

/// Print one line per reloaded collection
pub fn print_summaries(summaries: &[LoadSummary], verified: bool) {
    for summary in summaries {
        let suffix = if verified { " (verified)" } else { "" };
        println!(
            "{} {}: deleted {}, created {}{}",
            "✓".green(),
            summary.collection.to_string().bold(),
            summary.deleted,
            summary.created,
            suffix
        );
    }
}
