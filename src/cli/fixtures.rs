//! Fixtures command: print the effective fixture set

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::{ConfigError, Result};
use crate::fixtures::FixtureSet;

/// Run the fixtures command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let fixtures = FixtureSet::load(ctx.fixtures_path().as_deref())?;

    let rendered = match ctx.format {
        OutputFormat::Json => serde_json::to_string_pretty(&fixtures)?,
        OutputFormat::Table => fixtures
            .to_yaml()
            .map_err(|e| ConfigError::Invalid(format!("Failed to render fixtures: {}", e)))?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
