//! Output formatting for inspected records

use crate::cli::OutputFormat;
use crate::client::{Collection, RemoteRecord};
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

use formatters::RecordRow;

/// Render records in the requested format
pub fn render_records(
    collection: Collection,
    records: &[RemoteRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Json => Ok(json::format_json(collection, records)?),
    }
}
