//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, parse_json_body, parse_method};
pub use global::GlobalOptions;
