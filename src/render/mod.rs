//! Rendering of record snapshots into one of the supported output formats.

pub mod table;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::record::Tabular;

pub use table::format_table;

/// Output format, selected once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain table (also accepted as `txt`)
    #[default]
    #[value(alias = "txt")]
    Table,
    Json,
    Yaml,
}

/// Render a snapshot in the requested format.
///
/// JSON is an indented array of objects; YAML is the block-style equivalent
/// of the same record sequence. Field order follows the record's declaration
/// order, so output is deterministic for a given snapshot.
pub fn render<T>(records: &[T], format: OutputFormat) -> Result<String>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Table => Ok(format_table(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(records)?),
    }
}
