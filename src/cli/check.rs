//! Validate queries without running them

use super::CliError;
use crate::output::{to_json, to_json_pretty};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to validate
    pub query: String,
    /// Skip the default filter
    pub all: bool,
    /// Pretty-print the predicate tree
    pub pretty: bool,
}

/// Parse a query and return its predicate tree as JSON
pub fn execute_check(options: &CheckOptions) -> Result<String, CliError> {
    let predicate = crate::parse(&options.query, !options.all)?;
    let json = if options.pretty {
        to_json_pretty(&predicate)
    } else {
        to_json(&predicate)
    }?;
    Ok(json)
}
