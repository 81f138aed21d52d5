//! Allow-list parsing for `ALLOWED_GUILDS` / `ALLOWED_CHANNELS`.

use crate::errors::{Error, Result};
use std::collections::HashSet;

/// Parses a comma-separated list of Discord snowflakes.
///
/// Whitespace around entries and empty entries are ignored, so `""` and `" , "` both
/// yield an empty (unrestricted) list. Any other non-numeric entry is rejected.
///
/// # Errors
/// Returns `Error::Config` naming the variable and the offending entry.
pub fn parse_id_list(variable: &str, raw: &str) -> Result<HashSet<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<u64>().map_err(|e| Error::Config {
                message: format!("{variable} contains an invalid id '{entry}': {e}"),
            })
        })
        .collect()
}
