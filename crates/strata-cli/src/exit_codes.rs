//! Process exit codes. Part of the CLI contract.

use strata_core::StrataError;

pub const SUCCESS: i32 = 0;
pub const CONFIG_ERROR: i32 = 2; // Bad flags/config file, or any untyped failure
pub const CORPUS_ERROR: i32 = 3; // Corpus root missing or unreadable
pub const WRITE_ERROR: i32 = 4; // Report could not be written

/// Exit code for a failed command, taken from the first typed error in the chain.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<StrataError>())
        .map_or(CONFIG_ERROR, StrataError::exit_code)
}
