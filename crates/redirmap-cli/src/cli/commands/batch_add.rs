//! `redirmap batch-add [--file <path>]` – add or replace rules from `<host> <target>` lines.

use anyhow::{bail, Context, Result};
use redirmap_core::RuleMutator;
use std::path::Path;

/// Reads lines from `file`, or from stdin when no file is given.
pub fn run_batch_add(mutator: &RuleMutator, file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read batch file: {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("read batch input from stdin")?,
    };

    match mutator.add_batch(&input) {
        Ok(count) => {
            println!("Batch add/update succeeded: {count} rule(s).");
            Ok(())
        }
        Err(e) if e.is_validation() => bail!("batch input is malformed or empty: {e}"),
        Err(e) => Err(e).context("batch add/update failed; check rules file permissions"),
    }
}
