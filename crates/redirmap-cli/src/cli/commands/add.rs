//! `redirmap add <host> <target>` – add or replace one rule.

use anyhow::{bail, Context, Result};
use redirmap_core::RuleMutator;

pub fn run_add(mutator: &RuleMutator, host: &str, target: &str) -> Result<()> {
    match mutator.add_one(host, target) {
        Ok(()) => {
            println!("Rule added.");
            Ok(())
        }
        Err(e) if e.is_validation() => bail!("enter a valid host and target URL: {e}"),
        Err(e) => Err(e).context("rule not added; check rules file permissions"),
    }
}
