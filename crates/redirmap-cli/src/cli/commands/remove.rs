//! `redirmap remove <host>` – delete one rule by its exact key.

use anyhow::{bail, Context, Result};
use redirmap_core::RuleMutator;

pub fn run_remove(mutator: &RuleMutator, host: &str) -> Result<()> {
    let removed = mutator
        .delete_one(host)
        .context("rule not deleted; check rules file permissions")?;
    if !removed {
        bail!("rule to delete does not exist: {host}");
    }
    println!("Rule deleted.");
    Ok(())
}
