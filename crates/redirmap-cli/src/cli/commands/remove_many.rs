//! `redirmap remove-many <host>...` – delete several rules in one write.

use anyhow::{Context, Result};
use redirmap_core::RuleMutator;

pub fn run_remove_many(mutator: &RuleMutator, hosts: &[String]) -> Result<()> {
    let removed = mutator
        .delete_batch(hosts)
        .context("batch delete failed; check rules file permissions")?;
    if removed == 0 {
        println!("No matching rules selected for deletion.");
    } else {
        println!("Deleted {removed} rule(s).");
    }
    Ok(())
}
