//! `redirmap check` – probe each configured host and report its redirect status.

use anyhow::{bail, Result};
use redirmap_core::config::ProbeConfig;
use redirmap_core::probe;
use redirmap_core::RuleMutator;

pub async fn run_check(mutator: &RuleMutator, cfg: &ProbeConfig) -> Result<()> {
    let rules = mutator.list_all();
    if rules.targets().next().is_none() {
        println!("No redirect rules found.");
        return Ok(());
    }

    let reports = probe::probe_rules(&rules, cfg).await;
    let failing = reports.iter().filter(|r| !r.status.is_ok()).count();
    println!("{:<40} {:<40} {}", "HOST", "TARGET", "STATUS");
    for r in &reports {
        println!("{:<40} {:<40} {}", r.host, r.target, r.status);
    }
    tracing::info!(total = reports.len(), failing, "redirect check finished");
    if failing > 0 {
        bail!("{} of {} hosts do not redirect", failing, reports.len());
    }
    Ok(())
}
