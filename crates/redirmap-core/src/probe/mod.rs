//! Redirect status probe.
//!
//! Sends a HEAD request to each configured host (not to its target) and
//! reports whether the host actually answers with a redirect. Uses the curl
//! crate (libcurl); redirects are not followed so the first response is what
//! gets classified.
//!
//! The probe works on a rule snapshot and never holds the store lock.

mod status;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;
use url::Url;

use crate::config::ProbeConfig;
use crate::rule::RuleSet;

pub use status::ProbeStatus;

/// Probe outcome for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub host: String,
    pub target: String,
    pub status: ProbeStatus,
}

/// Request URL for a configured host: `<scheme>://<host>/`.
pub fn probe_url(host: &str, scheme: &str) -> Result<Url> {
    Url::parse(&format!("{scheme}://{host}/")).with_context(|| format!("invalid probe host: {host}"))
}

/// Probe a single host.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn probe_host(host: &str, cfg: &ProbeConfig) -> ProbeStatus {
    let url = match probe_url(host, &cfg.scheme) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(%host, "{:#}", e);
            return ProbeStatus::InvalidHost;
        }
    };
    match head_status(url.as_str(), Duration::from_secs(cfg.timeout_secs.max(1))) {
        Ok(code) => {
            let status = ProbeStatus::from_code(code);
            tracing::debug!(%host, code, %status, "probe finished");
            status
        }
        Err(e) => {
            tracing::debug!(%host, "probe failed: {:#}", e);
            ProbeStatus::NoResponse
        }
    }
}

/// Probe every rule with a usable target, at most `cfg.concurrency` at once.
/// Reports come back in rule order.
pub async fn probe_rules(rules: &RuleSet, cfg: &ProbeConfig) -> Vec<ProbeReport> {
    let permits = Arc::new(Semaphore::new(cfg.concurrency.max(1)));
    let mut pending = Vec::with_capacity(rules.len());

    for (host, target) in rules.targets() {
        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            break;
        };
        let host = host.to_string();
        let cfg = cfg.clone();
        let handle = tokio::task::spawn_blocking({
            let host = host.clone();
            move || {
                let status = probe_host(&host, &cfg);
                drop(permit);
                status
            }
        });
        pending.push((host, target.to_string(), handle));
    }

    let mut reports = Vec::with_capacity(pending.len());
    for (host, target, handle) in pending {
        let status = match handle.await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(%host, "probe task failed: {}", e);
                ProbeStatus::NoResponse
            }
        };
        reports.push(ProbeReport {
            host,
            target,
            status,
        });
    }
    reports
}

/// HEAD `url` without following redirects; returns the response code.
fn head_status(url: &str, timeout: Duration) -> Result<u32> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(false)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;
    easy.perform().context("HEAD request failed")?;
    easy.response_code().context("no response code")
}
