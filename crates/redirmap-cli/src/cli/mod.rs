//! CLI for the redirmap rule admin.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use redirmap_core::config::{self, RedirmapConfig};
use redirmap_core::{Resolver, RuleMutator, RuleStore};
use std::path::{Path, PathBuf};

use commands::{
    run_add, run_batch_add, run_check, run_export, run_list, run_remove, run_remove_many,
    run_resolve,
};

/// Top-level CLI for redirmap.
#[derive(Debug, Parser)]
#[command(name = "redirmap")]
#[command(about = "redirmap: host-to-URL redirect rules", long_about = None)]
pub struct Cli {
    /// Rules file to use instead of `rules_path` from config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add or replace a redirect rule.
    Add {
        /// Host to redirect (case-insensitive, stored lowercase).
        host: String,
        /// Absolute target URL.
        target: String,
    },

    /// Add or replace many rules from `<host> <target>` lines.
    BatchAdd {
        /// Read lines from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Delete the rule stored under exactly this host key.
    Remove {
        /// Host key as shown by `list`.
        host: String,
    },

    /// Delete several rules at once; unknown hosts are ignored.
    RemoveMany {
        /// Host keys as shown by `list`.
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// List all rules.
    List,

    /// Export rules as `<host> <target>` lines.
    Export {
        /// Write to this file, or into this directory under a timestamped name. Stdout if omitted.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show what a request for this host would do.
    Resolve {
        /// Request host, as sent by a client.
        host: String,
    },

    /// Probe every configured host and report whether it redirects.
    Check,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = effective_config(cli.rules.as_deref(), config::load_or_init())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = RuleStore::new(cfg.resolve_rules_path(cli.rules.as_deref())?);
        tracing::debug!(path = %store.path().display(), "using rules file");

        match cli.command {
            CliCommand::Add { host, target } => run_add(&RuleMutator::new(store), &host, &target)?,
            CliCommand::BatchAdd { file } => run_batch_add(&RuleMutator::new(store), file.as_deref())?,
            CliCommand::Remove { host } => run_remove(&RuleMutator::new(store), &host)?,
            CliCommand::RemoveMany { hosts } => run_remove_many(&RuleMutator::new(store), &hosts)?,
            CliCommand::List => run_list(&RuleMutator::new(store)),
            CliCommand::Export { output } => run_export(&RuleMutator::new(store), output.as_deref())?,
            CliCommand::Resolve { host } => {
                let resolver = Resolver::new(store, cfg.host_match);
                run_resolve(&resolver, &host, cfg.redirect_delay_secs);
            }
            CliCommand::Check => run_check(&RuleMutator::new(store), &cfg.probe_config()).await?,
        }

        Ok(())
    }
}

/// Config for this run. With `--rules` given, a config file that cannot be
/// loaded or created is not fatal and defaults are used instead.
fn effective_config(rules: Option<&Path>, loaded: Result<RedirmapConfig>) -> Result<RedirmapConfig> {
    match loaded {
        Ok(cfg) => Ok(cfg),
        Err(e) if rules.is_some() => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            Ok(RedirmapConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests;
