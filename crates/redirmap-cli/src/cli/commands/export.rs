//! `redirmap export [--output <path>]` – write rules as flat text.

use anyhow::{Context, Result};
use redirmap_core::export;
use redirmap_core::RuleMutator;
use std::path::Path;

/// Writes to stdout when `output` is `None`. When `output` is an existing
/// directory, the file gets a timestamped name inside it.
pub fn run_export(mutator: &RuleMutator, output: Option<&Path>) -> Result<()> {
    let text = export::render_text(&mutator.list_all());
    let Some(output) = output else {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    let path = if output.is_dir() {
        output.join(export::default_file_name())
    } else {
        output.to_path_buf()
    };
    std::fs::write(&path, &text).with_context(|| format!("write export: {}", path.display()))?;
    println!("Exported rules to {}", path.display());
    Ok(())
}
