//! Flat-text export of the rule set: one `<host> <target>` line per rule.
//!
//! No escaping is applied; that is up to whatever renders the text.

use chrono::{DateTime, Utc};

use crate::rule::RuleSet;

/// Body written when there is nothing to export.
pub const EMPTY_EXPORT: &str = "No domain redirect rules found.";

/// Render rules in insertion order. Rules without a usable target are
/// skipped since they have nothing to export.
pub fn render_text(rules: &RuleSet) -> String {
    let mut out = String::new();
    for (host, target) in rules.targets() {
        out.push_str(host);
        out.push(' ');
        out.push_str(target);
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(EMPTY_EXPORT);
    }
    out
}

/// Download file name for an export taken at `now`, e.g.
/// `domain_redirect_rules_20260314_093000.txt`.
pub fn suggested_file_name(now: DateTime<Utc>) -> String {
    format!("domain_redirect_rules_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// [`suggested_file_name`] for the current time.
pub fn default_file_name() -> String {
    suggested_file_name(Utc::now())
}
