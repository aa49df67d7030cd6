//! Operator input cleanup: URL-safe sanitization, host normalization and
//! batch line splitting.
//!
//! Sanitization is lossy and lightweight. It strips characters that may not
//! appear in a URL; it does not parse or validate the result.

/// Punctuation allowed through by [`sanitize_url_text`], in addition to ASCII
/// letters and digits.
const URL_PUNCTUATION: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Removes every character that is not an ASCII letter, digit, or one of the
/// URL punctuation characters. Whitespace, control characters and all
/// non-ASCII characters are dropped.
pub fn sanitize_url_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || URL_PUNCTUATION.contains(*c))
        .collect()
}

/// Trim, sanitize and lowercase a host as typed by an operator.
///
/// Returns `None` when nothing is left.
pub fn normalize_host(raw: &str) -> Option<String> {
    let host = sanitize_url_text(raw.trim()).to_ascii_lowercase();
    (!host.is_empty()).then_some(host)
}

/// Trim and sanitize a redirect target. Case is preserved.
pub fn normalize_target(raw: &str) -> Option<String> {
    let target = sanitize_url_text(raw.trim());
    (!target.is_empty()).then_some(target)
}

/// Split one batch line into `(host, target)` on the first whitespace run.
///
/// Everything after that run is the target token, so internal whitespace in
/// it survives until sanitization strips it. Lines with fewer than two tokens
/// yield `None`.
pub fn split_batch_line(line: &str) -> Option<(&str, &str)> {
    let (host, rest) = line.trim().split_once(char::is_whitespace)?;
    let target = rest.trim_start();
    if host.is_empty() || target.is_empty() {
        return None;
    }
    Some((host, target))
}
