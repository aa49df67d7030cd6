//! Classification of probe responses.

use std::fmt;

/// What a HEAD request against a configured host showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// 301, 302, 307 or 308: the host redirects.
    RedirectOk(u32),
    /// 200: the host answers but does not redirect.
    NoRedirect,
    /// Any other status code.
    Other(u32),
    /// Connection failed or timed out.
    NoResponse,
    /// The host cannot be turned into a request URL.
    InvalidHost,
}

impl ProbeStatus {
    pub fn from_code(code: u32) -> Self {
        match code {
            301 | 302 | 307 | 308 => ProbeStatus::RedirectOk(code),
            200 => ProbeStatus::NoRedirect,
            other => ProbeStatus::Other(other),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeStatus::RedirectOk(_))
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::RedirectOk(code) => write!(f, "redirect ok ({code})"),
            ProbeStatus::NoRedirect => write!(f, "no redirect (200)"),
            ProbeStatus::Other(code) => write!(f, "status {code}"),
            ProbeStatus::NoResponse => write!(f, "no response"),
            ProbeStatus::InvalidHost => write!(f, "invalid host"),
        }
    }
}
