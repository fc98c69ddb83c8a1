//! Pattern Set — one extraction regex per event kind.
//!
//! Every pattern is case-insensitive and matched anywhere within the full
//! raw line. The shared fragments mirror what the controller actually
//! prints: a `Mon D HH:MM:SS YYYY` timestamp, a colon-delimited hex client
//! MAC, and for AP-facing events an `<ip>-<mac>-<name>` AP descriptor of
//! which only the name is consumed downstream.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use super::model::{EventKind, ExtractedFields};

/// Timestamp fragment: `Mon D HH:MM:SS YYYY`.
const RE_TIME: &str = r"(?P<time>\w+\s+\d+\s+(\d{1,2}:){2}\d{1,2}\s+\d{4})";
/// Colon-delimited hex client MAC.
const RE_USER_MAC: &str = r"(?P<usermac>([0-9a-f]{2}:){5}[0-9a-f]{2})";
/// AP descriptor `<ip>-<mac>-<name>`.
const RE_AP_INFO: &str =
    r"(?P<apip>(\d{1,3}\.){3}\d{1,3})-(?P<apmac>([0-9a-f]{2}:){5}[0-9a-f]{2})-(?P<apname>[\w-]+)";

fn build(shape: &str) -> Regex {
    RegexBuilder::new(shape)
        .case_insensitive(true)
        .build()
        .expect("event pattern")
}

static RE_AUTH_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    build(&format!(
        r"{RE_TIME}(.*)Auth\s+request:\s+{RE_USER_MAC}:?\s+(.*)AP\s+{RE_AP_INFO}"
    ))
});

static RE_DEAUTH: LazyLock<Regex> = LazyLock::new(|| {
    build(&format!(
        r"{RE_TIME}(.*)Deauth(.*):\s+{RE_USER_MAC}:?\s+(.*)AP\s+{RE_AP_INFO}"
    ))
});

static RE_ASSOC_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    build(&format!(
        r"{RE_TIME}(.*)Assoc(.*):\s+{RE_USER_MAC}(.*):?\s+(.*)AP {RE_AP_INFO}"
    ))
});

static RE_DISASSOC: LazyLock<Regex> = LazyLock::new(|| {
    build(&format!(
        r"{RE_TIME}(.*)Disassoc(.*):\s+{RE_USER_MAC}:?\s+AP\s+{RE_AP_INFO}"
    ))
});

static RE_USER_AUTH: LazyLock<Regex> = LazyLock::new(|| {
    build(&format!(
        r"{RE_TIME}(.*)\s+username=(?P<username>[^\s]+)\s+MAC={RE_USER_MAC}\s+IP=(?P<userip>(\d{{1,3}}\.){{3}}\d{{1,3}})(.+)(AP=(?P<apname>[^\s]+))?"
    ))
});

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid permitted-ip prefix pattern: {0}")]
    InvalidIpPrefix(String),
}

/// The compiled extraction patterns for all seven event kinds.
///
/// The five AP/user-auth patterns are fixed; the user-status pattern is
/// compiled at construction because its permitted IP prefixes come from
/// configuration. IP allocation and recycle share that pattern — the
/// message code, not the line shape, tells them apart.
pub struct PatternSet {
    user_status: Regex,
}

impl PatternSet {
    /// Compile the user-status pattern from the configured IP prefix
    /// fragments. Each fragment is a regex over the leading octets of the
    /// user IP; fragments are joined into a single alternation.
    pub fn new(permitted_ip_prefixes: &[String]) -> Result<Self, PatternError> {
        if permitted_ip_prefixes.is_empty() {
            return Err(PatternError::InvalidIpPrefix(
                "at least one prefix required".into(),
            ));
        }
        let alts = permitted_ip_prefixes
            .iter()
            .map(|p| format!("(?:{})", p))
            .collect::<Vec<_>>()
            .join("|");
        let shape = format!(
            r"{RE_TIME}(.*)MAC={RE_USER_MAC}\s+IP=(?P<userip>({alts})(\.\d+){{2}})"
        );
        let user_status = RegexBuilder::new(&shape)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::InvalidIpPrefix(e.to_string()))?;

        Ok(Self { user_status })
    }

    fn pattern(&self, kind: EventKind) -> &Regex {
        match kind {
            EventKind::AuthRequest => &RE_AUTH_REQUEST,
            EventKind::Deauth => &RE_DEAUTH,
            EventKind::AssocRequest => &RE_ASSOC_REQUEST,
            EventKind::Disassoc => &RE_DISASSOC,
            EventKind::UserAuth => &RE_USER_AUTH,
            EventKind::IpAllocation | EventKind::IpRecycle => &self.user_status,
        }
    }

    /// Match the kind's pattern anywhere in the raw line and pull out the
    /// named captures. `None` means the code suggested this kind but the
    /// line shape did not confirm it.
    pub fn extract(&self, kind: EventKind, raw: &str) -> Option<ExtractedFields> {
        let caps = self.pattern(kind).captures(raw)?;
        let get = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
        Some(ExtractedFields {
            time: get("time")?,
            usermac: get("usermac")?,
            apname: get("apname"),
            username: get("username"),
            userip: get("userip"),
        })
    }
}
