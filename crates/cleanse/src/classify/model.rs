use serde::Serialize;
use thiserror::Error;

/// The seven session-lifecycle events that produce output, with the fixed
/// digit encodings used in the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Client authentication attempt (0)
    AuthRequest,
    /// Client deauthenticated (1)
    Deauth,
    /// Client association attempt (2)
    AssocRequest,
    /// Client disassociated (3)
    Disassoc,
    /// Portal/username-level authentication event (4)
    UserAuth,
    /// Client IP bound (5)
    IpAllocation,
    /// Client IP released (6)
    IpRecycle,
}

impl EventKind {
    /// The digit written into the output record's event-code column.
    pub fn code_digit(&self) -> &'static str {
        match self {
            EventKind::AuthRequest => "0",
            EventKind::Deauth => "1",
            EventKind::AssocRequest => "2",
            EventKind::Disassoc => "3",
            EventKind::UserAuth => "4",
            EventKind::IpAllocation => "5",
            EventKind::IpRecycle => "6",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AuthRequest => "auth_request",
            EventKind::Deauth => "deauth",
            EventKind::AssocRequest => "assoc_request",
            EventKind::Disassoc => "disassoc",
            EventKind::UserAuth => "user_auth",
            EventKind::IpAllocation => "ip_allocation",
            EventKind::IpRecycle => "ip_recycle",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The bracketed code token led with `5` but did not parse as an
    /// integer. A per-line failure: the caller logs it and moves on.
    #[error("message code is not numeric: {0:?}")]
    BadMessageCode(String),
}

/// Named captures pulled out of one matched line, before normalization.
///
/// `time` and `usermac` are present for every kind; the rest depend on the
/// kind's pattern. An optional capture the pattern did not bind stays
/// `None` and is rendered as an empty column, never a fabricated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub time: String,
    pub usermac: String,
    pub apname: Option<String>,
    pub username: Option<String>,
    pub userip: Option<String>,
}

/// One normalized output record. Built once per matched line, serialized
/// with [`NormalizedRecord::to_line`], then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub kind: EventKind,
    /// 12 hex digits, separators stripped, case preserved.
    pub usermac: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub time: String,
    pub apname: Option<String>,
    pub username: Option<String>,
    pub userip: Option<String>,
}

impl NormalizedRecord {
    /// Render the tab-separated wire line, trailing newline included.
    ///
    /// Column layout by kind:
    /// - AP-facing kinds (0-3): `usermac  time  code  apname`
    /// - UserAuth (4):          `usermac  time  4  apname  username  userip`
    /// - IP status kinds (5-6): `usermac  time  code  userip`
    pub fn to_line(&self) -> String {
        let code = self.kind.code_digit();
        match self.kind {
            EventKind::AuthRequest
            | EventKind::Deauth
            | EventKind::AssocRequest
            | EventKind::Disassoc => format!(
                "{}\t{}\t{}\t{}\n",
                self.usermac,
                self.time,
                code,
                self.apname.as_deref().unwrap_or(""),
            ),
            EventKind::UserAuth => format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                self.usermac,
                self.time,
                code,
                self.apname.as_deref().unwrap_or(""),
                self.username.as_deref().unwrap_or(""),
                self.userip.as_deref().unwrap_or(""),
            ),
            EventKind::IpAllocation | EventKind::IpRecycle => format!(
                "{}\t{}\t{}\t{}\n",
                self.usermac,
                self.time,
                code,
                self.userip.as_deref().unwrap_or(""),
            ),
        }
    }
}
