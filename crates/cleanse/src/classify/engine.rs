//! Line Classifier & Formatter — the per-line orchestrator.
//!
//! Pipeline: envelope pre-filter, code parse, code-table lookup, pattern
//! extraction, date normalization, record assembly. Every failure mode
//! resolves per line: either "emit nothing" or a per-line error the caller
//! logs and survives. Nothing here can stop the stream.

use tracing::debug;

use super::code;
use super::date;
use super::model::{ClassifyError, NormalizedRecord};
use super::pattern::{PatternError, PatternSet};
use crate::conf::CleanseConfig;

pub struct Classifier {
    patterns: PatternSet,
}

impl Classifier {
    pub fn new(config: &CleanseConfig) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: PatternSet::new(&config.permitted_ip_prefixes)?,
        })
    }

    /// Classify one raw syslog line.
    ///
    /// `Ok(Some(record))` for the seven recognized session events.
    /// `Ok(None)` for everything else: non-infrastructure envelope,
    /// unrecognized or reserved code, shape mismatch, undatable timestamp.
    /// `Err` only when the code token led with `5` but was not numeric.
    /// No outcome for one line says anything about any other line.
    pub fn classify(&self, raw: &str) -> Result<Option<NormalizedRecord>, ClassifyError> {
        let Some(token) = envelope_code_token(raw) else {
            return Ok(None);
        };
        let code: u32 = token
            .parse()
            .map_err(|_| ClassifyError::BadMessageCode(token.to_string()))?;

        let Some(kind) = code::lookup(code) else {
            return Ok(None);
        };

        let Some(fields) = self.patterns.extract(kind, raw) else {
            // Shape drift signal: the code promised this kind but the line
            // did not confirm it (truncated or reformatted log line).
            debug!("code {} looked like {} but the line shape did not match", code, kind.as_str());
            return Ok(None);
        };

        let Some(time) = date::normalize(&fields.time) else {
            return Ok(None);
        };

        Ok(Some(NormalizedRecord {
            kind,
            usermac: fields.usermac.replace(':', ""),
            time,
            apname: fields.apname,
            username: fields.username,
            userip: fields.userip,
        }))
    }
}

/// Locate the bracketed message-code token.
///
/// The line must split into three parts on `<` and the third part must
/// lead with digit `5`; anything else is not an infrastructure message
/// and is rejected before any code parsing.
fn envelope_code_token(raw: &str) -> Option<&str> {
    let mut chops = raw.splitn(3, '<');
    chops.next()?;
    chops.next()?;
    let tail = chops.next()?;
    if !tail.starts_with('5') {
        return None;
    }
    tail.split('>').next()
}
