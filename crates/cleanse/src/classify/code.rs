//! Event Code Table — static partition of controller message codes.
//!
//! The controller tags every infrastructure message with a numeric code.
//! The groups below route a code to its event kind; codes in the response
//! and roam groups are recognized in the raw feed but deliberately produce
//! no output.

use super::model::EventKind;

/// Client authentication attempts.
const CODE_AUTH_REQUEST: &[u32] = &[501091, 501092, 501109];
/// Deauth from and to the client.
const CODE_DEAUTH: &[u32] = &[
    501105, 501080, 501098, 501099, 501106, 501107, 501108, 501111,
];
/// Client association attempts.
const CODE_ASSOC_REQUEST: &[u32] = &[501095, 501096, 501097];
/// Client disassociation.
const CODE_DISASSOC: &[u32] = &[501102, 501104, 501113];
/// Portal authentication, successful and failed.
const CODE_USER_AUTH: &[u32] = &[522008, 522042, 522038];
/// User entry added, deleted, and user miss.
const CODE_USER_STATUS: &[u32] = &[522005, 522006, 522026];

/// Auth responses; recognized upstream, excluded from output.
const CODE_AUTH_RESPONSE: &[u32] = &[501093, 501094, 501110];
/// Assoc responses; recognized upstream, excluded from output.
const CODE_ASSOC_RESPONSE: &[u32] = &[501100, 501101, 501112];
/// Roaming; recognized upstream, excluded from output.
const CODE_USER_ROAM: &[u32] = &[500010];

/// User entry deleted — the one status code that signals an IP recycle.
/// Every other code in the user-status group signals an allocation.
const CODE_USER_ENTRY_DELETED: u32 = 522005;

/// Code-group to kind routing table. Groups are disjoint by construction,
/// so lookup order carries no meaning.
const GROUPS: &[(&[u32], EventKind)] = &[
    (CODE_AUTH_REQUEST, EventKind::AuthRequest),
    (CODE_DEAUTH, EventKind::Deauth),
    (CODE_ASSOC_REQUEST, EventKind::AssocRequest),
    (CODE_DISASSOC, EventKind::Disassoc),
    (CODE_USER_AUTH, EventKind::UserAuth),
];

/// Map a message code to its event kind.
///
/// Returns `None` for codes outside every group and for the reserved
/// response/roam groups — both mean "emit nothing for this line".
pub fn lookup(code: u32) -> Option<EventKind> {
    if CODE_USER_STATUS.contains(&code) {
        return Some(if code == CODE_USER_ENTRY_DELETED {
            EventKind::IpRecycle
        } else {
            EventKind::IpAllocation
        });
    }
    GROUPS
        .iter()
        .find(|(codes, _)| codes.contains(&code))
        .map(|&(_, kind)| kind)
}

/// True when the code belongs to a group the controller emits but the
/// output schema excludes (auth/assoc responses, roaming).
pub fn is_reserved(code: u32) -> bool {
    CODE_AUTH_RESPONSE.contains(&code)
        || CODE_ASSOC_RESPONSE.contains(&code)
        || CODE_USER_ROAM.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_auth_request_codes() {
        for code in [501091, 501092, 501109] {
            assert_eq!(lookup(code), Some(EventKind::AuthRequest));
        }
    }

    #[test]
    fn test_lookup_deauth_codes() {
        for code in [501105, 501080, 501098, 501099, 501106, 501107, 501108, 501111] {
            assert_eq!(lookup(code), Some(EventKind::Deauth));
        }
    }

    #[test]
    fn test_lookup_assoc_request_codes() {
        for code in [501095, 501096, 501097] {
            assert_eq!(lookup(code), Some(EventKind::AssocRequest));
        }
    }

    #[test]
    fn test_lookup_disassoc_codes() {
        for code in [501102, 501104, 501113] {
            assert_eq!(lookup(code), Some(EventKind::Disassoc));
        }
    }

    #[test]
    fn test_lookup_user_auth_codes() {
        for code in [522008, 522042, 522038] {
            assert_eq!(lookup(code), Some(EventKind::UserAuth));
        }
    }

    #[test]
    fn test_user_entry_deleted_is_recycle() {
        assert_eq!(lookup(522005), Some(EventKind::IpRecycle));
    }

    #[test]
    fn test_other_user_status_codes_are_allocation() {
        assert_eq!(lookup(522006), Some(EventKind::IpAllocation));
        assert_eq!(lookup(522026), Some(EventKind::IpAllocation));
    }

    #[test]
    fn test_reserved_groups_map_to_nothing() {
        for code in [501093, 501094, 501110, 501100, 501101, 501112, 500010] {
            assert!(is_reserved(code));
            assert_eq!(lookup(code), None);
        }
    }

    #[test]
    fn test_unknown_codes_map_to_nothing() {
        for code in [0, 5, 500000, 501090, 522000, 999999] {
            assert_eq!(lookup(code), None);
            assert!(!is_reserved(code));
        }
    }
}
