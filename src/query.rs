//! Query surfaces over resolved records
//!
//! The shapes the surrounding infrastructure-as-code layer consumes:
//! a per-identity escalation map and a per-identity remote-access
//! summary. Tri-state remote-access fields collapse to plain booleans
//! here and only here; everywhere upstream the unset/false distinction
//! is preserved because it drives override semantics.

use crate::model::{AccessRecord, RoleMap};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Resolved remote-access entitlement for one identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoteAccessSummary {
    /// Whether the identity has remote access
    pub enabled: bool,
    /// Whether the identity has remote admin access
    pub admin: bool,
}

/// Map each identity to its effective escalations per project.
///
/// If `filter` names an identity that is not present, a warning is
/// logged and the empty map is returned — a missing identity is not a
/// query failure.
pub fn escalation_report(
    records: &[AccessRecord],
    filter: Option<&str>,
) -> BTreeMap<String, RoleMap> {
    let report: BTreeMap<String, RoleMap> = records
        .iter()
        .filter(|r| filter.is_none_or(|identity| identity == r.identity))
        .map(|r| (r.identity.clone(), r.escalation.escalations.clone()))
        .collect();

    warn_if_filter_missed(filter, report.is_empty());
    report
}

/// Map each identity with remote access enabled to its resolved
/// entitlement.
///
/// Entities whose effective `enabled` is false (including never
/// declared) are omitted entirely. The same non-fatal filter semantics
/// as [`escalation_report`] apply.
pub fn remote_access_report(
    records: &[AccessRecord],
    filter: Option<&str>,
) -> BTreeMap<String, RemoteAccessSummary> {
    let report: BTreeMap<String, RemoteAccessSummary> = records
        .iter()
        .filter(|r| r.remote.effective_enabled())
        .filter(|r| filter.is_none_or(|identity| identity == r.identity))
        .map(|r| {
            (
                r.identity.clone(),
                RemoteAccessSummary {
                    enabled: r.remote.effective_enabled(),
                    admin: r.remote.effective_admin(),
                },
            )
        })
        .collect();

    warn_if_filter_missed(filter, report.is_empty());
    report
}

fn warn_if_filter_missed(filter: Option<&str>, empty: bool) {
    if let Some(identity) = filter
        && empty
    {
        warn!(identity, "Requested identity not found, returning empty result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityType, RemoteAccess};

    fn user(identity: &str, remote: RemoteAccess) -> AccessRecord {
        let mut record = AccessRecord::new(identity, EntityType::User);
        record.remote = remote;
        record
    }

    fn records() -> Vec<AccessRecord> {
        let mut a = user(
            "ada.lovelace@ravelin.com",
            RemoteAccess {
                enabled: Some(true),
                admin: Some(true),
            },
        );
        a.escalation.escalations.insert(
            "analytics".to_string(),
            vec!["roles/bigquery.admin".to_string()],
        );

        let b = user(
            "john.doe@ravelin.com",
            RemoteAccess {
                enabled: Some(false),
                admin: Some(true),
            },
        );

        let c = user("grace.hopper@ravelin.com", RemoteAccess::default());

        vec![a, b, c]
    }

    #[test]
    fn test_escalation_report_all_users() {
        let report = escalation_report(&records(), None);
        assert_eq!(report.len(), 3);
        assert_eq!(
            report["ada.lovelace@ravelin.com"]["analytics"],
            vec!["roles/bigquery.admin"]
        );
        assert!(report["john.doe@ravelin.com"].is_empty());
    }

    #[test]
    fn test_escalation_report_filtered() {
        let report = escalation_report(&records(), Some("ada.lovelace@ravelin.com"));
        assert_eq!(report.len(), 1);
        assert!(report.contains_key("ada.lovelace@ravelin.com"));
    }

    #[test]
    fn test_missing_filter_identity_returns_empty() {
        let report = escalation_report(&records(), Some("nobody@ravelin.com"));
        assert!(report.is_empty());
    }

    #[test]
    fn test_remote_access_report_only_enabled() {
        let report = remote_access_report(&records(), None);
        assert_eq!(report.len(), 1);
        assert_eq!(
            report["ada.lovelace@ravelin.com"],
            RemoteAccessSummary {
                enabled: true,
                admin: true,
            }
        );
    }

    #[test]
    fn test_remote_access_unset_counts_as_disabled() {
        let report = remote_access_report(&records(), Some("grace.hopper@ravelin.com"));
        assert!(report.is_empty());
    }
}
