//! Group inheritance
//!
//! Two access domains inherit from groups with deliberately different
//! policies:
//!
//! - **escalations** use a set-union merge across *all* declared
//!   groups (in declared order), gated by the user's `inherit` flag;
//! - **remote access** uses override-fill from the *first* declared
//!   group only — a group value is adopted only where the user left
//!   the field undeclared, and an explicit user setting always wins.
//!
//! The resolver performs no file I/O; the directory walker looks up
//! group records and passes them in already parsed.

use crate::error::InheritError;
use crate::model::AccessRecord;
use crate::resolver::merge::merge_role_maps;
use tracing::debug;

/// Merge group escalations into a user's effective escalations.
///
/// `groups` must hold the records for the user's declared memberships,
/// in declared order. A no-op when the user's `inherit` flag is unset
/// or no groups were declared.
pub fn inherit_escalations(
    user: &mut AccessRecord,
    groups: &[AccessRecord],
) -> Result<(), InheritError> {
    ensure_user(user)?;

    if !user.escalation.inherit {
        return Ok(());
    }

    for group in groups {
        debug!(
            user = %user.identity,
            group = %group.identity,
            "Merging group escalations"
        );
        user.escalation.escalations =
            merge_role_maps(&user.escalation.escalations, &group.escalation.escalations);
    }

    Ok(())
}

/// Fill a user's remote-access entitlement from their primary group.
///
/// `primary_group` is the record for the first declared membership, or
/// `None` when the user belongs to no groups (a no-op). The group's
/// `enabled` is adopted only if the user declared none; `admin` is
/// adopted only when the effective `enabled` is true. When the
/// effective `enabled` is not true, `admin` resolves to an explicit
/// `false` no matter what was declared — admin access cannot outlive a
/// disabled entitlement.
pub fn inherit_remote_access(
    user: &mut AccessRecord,
    primary_group: Option<&AccessRecord>,
) -> Result<(), InheritError> {
    ensure_user(user)?;

    let Some(group) = primary_group else {
        return Ok(());
    };

    if user.remote.enabled.is_none() {
        user.remote.enabled = group.remote.enabled;
    }

    if user.remote.enabled == Some(true) {
        if user.remote.admin.is_none() {
            user.remote.admin = group.remote.admin;
        }
    } else {
        user.remote.admin = Some(false);
    }

    Ok(())
}

fn ensure_user(record: &AccessRecord) -> Result<(), InheritError> {
    if record.entity_type.supports_inheritance() {
        Ok(())
    } else {
        Err(InheritError::NotSupported {
            entity: record.entity_type,
            identity: record.identity.clone(),
        })
    }
}
