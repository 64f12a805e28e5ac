//! Access record types
//!
//! An [`AccessRecord`] is the normalized, in-memory form of one
//! definition file. It is created by the parser, enriched in place by
//! the inheritance resolver, and handed to callers as a finished
//! read-only value. Nothing is persisted across resolution runs.

use crate::model::entity::EntityType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Escalation roles keyed by project name
pub type RoleMap = BTreeMap<String, Vec<String>>;

/// Normalized access declared by (or resolved for) one entity
#[derive(Debug, Clone, Serialize)]
pub struct AccessRecord {
    /// Fully qualified address derived from the source file name;
    /// immutable once computed
    pub identity: String,
    /// Kind of entity, set at classification time
    pub entity_type: EntityType,
    /// Group names declared by a user, in declared order; always empty
    /// for groups and service accounts
    pub group_memberships: Vec<String>,
    /// Escalation privileges per project
    pub escalation: EscalationAccess,
    /// Remote-access entitlement
    pub remote: RemoteAccess,
    /// Originating file path, kept only so group files can be located
    /// relative to it during inheritance
    #[serde(skip)]
    pub source_path: PathBuf,
}

/// Escalation configuration for a user or a group
#[derive(Debug, Clone, Default, Serialize)]
pub struct EscalationAccess {
    /// Map of project names to escalation roles. After parsing, no
    /// `custom/<name>` shorthand remains in these lists.
    pub escalations: RoleMap,
    /// Whether escalations are inherited from the user's groups.
    /// Inheritance is only supported for users.
    pub inherit: bool,
}

/// Remote-access configuration for a user or a group.
///
/// Both fields are tri-state: `None` means "not declared", which is
/// distinct from an explicit `Some(false)` — an explicit `false` on a
/// user overrides a group-level `true`, while an undeclared field is
/// filled from the group.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RemoteAccess {
    /// Whether the entity has remote access
    pub enabled: Option<bool>,
    /// Whether the entity has remote admin access
    pub admin: Option<bool>,
}

impl RemoteAccess {
    /// Resolved `enabled` value; an undeclared field counts as `false`
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Resolved `admin` value; an undeclared field counts as `false`
    pub fn effective_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }
}

impl AccessRecord {
    /// Create an empty record for an entity
    pub fn new(identity: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            identity: identity.into(),
            entity_type,
            group_memberships: Vec::new(),
            escalation: EscalationAccess::default(),
            remote: RemoteAccess::default(),
            source_path: PathBuf::new(),
        }
    }
}
