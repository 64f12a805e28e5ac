//! Entity classification and identity derivation
//!
//! Definition files are classified by the directory they live in:
//! `users/`, `groups/` or `service-accounts/`. The canonical identity
//! (an email address) is derived deterministically from the file name,
//! so the file system is the single source of truth for who a
//! definition belongs to.

use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Domain appended to every derived identity
pub const IDENTITY_DOMAIN: &str = "ravelin.com";

/// Kind of entity a definition file describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A person; the only entity kind eligible for inheritance
    User,
    /// A workspace group users can inherit access from
    Group,
    /// A service account; recognized but not yet supported
    Service,
}

impl EntityType {
    /// Directory segment that holds definitions of this kind
    pub const fn directory(&self) -> &'static str {
        match self {
            EntityType::User => "users",
            EntityType::Group => "groups",
            EntityType::Service => "service-accounts",
        }
    }

    /// Whether this entity kind can inherit access from groups
    pub const fn supports_inheritance(&self) -> bool {
        matches!(self, EntityType::User)
    }

    /// Get the entity kind as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Group => "group",
            EntityType::Service => "service-account",
        }
    }

    /// Map a directory segment to an entity kind
    fn from_directory(segment: &str) -> Option<Self> {
        match segment {
            "users" => Some(EntityType::User),
            "groups" => Some(EntityType::Group),
            "service-accounts" => Some(EntityType::Service),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a definition file by its immediate parent directory.
///
/// Only the last directory component is consulted, so
/// `/mnt/iam/users/john_doe.yml` and `users/john_doe.yml` both classify
/// as [`EntityType::User`]. Any other parent directory name is an error.
pub fn classify(path: &Path) -> Result<EntityType, ClassifyError> {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .and_then(EntityType::from_directory)
        .ok_or_else(|| ClassifyError::UndeterminableType {
            path: path.to_path_buf(),
        })
}

/// Derive the canonical identity for a definition file.
///
/// The file name must be shaped `<stem>.<ext>` — exactly one dot. For
/// users the stem has underscores replaced with dots (`john_doe.yml`
/// becomes `john.doe@ravelin.com`); for groups the stem is prefixed
/// with `gcp-`. Service accounts have no identity yet.
pub fn derive_identity(path: &Path, entity: EntityType) -> Result<String, ClassifyError> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ClassifyError::InvalidFileName {
            entity,
            path: path.to_path_buf(),
        })?;

    let stem = match file_name.split('.').collect::<Vec<_>>().as_slice() {
        [stem, _ext] => (*stem).to_string(),
        _ => {
            return Err(ClassifyError::InvalidFileName {
                entity,
                path: path.to_path_buf(),
            });
        }
    };

    match entity {
        EntityType::User => Ok(format!("{}@{IDENTITY_DOMAIN}", stem.replace('_', "."))),
        EntityType::Group => Ok(format!("gcp-{stem}@{IDENTITY_DOMAIN}")),
        EntityType::Service => Err(ClassifyError::UnsupportedEntity {
            entity,
            path: path.to_path_buf(),
        }),
    }
}
