//! Definition file parsing
//!
//! Turns the raw bytes of one YAML definition file into a normalized
//! [`AccessRecord`]. The file format has three optional top-level
//! sections:
//!
//! ```yaml
//! gcp:
//!   groups:          # workspace groups the user belongs to
//!     - platform
//! gsudo:
//!   inherit: true    # inherit group escalations
//!   escalations:     # project -> escalation roles
//!     some-project:
//!       - roles/owner
//!       - custom/deployer
//! twingate:
//!   enabled: true
//!   admin: false
//! ```
//!
//! Unknown keys are ignored and missing sections default to empty.
//! Custom role shorthand is expanded before the record is returned, so
//! no `custom/<name>` entry ever reaches the inheritance resolver.
//! Duplicate roles declared within a single file are preserved as-is;
//! only merging deduplicates.

use crate::error::ParseError;
use crate::model::{AccessRecord, EscalationAccess, RemoteAccess, RoleMap, classify, derive_identity};
use crate::resolver::roles::expand_custom_roles;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Raw shape of a definition file, prior to normalization
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDefinition {
    gcp: RawGcpSection,
    gsudo: RawEscalationSection,
    twingate: RawRemoteSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGcpSection {
    groups: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEscalationSection {
    escalations: RoleMap,
    inherit: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRemoteSection {
    enabled: Option<bool>,
    admin: Option<bool>,
}

/// Parse one definition file into an [`AccessRecord`].
///
/// Fails if the content is empty or not valid YAML, or if the path
/// cannot be classified into an entity directory or does not yield a
/// valid identity.
pub fn parse(bytes: &[u8], path: &Path) -> Result<AccessRecord, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty {
            path: path.to_path_buf(),
        });
    }

    let entity_type = classify(path)?;
    let identity = derive_identity(path, entity_type)?;

    let raw: RawDefinition =
        serde_yaml::from_slice(bytes).map_err(|source| ParseError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut escalations = raw.gsudo.escalations;
    expand_custom_roles(&mut escalations);

    // groups cannot belong to other groups; memberships declared on
    // anything but a user are dropped
    let group_memberships = if entity_type.supports_inheritance() {
        raw.gcp.groups
    } else {
        if !raw.gcp.groups.is_empty() {
            debug!(
                identity = %identity,
                entity = %entity_type,
                "Ignoring group memberships declared on a non-user entity"
            );
        }
        Vec::new()
    };

    Ok(AccessRecord {
        identity,
        entity_type,
        group_memberships,
        escalation: EscalationAccess {
            escalations,
            inherit: raw.gsudo.inherit,
        },
        remote: RemoteAccess {
            enabled: raw.twingate.enabled,
            admin: raw.twingate.admin,
        },
        source_path: path.to_path_buf(),
    })
}
