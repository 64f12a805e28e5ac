//! Declarative IAM access resolution
//!
//! Resolves a directory of per-user and per-group YAML access
//! definitions into a normalized, queryable access model.
//!
//! ## Features
//!
//! - **Entity classification** from the directory layout (`users/`,
//!   `groups/`, `service-accounts/`) with canonical identities derived
//!   from file names
//! - **Role normalization** expanding `custom/<name>` shorthand into
//!   fully qualified `projects/<project>/roles/<name>` identifiers
//! - **Group inheritance** with per-domain policy: set-union merge for
//!   escalations, override-fill from the primary group for remote access
//! - **Explicit failure policy** per walk: fail fast or skip and report
//!
//! ## Directory layout
//!
//! ```text
//! <root>/
//!   users/john_doe.yml        -> john.doe@ravelin.com
//!   groups/platform.yml       -> gcp-platform@ravelin.com
//!   service-accounts/...      (recognized, not yet supported)
//! ```
//!
//! ## Example definition
//!
//! ```yaml
//! gcp:
//!   groups: [platform]
//! gsudo:
//!   inherit: true
//!   escalations:
//!     some-project:
//!       - roles/owner
//!       - custom/deployer
//! twingate:
//!   enabled: true
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use ravelin_access::{WalkOptions, escalation_report, resolve_all};
//! use std::path::Path;
//!
//! let records = resolve_all(Path::new("./iam"), &WalkOptions::default())?;
//! let escalations = escalation_report(&records, None);
//! # Ok::<(), ravelin_access::AccessError>(())
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod resolver;

// Re-export main types
pub use error::{AccessError, ClassifyError, InheritError, ParseError, Result};
pub use model::{AccessRecord, EntityType, EscalationAccess, RemoteAccess, RoleMap};
pub use query::{RemoteAccessSummary, escalation_report, remote_access_report};
pub use resolver::{FailurePolicy, WalkOptions, resolve_all};
