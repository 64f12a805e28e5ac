//! Access resolution engine
//!
//! The pipeline runs one way: the directory walker enumerates user
//! files, the parser normalizes each into an [`AccessRecord`]
//! (expanding custom role shorthand as it goes), and the inheritance
//! resolver folds group records into the user's effective access using
//! a per-domain policy:
//!
//! - escalations: set-union merge with dedup across all declared groups
//! - remote access: override-fill from the first declared group only
//!
//! These are two deliberate policies, not one policy applied twice —
//! escalations accumulate, entitlements fill gaps without ever
//! overriding an explicit user setting.

pub mod inherit;
pub mod merge;
pub mod parse;
pub mod roles;
pub mod walker;

pub use inherit::{inherit_escalations, inherit_remote_access};
pub use merge::merge_role_maps;
pub use parse::parse;
pub use roles::{CUSTOM_ROLE_PREFIX, expand_custom_roles};
pub use walker::{FailurePolicy, WalkOptions, resolve_all};
