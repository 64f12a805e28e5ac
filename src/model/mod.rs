//! Data model for resolved access
//!
//! Entities are classified from their file path and normalized into
//! [`AccessRecord`] values. The record shape mirrors the definition
//! file format: a list of group memberships, escalation roles per
//! project, and a tri-state remote-access entitlement.

pub mod entity;
pub mod record;

pub use entity::{EntityType, IDENTITY_DOMAIN, classify, derive_identity};
pub use record::{AccessRecord, EscalationAccess, RemoteAccess, RoleMap};
