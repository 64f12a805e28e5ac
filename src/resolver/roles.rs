//! Custom role expansion
//!
//! Escalation lists may reference project-scoped custom roles with the
//! shorthand `custom/<name>`. Before any inheritance runs, the
//! shorthand is expanded to the fully qualified
//! `projects/<project>/roles/<name>` form, using the project key the
//! entry was declared under.

use crate::model::RoleMap;

/// Shorthand prefix marking a project-scoped custom role
pub const CUSTOM_ROLE_PREFIX: &str = "custom/";

/// Expand `custom/<name>` shorthand roles in place.
///
/// All other role strings pass through unchanged. The expansion is a
/// fixed-prefix slice: a degenerate `custom/` entry with an empty
/// suffix expands to `projects/<project>/roles/` rather than failing —
/// the resolver is deliberately permissive here and leaves validation
/// to the IAM layer that consumes the roles.
pub fn expand_custom_roles(escalations: &mut RoleMap) {
    for (project, roles) in escalations.iter_mut() {
        for role in roles.iter_mut() {
            if let Some(suffix) = role.strip_prefix(CUSTOM_ROLE_PREFIX) {
                *role = format!("projects/{project}/roles/{suffix}");
            }
        }
    }
}
