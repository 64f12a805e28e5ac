//! Role map merging
//!
//! Set-union merge over per-project role lists, used when a user
//! inherits escalations from their groups. Merging never mutates its
//! inputs and is commutative and idempotent in set terms.

use crate::model::RoleMap;

/// Merge two role maps into a new map.
///
/// The result contains the union of keys from both inputs; for each
/// key the value is the deduplicated union of both role lists. Lists
/// are sorted so repeated runs produce identical output.
pub fn merge_role_maps(dst: &RoleMap, src: &RoleMap) -> RoleMap {
    let mut merged = RoleMap::new();

    for key in dst.keys().chain(src.keys()) {
        if merged.contains_key(key) {
            continue;
        }

        let mut combined: Vec<String> = Vec::new();
        if let Some(roles) = dst.get(key) {
            combined.extend(roles.iter().cloned());
        }
        if let Some(roles) = src.get(key) {
            combined.extend(roles.iter().cloned());
        }
        combined.sort();
        combined.dedup();

        merged.insert(key.clone(), combined);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role_map(entries: &[(&str, &[&str])]) -> RoleMap {
        entries
            .iter()
            .map(|(project, roles)| {
                (
                    (*project).to_string(),
                    roles.iter().map(|r| (*r).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_union_of_disjoint_keys() {
        let a = role_map(&[("project1", &["roles/owner"])]);
        let b = role_map(&[("project2", &["roles/editor"])]);

        let merged = merge_role_maps(&a, &b);
        assert_eq!(merged["project1"], vec!["roles/owner"]);
        assert_eq!(merged["project2"], vec!["roles/editor"]);
    }

    #[test]
    fn test_shared_key_dedups() {
        let a = role_map(&[("project1", &["roles/owner", "roles/editor"])]);
        let b = role_map(&[("project1", &["roles/owner", "roles/bigquery.admin"])]);

        let merged = merge_role_maps(&a, &b);
        assert_eq!(
            merged["project1"],
            vec!["roles/bigquery.admin", "roles/editor", "roles/owner"]
        );
    }

    #[test]
    fn test_commutative_in_set_terms() {
        let a = role_map(&[("p", &["roles/owner", "roles/editor"]), ("q", &["roles/x"])]);
        let b = role_map(&[("p", &["roles/viewer"]), ("r", &["roles/y"])]);

        // sorted output makes the set equality an exact equality
        assert_eq!(merge_role_maps(&a, &b), merge_role_maps(&b, &a));
    }

    #[test]
    fn test_idempotent() {
        let a = role_map(&[("p", &["roles/owner", "roles/owner", "roles/editor"])]);
        let merged = merge_role_maps(&a, &a);
        assert_eq!(merged["p"], vec!["roles/editor", "roles/owner"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let a = role_map(&[("p", &["roles/owner", "roles/owner"])]);
        let b = role_map(&[("p", &["roles/editor"])]);
        let _ = merge_role_maps(&a, &b);

        // declared duplicates in the input survive the merge call
        assert_eq!(a["p"], vec!["roles/owner", "roles/owner"]);
        assert_eq!(b["p"], vec!["roles/editor"]);
    }

    #[test]
    fn test_empty_inputs() {
        let a = RoleMap::new();
        let b = role_map(&[("p", &["roles/owner"])]);
        assert_eq!(merge_role_maps(&a, &b), b);
        assert!(merge_role_maps(&a, &a).is_empty());
    }
}
