//! Directory walking and per-user resolution
//!
//! Walks `<root>/users`, parses every YAML definition found there, and
//! resolves each user's effective access by folding in their group
//! records. Group files under `<root>/groups` are read on demand and
//! cached for the duration of one run; they are never enumerated up
//! front.
//!
//! All paths are threaded explicitly from the root the caller supplies
//! — nothing depends on the process working directory.

use crate::error::{AccessError, Result};
use crate::model::AccessRecord;
use crate::resolver::inherit::{inherit_escalations, inherit_remote_access};
use crate::resolver::parse::parse;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Definition file extensions recognized by the walker
const DEFINITION_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// How a per-user resolution failure affects the rest of the walk.
///
/// Non-YAML files and directories are skipped under either policy;
/// this only governs files that were expected to resolve and did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Any single user's failure aborts the whole run (the
    /// conservative default)
    #[default]
    Fatal,
    /// Failures are logged at `warn` and the user is omitted from the
    /// result; the walk continues
    SkipAndReport,
}

/// Options controlling a resolution run
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Fatal-vs-continue behavior for per-user failures
    pub failure_policy: FailurePolicy,
    /// Cancels the walk between per-user resolution steps
    pub cancel: CancellationToken,
}

/// Per-run cache of parsed group records, keyed by group name.
///
/// Built incrementally and read-only once populated; a group file is
/// read at most once per run no matter how many users reference it.
struct GroupCache {
    root: PathBuf,
    records: HashMap<String, AccessRecord>,
}

impl GroupCache {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            records: HashMap::new(),
        }
    }

    /// Look up a group record by name, reading and parsing its file on
    /// first use. Tries `<root>/groups/<name>.yml` first, then `.yaml`.
    fn get(&mut self, name: &str) -> Result<&AccessRecord> {
        if !self.records.contains_key(name) {
            let record = self
                .load(name)
                .map_err(|source| AccessError::group(name, source))?;
            self.records.insert(name.to_string(), record);
        }
        Ok(&self.records[name])
    }

    fn load(&self, name: &str) -> Result<AccessRecord> {
        let groups_dir = self.root.join("groups");
        let mut candidate = groups_dir.join(format!("{name}.yml"));
        if !candidate.exists() {
            candidate = groups_dir.join(format!("{name}.yaml"));
        }

        let bytes = fs::read(&candidate).map_err(|e| AccessError::io(&candidate, e))?;
        let record = parse(&bytes, &candidate)?;
        debug!(group = %record.identity, path = %candidate.display(), "Cached group record");
        Ok(record)
    }
}

/// Resolve every user definition under `<root>/users`.
///
/// Each user is parsed, their declared groups are looked up under
/// `<root>/groups`, and both inheritance domains are applied. The
/// result order follows directory enumeration order, which is not
/// guaranteed stable across platforms — callers must not depend on it.
pub fn resolve_all(root: &Path, options: &WalkOptions) -> Result<Vec<AccessRecord>> {
    let users_dir = root.join("users");
    let entries = fs::read_dir(&users_dir).map_err(|e| AccessError::io(&users_dir, e))?;

    let mut cache = GroupCache::new(root);
    let mut resolved = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| AccessError::io(&users_dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }
        if !is_definition_file(&path) {
            info!(path = %path.display(), "Skipping non-YAML file");
            continue;
        }

        if options.cancel.is_cancelled() {
            return Err(AccessError::Cancelled);
        }

        match resolve_user(&path, &mut cache) {
            Ok(record) => resolved.push(record),
            Err(err) => match options.failure_policy {
                FailurePolicy::Fatal => return Err(err),
                FailurePolicy::SkipAndReport => {
                    warn!(path = %path.display(), error = %err, "Skipping unresolvable user file");
                }
            },
        }
    }

    Ok(resolved)
}

/// Resolve one user file: parse, look up groups, apply inheritance
fn resolve_user(path: &Path, cache: &mut GroupCache) -> Result<AccessRecord> {
    let bytes = fs::read(path).map_err(|e| AccessError::io(path, e))?;
    let mut user = parse(&bytes, path)?;

    let mut groups = Vec::with_capacity(user.group_memberships.len());
    for name in &user.group_memberships {
        groups.push(cache.get(name)?.clone());
    }

    inherit_escalations(&mut user, &groups)?;
    inherit_remote_access(&mut user, groups.first())?;

    debug!(
        user = %user.identity,
        groups = user.group_memberships.len(),
        "Resolved user access"
    );
    Ok(user)
}

fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DEFINITION_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_definition_file() {
        assert!(is_definition_file(Path::new("users/john_doe.yml")));
        assert!(is_definition_file(Path::new("users/john_doe.yaml")));
        assert!(!is_definition_file(Path::new("users/README.md")));
        assert!(!is_definition_file(Path::new("users/john_doe")));
    }

    #[test]
    fn test_missing_users_directory_is_io_error() {
        let err = resolve_all(Path::new("/nonexistent-iam-root"), &WalkOptions::default())
            .unwrap_err();
        assert!(matches!(err, AccessError::Io { .. }));
    }
}
