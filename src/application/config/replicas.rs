//! Indirect resolution of read-replica database URLs.
//!
//! The replica variable does not hold URLs directly: it holds a
//! comma-separated list of names of other environment variables, each of
//! which holds one URL. The indirection decouples the replica-pool role from
//! the concrete values.

use std::collections::HashMap;

use super::csv::csv_to_tokens;

/// Resolve the replica URLs configured under `key` in `env`.
///
/// Returns `None` when `key` is unset or when none of the indirection names
/// it lists resolve to a value: a missing replica pool is a valid,
/// silently-degraded operating mode, not an error. Names that fail to
/// resolve are dropped without aborting the rest, so a partially
/// misconfigured list still yields its working entries. There is no
/// empty-but-present result.
pub fn resolve_read_replicas(env: &HashMap<String, String>, key: &str) -> Option<Vec<String>> {
    let raw = env.get(key)?;

    let resolved: Vec<String> = csv_to_tokens(Some(raw.as_str()))
        .iter()
        .filter_map(|name| {
            let value = env.get(name);
            if value.is_none() {
                tracing::debug!("Replica variable '{}' is not set; skipping", name);
            }
            value.cloned()
        })
        .collect();

    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}
