//! Shim naming.
//!
//! Base names are a pure function of where a script lives:
//! `family-tool-leaf` for plugin scripts, `family-app-leaf` otherwise, with an
//! optional `-v<version>` suffix. Collisions are resolved by appending `-2`,
//! `-3`, ... until the name is free both in the registry and among names
//! already handed out during this run.

use std::collections::HashSet;

/// Compute the deterministic base name for a script.
pub fn base_name(
    family: &str,
    app: &str,
    tool: Option<&str>,
    leaf: &str,
    version: &str,
    include_version: bool,
) -> String {
    let owner = tool.unwrap_or(app);
    let mut name = format!("{}-{}-{}", family, owner, leaf);
    if include_version && !version.is_empty() {
        name.push_str("-v");
        name.push_str(version);
    }
    name
}

/// Find the first free name starting from `base`.
///
/// `is_taken` is consulted for `base`, then `base-2`, `base-3`, ...
pub fn uniquify<F>(base: &str, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !is_taken(base) {
        return base.to_string();
    }

    let mut suffix = 2usize;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Hands out unique shim names for one run.
///
/// Remembers every name reserved so far, so two scripts with the same base
/// name never share a shim even when nothing has been written to the
/// registry yet (dry runs). A name is only reserved once its shim exists or
/// is planned; a failed registration leaves it free.
#[derive(Debug, Default)]
pub struct ShimNamer {
    reserved: HashSet<String>,
}

impl ShimNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// First free name derived from `base`, without reserving it.
    ///
    /// `registry_has` reports names that already exist in the live registry.
    pub fn next_name<F>(&self, base: &str, registry_has: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let name = uniquify(base, |candidate| {
            self.reserved.contains(candidate) || registry_has(candidate)
        });
        if name != base {
            tracing::debug!("Shim name '{}' taken, using '{}'", base, name);
        }
        name
    }

    /// Mark `name` as used for the rest of the run.
    pub fn reserve(&mut self, name: &str) {
        self.reserved.insert(name.to_string());
    }
}
