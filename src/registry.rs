//! Package registry loaded once at startup.

use serde::Deserialize;

/// Configuration record for a single vanity import path.
///
/// Loaded from the site configuration file at process start and never
/// mutated afterwards. The `pkg` value is the import-path suffix under the
/// serving host (e.g. `mylib` for `example.com/mylib`).
#[derive(Debug, Clone, Deserialize)]
pub struct PackageConfig {
    /// Import path suffix, unique across the registry.
    pub pkg: String,

    /// Canonical repository URL (e.g. `https://github.com/owner/mylib`).
    pub repo: String,

    /// Optional URL of a fetchable raw markdown README.
    pub readme: Option<String>,
}

/// Read-only lookup table of configured packages.
///
/// Lookup matches the first path segment of a request exactly; deeper
/// subpaths resolve to the same record. Iteration preserves the order the
/// records were configured in.
#[derive(Debug, Clone)]
pub struct PackageRegistry {
    packages: Vec<PackageConfig>,
}

impl PackageRegistry {
    /// Creates registry from configured package records.
    pub fn new(packages: Vec<PackageConfig>) -> Self {
        Self { packages }
    }

    /// Looks up a package by exact import-path suffix.
    ///
    /// # Arguments
    ///
    /// * `pkg`: First path segment of the request (no slashes)
    ///
    /// # Returns
    ///
    /// Matching record, or None when no configured `pkg` equals the segment
    pub fn find(&self, pkg: &str) -> Option<&PackageConfig> {
        self.packages.iter().find(|p| p.pkg == pkg)
    }

    /// Iterates records in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageConfig> {
        self.packages.iter()
    }

    /// Number of configured packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the registry has no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
