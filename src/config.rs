//! Command line and site configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::registry::{PackageConfig, PackageRegistry};

/// Command line configuration for Govanity.
#[derive(Debug, Clone, Parser)]
#[command(name = "govanity", version, about, long_about = None)]
pub struct Config {
    /// Site configuration file
    #[arg(default_value = "site.toml")]
    pub site: PathBuf,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Site configuration loaded from the TOML file.
///
/// Consumed read-only by the request handlers; the package list becomes the
/// boot-time registry and is never reloaded or mutated while the process
/// runs.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Avatar image URL shown on the index page.
    pub avatar: String,

    /// Descriptive text shown on the index page.
    pub description: String,

    /// Ordered package records.
    #[serde(default)]
    pub packages: Vec<PackageConfig>,
}

impl SiteConfig {
    /// Loads and validates site configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the site configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site configuration: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid site configuration: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validates the configured package records.
    ///
    /// # Errors
    ///
    /// Returns error on empty `pkg` or `repo` values, on a `pkg` containing
    /// a slash, and on duplicate `pkg` values.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();

        for package in &self.packages {
            if package.pkg.is_empty() {
                bail!("Package record with empty pkg value");
            }
            if package.pkg.contains('/') {
                bail!(
                    "Package '{}' must be a single path segment",
                    package.pkg
                );
            }
            if package.repo.is_empty() {
                bail!("Package '{}' has an empty repo URL", package.pkg);
            }
            if !seen.insert(package.pkg.as_str()) {
                bail!("Duplicate package '{}' in configuration", package.pkg);
            }
        }

        Ok(())
    }

    /// Consumes the configuration into a registry.
    pub fn into_registry(self) -> PackageRegistry {
        PackageRegistry::new(self.packages)
    }
}
