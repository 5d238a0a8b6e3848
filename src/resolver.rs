//! Import path resolution for the Go toolchain.
//!
//! Derives the `go-import` and `go-source` meta tag contents and the
//! documentation redirect target from a registry record and the inbound
//! request's host and path. Both content strings follow space-separated
//! grammars the Go toolchain parses; any deviation breaks `go get`
//! resolution silently, so the formats here are exact.

use crate::registry::{PackageConfig, PackageRegistry};

/// Version control system advertised in `go-import` tags.
const VCS_KIND: &str = "git";

/// Resolution failure for a requested import path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No registry record matches the first path segment of the request.
    #[error("Unknown package")]
    UnknownPackage,
}

/// Request-scoped resolution of an import path to repository metadata.
///
/// Built per request from the registry and the request host/path; the meta
/// tag contents are identical for every subpath under the matched prefix,
/// while the documentation URL preserves the full request path so deep
/// links resolve to the correct anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    /// Full import path, `{host}/{pkg}`.
    pub import_path: String,

    /// Canonical repository URL from the matched record.
    pub repo_url: String,

    /// Documentation target, `https://pkg.go.dev/{host}/{request path}`.
    pub doc_url: String,
}

impl ResolvedImport {
    /// Resolves a request path against the registry.
    ///
    /// Matches the first path segment exactly against configured `pkg`
    /// values; subpath segments beyond the match are preserved verbatim in
    /// the documentation URL.
    ///
    /// # Arguments
    ///
    /// * `registry`: Boot-time package registry
    /// * `host`: Request hostname, without port
    /// * `path`: Request path beginning with `/`
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownPackage` when no record matches.
    pub fn resolve(
        registry: &PackageRegistry,
        host: &str,
        path: &str,
    ) -> Result<Self, ResolveError> {
        let trimmed = path.trim_start_matches('/');
        let pkg = trimmed.split('/').next().unwrap_or_default();

        let config = registry.find(pkg).ok_or(ResolveError::UnknownPackage)?;

        Ok(Self::from_config(config, host, trimmed))
    }

    /// Builds the resolution for an already-matched record.
    ///
    /// # Arguments
    ///
    /// * `config`: Matched registry record
    /// * `host`: Request hostname, without port
    /// * `path`: Request path with the leading slash stripped
    pub fn from_config(config: &PackageConfig, host: &str, path: &str) -> Self {
        Self {
            import_path: format!("{}/{}", host, config.pkg),
            repo_url: config.repo.clone(),
            doc_url: format!("https://pkg.go.dev/{}/{}", host, path),
        }
    }

    /// Content for the `go-import` meta tag.
    ///
    /// Two-field grammar: `{import path} {vcs} {repo url}`.
    pub fn go_import_content(&self) -> String {
        format!("{} {} {}", self.import_path, VCS_KIND, self.repo_url)
    }

    /// Content for the `go-source` meta tag.
    ///
    /// Four-field grammar mapping the import path to browsable directory,
    /// file, and line URLs. The `{/dir}`, `{file}`, and `{line}` tokens are
    /// literal placeholders substituted by documentation tooling, never by
    /// this server.
    pub fn go_source_content(&self) -> String {
        format!(
            "{import} {repo} {repo}/tree/main{{/dir}} {repo}/blob/main{{/dir}}/{{file}}#L{{line}}",
            import = self.import_path,
            repo = self.repo_url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PackageConfig;

    fn registry() -> PackageRegistry {
        PackageRegistry::new(vec![PackageConfig {
            pkg: "mylib".to_string(),
            repo: "https://github.com/owner/mylib".to_string(),
            readme: None,
        }])
    }

    #[test]
    fn test_resolve_root_package_path() {
        // Arrange
        let registry = registry();

        // Act
        let resolved = ResolvedImport::resolve(&registry, "example.com", "/mylib")
            .expect("Configured package should resolve");

        // Assert
        assert_eq!(resolved.import_path, "example.com/mylib");
        assert_eq!(resolved.repo_url, "https://github.com/owner/mylib");
        assert_eq!(resolved.doc_url, "https://pkg.go.dev/example.com/mylib");
    }

    #[test]
    fn test_resolve_preserves_subpath_in_doc_url() {
        // Arrange
        let registry = registry();

        // Act
        let resolved = ResolvedImport::resolve(&registry, "example.com", "/mylib/sub/pkg")
            .expect("Subpath should resolve to the same record");

        // Assert
        assert_eq!(
            resolved.doc_url,
            "https://pkg.go.dev/example.com/mylib/sub/pkg"
        );
        assert_eq!(
            resolved.import_path, "example.com/mylib",
            "Import path stays at the matched prefix regardless of depth"
        );
    }

    #[test]
    fn test_resolve_unknown_package() {
        // Arrange
        let registry = registry();

        // Act
        let result = ResolvedImport::resolve(&registry, "example.com", "/unknown/pkg");

        // Assert
        assert_eq!(result, Err(ResolveError::UnknownPackage));
        assert_eq!(
            ResolveError::UnknownPackage.to_string(),
            "Unknown package",
            "User-facing message is fixed"
        );
    }

    #[test]
    fn test_go_import_content_grammar() {
        // Arrange
        let registry = registry();
        let resolved =
            ResolvedImport::resolve(&registry, "example.com", "/mylib/internal").unwrap();

        // Act
        let content = resolved.go_import_content();

        // Assert
        assert_eq!(
            content,
            "example.com/mylib git https://github.com/owner/mylib"
        );
    }

    #[test]
    fn test_go_source_content_keeps_literal_placeholders() {
        // Arrange
        let registry = registry();
        let resolved = ResolvedImport::resolve(&registry, "example.com", "/mylib").unwrap();

        // Act
        let content = resolved.go_source_content();

        // Assert
        assert_eq!(
            content,
            "example.com/mylib https://github.com/owner/mylib \
             https://github.com/owner/mylib/tree/main{/dir} \
             https://github.com/owner/mylib/blob/main{/dir}/{file}#L{line}"
        );
        assert_eq!(
            content.split(' ').count(),
            4,
            "go-source content is a four-field grammar"
        );
    }

    #[test]
    fn test_doc_url_has_no_double_slashes() {
        // Arrange
        let registry = registry();

        // Act
        let resolved = ResolvedImport::resolve(&registry, "example.com", "/mylib/v2").unwrap();

        // Assert
        assert!(
            !resolved.doc_url["https://".len()..].contains("//"),
            "Doc URL must not contain double slashes: {}",
            resolved.doc_url
        );
    }
}
