//! Index page listing all configured packages

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::registry::PackageRegistry;

/// Generates the index page for the serving host
///
/// Lists every registry record, in configuration order, as a link to its
/// documentation on pkg.go.dev. The avatar and description come from the
/// site configuration.
///
/// # Arguments
///
/// * `host`: Serving hostname, without port
/// * `avatar`: Avatar image URL
/// * `description`: Descriptive text shown next to the avatar
/// * `registry`: Boot-time package registry
///
/// # Returns
///
/// Complete HTML markup for the index page
pub fn generate(
    host: &str,
    avatar: &str,
    description: &str,
    registry: &PackageRegistry,
) -> Markup {
    let title = format!("{} Go Packages", host);

    page_wrapper(
        &title,
        html! {},
        html! {
            header {
                h1 { (host) }
            }
            p {
                img class="avatar" src=(avatar);
                (description)
            }
            hr;
            div {
                @for package in registry.iter() {
                    @let import_path = format!("{}/{}", host, package.pkg);
                    @let site = format!("https://pkg.go.dev/{}", import_path);
                    p {
                        a href=(site) { (import_path) }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PackageConfig, PackageRegistry};

    fn registry() -> PackageRegistry {
        PackageRegistry::new(vec![
            PackageConfig {
                pkg: "alpha".to_string(),
                repo: "https://github.com/owner/alpha".to_string(),
                readme: None,
            },
            PackageConfig {
                pkg: "beta".to_string(),
                repo: "https://github.com/owner/beta".to_string(),
                readme: None,
            },
        ])
    }

    #[test]
    fn test_index_page_lists_all_packages() {
        // Arrange
        let registry = registry();

        // Act
        let html_string = generate(
            "example.com",
            "https://example.com/avatar.png",
            "Packages by example.com",
            &registry,
        )
        .into_string();

        // Assert
        assert!(
            html_string.contains("href=\"https://pkg.go.dev/example.com/alpha\""),
            "Should link first package: {}",
            html_string
        );
        assert!(
            html_string.contains("href=\"https://pkg.go.dev/example.com/beta\""),
            "Should link second package: {}",
            html_string
        );
        assert!(html_string.contains("example.com/alpha"));
    }

    #[test]
    fn test_index_page_preserves_registry_order() {
        // Arrange
        let registry = registry();

        // Act
        let html_string = generate("example.com", "", "", &registry).into_string();

        // Assert
        let alpha = html_string.find("example.com/alpha").unwrap();
        let beta = html_string.find("example.com/beta").unwrap();
        assert!(alpha < beta, "Entries keep configuration order");
    }

    #[test]
    fn test_index_page_shows_avatar_and_description() {
        // Arrange
        let registry = registry();

        // Act
        let html_string = generate(
            "example.com",
            "https://example.com/avatar.png",
            "Hand-built Go tools",
            &registry,
        )
        .into_string();

        // Assert
        assert!(html_string.contains("src=\"https://example.com/avatar.png\""));
        assert!(html_string.contains("Hand-built Go tools"));
        assert!(
            html_string.contains("<title>example.com Go Packages</title>"),
            "{}",
            html_string
        );
    }
}
