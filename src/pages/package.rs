//! Package documentation page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::resolver::ResolvedImport;

/// Generates the documentation page for a resolved import path
///
/// The head carries the `go-import` and `go-source` meta tags the Go
/// toolchain and documentation crawlers consume; the tags are identical for
/// every subpath under the matched prefix. The body links human visitors to
/// the pkg.go.dev documentation and embeds the rendered README below when
/// one was fetched.
///
/// # Arguments
///
/// * `resolved`: Request-scoped import resolution
/// * `readme_html`: Rendered README body, or None when unavailable
///
/// # Returns
///
/// Complete HTML markup for the package page
pub fn generate(resolved: &ResolvedImport, readme_html: Option<&str>) -> Markup {
    page_wrapper(
        &resolved.import_path,
        html! {
            meta name="go-import" content=(resolved.go_import_content());
            meta name="go-source" content=(resolved.go_source_content());
        },
        html! {
            p {
                a href=(resolved.doc_url) { "Redirecting to documentation..." }
            }
            @if let Some(readme) = readme_html {
                @if !readme.is_empty() {
                    section class="readme" {
                        (PreEscaped(readme))
                    }
                }
            }
        },
    )
}
