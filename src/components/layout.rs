//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Inline stylesheet shared by every page.
///
/// Carries the base typography plus the README card and the `.highlight` /
/// `hljs-` class rules the markdown pipeline emits.
const STYLESHEET: &str = "\
body {
  font-family: Cantarell, sans-serif;
  font-size: 120%;
  max-width: 40em;
  margin: 0 auto;
  padding: 0 1em 1em 1em;
  line-height: 1.6;
}

header {
  text-align: center;
}

a {
  text-decoration: underline;
  font-weight: bold;
  cursor: pointer;
  color: inherit;
}

a:visited {
  color: inherit;
}

img.avatar {
  float: right;
  width: 9em;
  margin-left: 1em;
  border-radius: 15px;
}

.readme {
  clear: both;
  margin-top: 2em;
  border: 1px solid #d0d0d0;
  border-radius: 8px;
  padding: 0 1em;
}

.readme em {
  color: #555;
}

.highlight {
  background: #f6f8fa;
  border-radius: 6px;
  overflow-x: auto;
}

.highlight pre {
  margin: 0;
  padding: 0.8em;
}

.highlight code {
  font-size: 85%;
}

.hljs-keyword, .hljs-storage { color: #d73a49; }
.hljs-string { color: #032f62; }
.hljs-comment { color: #6a737d; }
.hljs-constant, .hljs-numeric { color: #005cc5; }
.hljs-entity, .hljs-function { color: #6f42c1; }
.hljs-support, .hljs-type { color: #22863a; }
.hljs-tag { color: #22863a; }
";

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and body structure across both
/// page shapes. The wrapper handles viewport configuration, charset, and the
/// inline stylesheet while the caller provides page-specific head metadata
/// and body content.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `head`: Page-specific head markup (meta tags), may be empty
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head)
                title { (title) }
                style { (maud::PreEscaped(STYLESHEET)) }
            }
            body {
                (body)
            }
        }
    }
}
