//! Syntax highlighting with syntect.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Language classification applied when no tag is given or the tag is
/// unrecognized. Produces no token coloring.
pub const PLAINTEXT: &str = "plaintext";

/// Syntax highlighter over syntect's built-in language definitions.
///
/// The syntax set is loaded once at startup and the value is injected by
/// reference wherever highlighting is needed; it is immutable afterwards.
/// Highlighting is a total transform: unknown languages and internal
/// failures fall back to escaped plain text instead of erroring.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with the default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code as HTML with span-level token classes.
    ///
    /// Uses ClassedHTMLGenerator to produce CSS class names instead of
    /// inline styles. The class prefix is "hljs-" to match the highlight.js
    /// conventions the stylesheet targets.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `language`: Language identifier (go, rust, python, etc)
    ///
    /// # Returns
    ///
    /// HTML string with `<span class="hljs-*">` tags, or escaped plain text
    /// when the language is unknown or highlighting fails
    pub fn highlight(&self, code: &str, language: &str) -> String {
        if code.is_empty() {
            return String::new();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return escape_html(code);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            if generator
                .parse_html_for_line_which_includes_newline(line)
                .is_err()
            {
                return escape_html(code);
            }
        }

        generator.finalize()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
