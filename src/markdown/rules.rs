//! Block rendering rules for blockquotes and fenced code.

use crate::highlight::{Highlighter, escape_html};

/// Top-level child of a blockquote, pre-rendered for the blockquote rule.
#[derive(Debug, Clone)]
pub enum QuoteChild {
    /// Plain paragraph; carries the inline rendering without the `<p>`
    /// wrapper so the rule decides how to wrap it.
    Paragraph { inline_html: String },

    /// Any other block kind (list, code, nested quote), fully rendered.
    Other { html: String },
}

/// Block rendering strategy passed into the markdown conversion routine.
///
/// A closed set of two overrides: everything else renders through the
/// standard parser. Modeled as plain function values so the renderer carries
/// no mutable rendering state.
pub struct RenderRules {
    /// Renders the contents of a blockquote.
    pub blockquote: fn(children: &[QuoteChild]) -> String,

    /// Renders a fenced code block from its resolved language and raw text.
    pub code_block: fn(highlighter: &Highlighter, language: &str, code: &str) -> String,
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            blockquote: aside_blockquote,
            code_block: highlighted_code_block,
        }
    }
}

/// Renders quoted content as italic asides.
///
/// Plain paragraphs become `<p><em>…</em></p>`. Structurally complex
/// children (lists, code, nested quotes) keep their ordinary rendering and
/// are concatenated unmodified, so nested structure is not forced into
/// italics. The `<blockquote>` wrapper itself is dropped.
pub fn aside_blockquote(children: &[QuoteChild]) -> String {
    let mut out = String::new();

    for child in children {
        match child {
            QuoteChild::Paragraph { inline_html } => {
                out.push_str("<p><em>");
                out.push_str(inline_html);
                out.push_str("</em></p>\n");
            }
            QuoteChild::Other { html } => out.push_str(html),
        }
    }

    out
}

/// Renders a fenced code block in the markup shape the stylesheet consumes.
///
/// The `.highlight` wrapper and the `language-` prefixed class on the inner
/// `<code>` element are a fixed contract with the highlighter's stylesheet;
/// changing either breaks styling silently.
pub fn highlighted_code_block(highlighter: &Highlighter, language: &str, code: &str) -> String {
    format!(
        "<div class=\"highlight\"><pre><code class=\"language-{lang}\">{body}</code></pre></div>\n",
        lang = escape_html(language),
        body = highlighter.highlight(code, language),
    )
}
