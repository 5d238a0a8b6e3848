//! Markdown to HTML conversion with block-level overrides.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};

use super::rules::{QuoteChild, RenderRules};
use crate::highlight::{Highlighter, PLAINTEXT};

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Standard inline and block elements render through comrak unmodified. Two
/// block kinds are overridden via [`RenderRules`]: blockquotes and fenced
/// code blocks. The overrides are applied as a post-order rewrite of the
/// parsed AST, so they take effect at any nesting depth, and the rewritten
/// document is formatted once at the end.
///
/// Rendering tolerates empty input (empty output) and never fails on
/// malformed markdown; everything not overridden defers to comrak's own
/// recovery behavior.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: &'a Highlighter,
    rules: RenderRules,
}

/// Pending replacement for an overridden block node.
enum Replacement {
    /// Replacement HTML is already computed.
    Html(String),
    /// Blockquote contents still need per-child rendering.
    Quote,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options and the
    /// default block rules.
    ///
    /// Configures GFM extensions (tables, strikethrough, autolinks, task
    /// lists, footnotes), smart punctuation, and raw HTML rendering. Raw
    /// HTML output is required so the override rules can splice their
    /// markup back into the document.
    ///
    /// # Arguments
    ///
    /// * `highlighter`: Process-wide syntax highlighter, injected by
    ///   reference
    pub fn new(highlighter: &'a Highlighter) -> Self {
        Self::with_rules(highlighter, RenderRules::default())
    }

    /// Creates renderer with explicit block rendering rules.
    pub fn with_rules(highlighter: &'a Highlighter, rules: RenderRules) -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options: raw HTML must pass through for the rule output
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter,
            rules,
        }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content, possibly empty
    ///
    /// # Returns
    ///
    /// Rendered HTML with overridden blockquote and fenced code rendering
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting fails; arbitrary markdown input
    /// itself never errors
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        self.apply_rules(root)?;

        self.render_node(root)
    }

    /// Rewrites overridden block nodes, deepest first.
    ///
    /// Children are processed before their parents so that a blockquote
    /// containing an already-overridden node sees it as ordinary rendered
    /// HTML rather than re-applying the rule.
    fn apply_rules<'b>(&self, node: &'b AstNode<'b>) -> Result<()> {
        let children: Vec<_> = node.children().collect();
        for child in children {
            self.apply_rules(child)?;
        }

        let replacement = match &node.data.borrow().value {
            NodeValue::CodeBlock(block) if block.fenced => {
                let language = resolve_language(&block.info);
                Some(Replacement::Html((self.rules.code_block)(
                    self.highlighter,
                    &language,
                    &block.literal,
                )))
            }
            NodeValue::BlockQuote => Some(Replacement::Quote),
            _ => None,
        };

        let Some(replacement) = replacement else {
            return Ok(());
        };

        let html = match replacement {
            Replacement::Html(html) => html,
            Replacement::Quote => self.render_quote_children(node)?,
        };

        for child in node.children().collect::<Vec<_>>() {
            child.detach();
        }
        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: html,
        });

        Ok(())
    }

    /// Renders blockquote children and applies the blockquote rule.
    fn render_quote_children<'b>(&self, quote: &'b AstNode<'b>) -> Result<String> {
        let mut children = Vec::new();

        for child in quote.children() {
            let is_paragraph = matches!(child.data.borrow().value, NodeValue::Paragraph);
            let html = self.render_node(child)?;

            if is_paragraph {
                children.push(QuoteChild::Paragraph {
                    inline_html: strip_paragraph_wrapper(&html),
                });
            } else {
                children.push(QuoteChild::Other { html });
            }
        }

        Ok((self.rules.blockquote)(&children))
    }

    /// Formats a single node subtree as HTML.
    fn render_node<'b>(&self, node: &'b AstNode<'b>) -> Result<String> {
        let mut output = Vec::new();
        format_html(node, &self.options, &mut output)
            .context("Failed to format markdown as HTML")?;
        String::from_utf8(output).context("Markdown renderer produced invalid UTF8")
    }
}

/// Resolves the fence info string to a language tag.
///
/// Takes the first whitespace-separated word; absent or empty tags default
/// to the plaintext classification.
fn resolve_language(info: &str) -> String {
    let tag = info.split_whitespace().next().unwrap_or_default();

    if tag.is_empty() {
        PLAINTEXT.to_string()
    } else {
        tag.to_string()
    }
}

/// Strips the `<p>` wrapper from a formatted paragraph.
fn strip_paragraph_wrapper(html: &str) -> String {
    let trimmed = html.trim_end();

    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}
