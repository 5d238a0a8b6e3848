//! Markdown rendering for README documents.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and overridable block
//! rendering rules for blockquotes and fenced code.

mod renderer;
mod rules;

pub use renderer::MarkdownRenderer;
pub use rules::{QuoteChild, RenderRules};
