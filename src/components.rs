//! Reusable HTML components for page composition.

pub mod layout;
