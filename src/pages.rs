//! Page generation modules for the two document shapes
//!
//! This module organizes HTML page generators by page type: the index
//! listing enumerating all registry entries, and the single-package page
//! carrying the Go toolchain metadata plus the rendered README.

pub mod index;
pub mod package;
