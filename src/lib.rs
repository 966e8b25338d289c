//! civet - CVS history and status model
//!
//! Turns the text cvs prints into a navigable model for editor
//! integrations.
//!
//! This library provides:
//! - [`cvs`]: cvs command execution, output parsing and branch-aware history
//! - [`model`]: Domain models
//! - [`scm`]: Resource groups, refresh scheduling and per-workspace state

pub mod cvs;
pub mod model;
pub mod scm;
