//! Common test utilities for integration tests.
//!
//! This module provides a scripted cvs runner and helpers for laying out
//! a fake cvs working copy in a temporary directory.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod checkout;
pub mod scripted;

pub use checkout::Checkout;
pub use scripted::{ScriptedRunner, log_output};
