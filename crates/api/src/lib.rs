//! Public API types for the cteq library
//!
//! This crate provides the error type shared by the workspace and the
//! verification helpers built on top of the constant-time comparison in
//! `cteq-internal`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use error::validate;
