//! # cteq
//!
//! Constant-time equality for secret byte strings.
//!
//! ## Usage
//!
//! ```
//! use cteq::prelude::*;
//!
//! let expected_tag = [0x8fu8; 32];
//! let received_tag = [0x8fu8; 32];
//!
//! assert_eq!(constant_time_bytes_eq(&expected_tag, &received_tag), 1);
//! assert!(validate::bytes_equal("HMAC tag", &received_tag, &expected_tag).is_ok());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`cteq-internal`]: the comparison routine and its `subtle` adapters
//! - [`cteq-api`]: error type and verification helpers
//!
//! ## Guarantee
//!
//! At equal lengths the comparison reads every byte of both inputs and
//! never branches on their contents. Lengths are public: inputs of
//! different lengths compare unequal immediately.

#![cfg_attr(not(feature = "std"), no_std)]

pub use cteq_api as api;
pub use cteq_internal as internal;

pub use cteq_internal::{constant_time_bytes_eq, constant_time_bytes_eq_n};

/// Common imports for cteq users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{validate, Error, Result, ResultExt};

    // Re-export the comparison and its adapters
    pub use crate::internal::{
        constant_time_bytes_eq, constant_time_bytes_eq_n, ct_eq, ct_eq_choice, ConstantTimeEquals,
    };
}
