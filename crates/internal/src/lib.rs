//! Internal constant-time utilities for the cteq library
//!
//! This crate holds the comparison primitive itself. It is `no_std`, never
//! allocates and never logs.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{
    constant_time_bytes_eq, constant_time_bytes_eq_n, ct_eq, ct_eq_choice, ConstantTimeEquals,
};
