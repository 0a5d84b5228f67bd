//! Paygrid Common - shared types and utilities
//!
//! This crate provides the error taxonomy used across all Paygrid crates.

pub mod error;

pub use error::PaygridError;
