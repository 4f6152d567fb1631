//! Domain model for jprof
//!
//! Core error types shared by the validator and the binary.

pub mod errors;

pub use errors::ValidationError;
