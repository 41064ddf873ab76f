//! Error types for unitctl.
//!
//! Provides the closed sentinel error set using thiserror.

mod types;

pub use types::*;
