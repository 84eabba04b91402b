//! Builder API for ergonomic state manager construction.
//!
//! This module provides a fluent builder for managers and macros for
//! declaring state and transition identifiers with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateManagerBuilder;
