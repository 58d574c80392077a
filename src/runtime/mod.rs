//! Runtime orchestration for the binary.
//!
//! # Main Components
//!
//! - [`Showcase`] - Runs the adapter and decorator demonstrations and collects their output
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod showcase;
pub mod tracing;

pub use self::showcase::*;
pub use self::tracing::*;
