//! # Adapter
//!
//! Makes tools with differently-named actions comply with the single interface the
//! [`Tool`] client expects.
//!
//! # Main Components
//!
//! - [`UseTool`] - The uniform capability every adapter exposes
//! - [`Hammer`], [`Screwdriver`], [`Drill`] - Tools with their own native action
//! - [`HammerAdapter`], [`ScrewdriverAdapter`], [`DrillAdapter`] - One adapter per tool
//! - [`Tool`] - The client, which only ever calls `use_tool`
//!
//! # Adding a Tool
//!
//! A new tool kind needs a new type and a new adapter, nothing else. The
//! [`tool_adapter!`](crate::tool_adapter) macro writes the adapter for you:
//!
//! ```rust
//! use pattern_recipe::adapter::Tool;
//! use pattern_recipe::tool_adapter;
//!
//! pub struct Saw;
//!
//! impl Saw {
//!     pub fn cut(&self) -> String {
//!         "using saw".to_string()
//!     }
//! }
//!
//! tool_adapter!(Saw => cut);
//!
//! let tool = Tool::new(SawAdapter::new(Saw));
//! assert_eq!(tool.use_tool(), "using saw");
//! ```

pub mod adapters;
pub mod client;
pub mod tools;

pub use adapters::*;
pub use client::*;
pub use tools::*;

#[doc(hidden)]
pub use paste;

/// The uniform operation a [`Tool`] client relies on.
///
/// Implementors forward to whatever the wrapped object calls its action, and must
/// return exactly what that native action returns.
pub trait UseTool {
    fn use_tool(&self) -> String;
}
