#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **A Recipe for the Adapter and Decorator patterns in Rust.**
//!
//! This crate shows two classic object-oriented patterns expressed with traits
//! instead of runtime reflection. Both live side by side and never talk to each other.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Adapter: one name, many tools
//! A [`Hammer`](adapter::Hammer) swings, a [`Screwdriver`](adapter::Screwdriver) screws and a
//! [`Drill`](adapter::Drill) drills. The [`Tool`](adapter::Tool) client only knows `use_tool`.
//! Each tool gets its own adapter implementing [`UseTool`](adapter::UseTool), so adding a new
//! tool never touches existing adapters or the client.
//!
//! ### Decorator: wrap, add, forward
//! A [`User`](decorator::User) is wrapped by decorators that add operations like `full_name`
//! or `birth_year`. Everything a decorator does not define is forwarded to the object it wraps,
//! and decorators stack.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Forwarding is an explicit interface
//! Every layer implements [`Profile`](decorator::Profile). Decorators only describe *what they
//! add* through the [`Decorator`](decorator::Decorator) trait; one blanket impl writes the
//! forwarding table once for all of them.
//!
//! ### 2. Dynamic lookup still fails loudly
//! [`Profile::respond_to`](decorator::Profile::respond_to) resolves an operation by name through
//! the chain. An operation nobody defines yields
//! [`DecoratorError::UnsupportedOperation`](decorator::DecoratorError::UnsupportedOperation),
//! never a silent default.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields. See [`runtime::tracing`] for setup.
//!
//! ## 🗺️ Module Tour
//!
//! - [`adapter`]: tools, their adapters and the `Tool` client.
//! - [`decorator`]: the `User` subject, the decorators and their errors.
//! - [`runtime`]: tracing setup and the demonstrations run by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demonstrations with info logs
//! RUST_LOG=info cargo run
//!
//! # Watch every forwarding step
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod adapter;
pub mod decorator;
pub mod runtime;
