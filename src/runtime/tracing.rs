//! # Observability & Tracing
//!
//! Structured logging for the demonstrations.
//!
//! ## What Gets Traced
//!
//! - **Adapter calls**: `Tool::use_tool` opens a span, logs the hand-off to the adapter
//!   and the outcome.
//! - **Delegation**: every decorator layer opens a `respond_to` span carrying the
//!   `layer` and `operation` fields, and logs whether it resolved the operation itself
//!   or forwarded it inward.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Progress only
//! RUST_LOG=info cargo run
//!
//! # Every forwarding step
//! RUST_LOG=debug cargo run
//!
//! # Only the decorator chain
//! RUST_LOG=pattern_recipe::decorator=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Asking a `UserProfileDecorator<LeapDecorator<UserDecorator<User>>>` for `full_name`
//! with `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG respond_to{operation="full_name" layer="UserProfileDecorator"}: Forwarding inward
//! DEBUG respond_to{operation="full_name" layer="UserProfileDecorator"}:respond_to{operation="full_name" layer="LeapDecorator"}: Forwarding inward
//! DEBUG ...:respond_to{operation="full_name" layer="UserDecorator"}: Resolved locally value=Text("John Doe")
//! ```

/// Initializes the tracing subscriber.
///
/// Verbosity is controlled by the `RUST_LOG` environment variable; nothing is
/// printed when it is unset. Module paths are hidden (`with_target(false)`) since
/// spans already name the layer.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
