use super::UseTool;
use tracing::{debug, instrument};

/// The client that only speaks the uniform [`UseTool`] interface.
///
/// `Tool` never learns which tool or adapter it holds. Any adapter works, including
/// ones defined outside this crate.
pub struct Tool {
    adapter: Box<dyn UseTool>,
}

impl Tool {
    pub fn new(adapter: impl UseTool + 'static) -> Self {
        Self {
            adapter: Box::new(adapter),
        }
    }

    /// Access the adapter this client delegates to.
    pub fn adapter(&self) -> &dyn UseTool {
        self.adapter.as_ref()
    }

    #[instrument(skip(self))]
    pub fn use_tool(&self) -> String {
        debug!("Forwarding to adapter");
        let outcome = self.adapter.use_tool();
        debug!(%outcome, "Adapter responded");
        outcome
    }
}

impl UseTool for Tool {
    fn use_tool(&self) -> String {
        Tool::use_tool(self)
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").finish_non_exhaustive()
    }
}
