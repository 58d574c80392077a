//! One adapter per tool.
//!
//! Each adapter owns exactly one tool, bound at construction. The binding cannot be
//! changed afterwards, only read back through the accessor named after the tool.

use super::{Drill, Hammer, Screwdriver};

/// Generates an adapter for a tool type and its native action.
///
/// `tool_adapter!(Hammer => swing)` expands to:
/// - `pub struct HammerAdapter { hammer: Hammer }`
/// - `HammerAdapter::new(hammer)` and the `HammerAdapter::hammer()` accessor
/// - `impl UseTool for HammerAdapter`, forwarding to `Hammer::swing`
///
/// The native action must take `&self` and return a `String`. A tool without that
/// method fails to compile, so a mis-wired adapter can never be constructed.
///
/// Attributes written before the tool name are applied to the generated struct.
#[macro_export]
macro_rules! tool_adapter {
    ($(#[$meta:meta])* $tool:ident => $native:ident) => {
        $crate::adapter::paste::paste! {
            #[doc = "Adapts [`" $tool "`] to the uniform `use_tool` operation."]
            $(#[$meta])*
            pub struct [<$tool Adapter>] {
                [<$tool:snake>]: $tool,
            }

            impl [<$tool Adapter>] {
                /// Binds the adapter to one tool for its whole lifetime.
                pub fn new([<$tool:snake>]: $tool) -> Self {
                    Self { [<$tool:snake>] }
                }

                /// The wrapped tool.
                pub fn [<$tool:snake>](&self) -> &$tool {
                    &self.[<$tool:snake>]
                }
            }

            impl $crate::adapter::UseTool for [<$tool Adapter>] {
                fn use_tool(&self) -> String {
                    self.[<$tool:snake>].$native()
                }
            }
        }
    };
}

tool_adapter!(#[derive(Debug, Clone)] Hammer => swing);
tool_adapter!(#[derive(Debug, Clone)] Screwdriver => screw);
tool_adapter!(#[derive(Debug, Clone)] Drill => drill);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::UseTool;

    #[test]
    fn accessor_returns_the_bound_tool() {
        let adapter = ScrewdriverAdapter::new(Screwdriver);
        assert_eq!(adapter.screwdriver(), &Screwdriver);
    }

    #[test]
    fn adapters_forward_to_native_action() {
        assert_eq!(HammerAdapter::new(Hammer).use_tool(), Hammer.swing());
        assert_eq!(ScrewdriverAdapter::new(Screwdriver).use_tool(), Screwdriver.screw());
        assert_eq!(DrillAdapter::new(Drill).use_tool(), Drill.drill());
    }
}
