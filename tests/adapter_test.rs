use pattern_recipe::adapter::{
    Drill, DrillAdapter, Hammer, HammerAdapter, Screwdriver, ScrewdriverAdapter, Tool, UseTool,
};
use pattern_recipe::tool_adapter;

/// A tool kind this crate knows nothing about.
#[derive(Debug, Clone, Copy)]
pub struct Saw;

impl Saw {
    pub fn cut(&self) -> String {
        "using saw".to_string()
    }
}

tool_adapter!(#[derive(Debug)] Saw => cut);

/// A hand-written adapter, without the macro.
struct Wrench;

impl Wrench {
    fn turn(&self) -> String {
        "using wrench".to_string()
    }
}

struct WrenchAdapter {
    wrench: Wrench,
}

impl UseTool for WrenchAdapter {
    fn use_tool(&self) -> String {
        self.wrench.turn()
    }
}

/// Every built-in tool answers through the same client operation.
#[test]
fn test_tool_client_uses_every_adapter() {
    let hammer = Tool::new(HammerAdapter::new(Hammer));
    let screwdriver = Tool::new(ScrewdriverAdapter::new(Screwdriver));
    let drill = Tool::new(DrillAdapter::new(Drill));

    assert_eq!(hammer.use_tool(), "using hammer");
    assert_eq!(screwdriver.use_tool(), "using screwdriver");
    assert_eq!(drill.use_tool(), "using drill");
}

/// The client result is byte-identical to calling the native action directly.
#[test]
fn test_client_matches_native_action() {
    let hammer_adapter = HammerAdapter::new(Hammer);
    let direct = hammer_adapter.hammer().swing();
    assert_eq!(Tool::new(hammer_adapter).use_tool(), direct);

    let screwdriver_adapter = ScrewdriverAdapter::new(Screwdriver);
    let direct = screwdriver_adapter.screwdriver().screw();
    assert_eq!(Tool::new(screwdriver_adapter).use_tool(), direct);

    let drill_adapter = DrillAdapter::new(Drill);
    let direct = drill_adapter.drill().drill();
    assert_eq!(Tool::new(drill_adapter).use_tool(), direct);
}

/// Clients are interchangeable: a mixed collection is driven through one loop.
#[test]
fn test_clients_are_interchangeable() {
    let tools = vec![
        Tool::new(DrillAdapter::new(Drill)),
        Tool::new(HammerAdapter::new(Hammer)),
        Tool::new(SawAdapter::new(Saw)),
        Tool::new(WrenchAdapter { wrench: Wrench }),
    ];

    let outcomes: Vec<String> = tools.iter().map(|tool| tool.use_tool()).collect();
    assert_eq!(
        outcomes,
        ["using drill", "using hammer", "using saw", "using wrench"]
    );
}

/// New tool kinds plug into the existing client without touching it.
#[test]
fn test_new_tool_kind_needs_no_client_changes() {
    let saw_adapter = SawAdapter::new(Saw);
    assert_eq!(saw_adapter.saw().cut(), "using saw");

    let tool = Tool::new(saw_adapter);
    assert_eq!(tool.use_tool(), "using saw");
    assert_eq!(tool.adapter().use_tool(), "using saw");
}

/// A client is itself a `UseTool`, so it can be wrapped again.
#[test]
fn test_client_can_be_adapted_again() {
    let inner = Tool::new(HammerAdapter::new(Hammer));
    let outer = Tool::new(inner);
    assert_eq!(outer.use_tool(), "using hammer");
}
