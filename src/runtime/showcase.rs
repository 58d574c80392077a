use crate::adapter::{
    Drill, DrillAdapter, Hammer, HammerAdapter, Screwdriver, ScrewdriverAdapter, Tool,
};
use crate::decorator::{
    BirthYear, DecoratorError, LeapDecorator, Profile, User, UserDecorator, UserProfileDecorator,
    Value,
};
use tracing::{info, info_span};

/// Operations the decorator demonstration resolves by name through the full chain.
///
/// `last_name` is defined on none of the decorators and must come from the subject.
pub const CHAIN_OPERATIONS: [&str; 5] =
    ["full_name", "birth_year", "is_leap_year", "name", "last_name"];

/// Runs both demonstrations and keeps what they produced.
///
/// # Example
///
/// ```rust
/// use pattern_recipe::runtime::Showcase;
///
/// let showcase = Showcase::run().unwrap();
/// assert_eq!(showcase.tools, ["using hammer", "using screwdriver", "using drill"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    /// What each tool client reported, in order: hammer, screwdriver, drill.
    pub tools: Vec<String>,

    /// `(operation, value)` pairs resolved through the decorator chain.
    pub profile: Vec<(&'static str, Value)>,
}

impl Showcase {
    /// Runs the adapter demonstration, then the decorator demonstration.
    pub fn run() -> Result<Self, DecoratorError> {
        let tools = info_span!("adapter").in_scope(Self::run_adapter);
        let profile = info_span!("decorator").in_scope(Self::run_decorator)?;
        Ok(Self { tools, profile })
    }

    /// Wires each tool into its adapter and each adapter into a [`Tool`] client.
    pub fn run_adapter() -> Vec<String> {
        let tools = [
            Tool::new(HammerAdapter::new(Hammer)),
            Tool::new(ScrewdriverAdapter::new(Screwdriver)),
            Tool::new(DrillAdapter::new(Drill)),
        ];

        info!(count = tools.len(), "Using tools through the uniform interface");
        tools.iter().map(Tool::use_tool).collect()
    }

    /// Stacks `UserProfileDecorator<LeapDecorator<UserDecorator<User>>>` over John Doe
    /// and resolves [`CHAIN_OPERATIONS`] through it.
    pub fn run_decorator() -> Result<Vec<(&'static str, Value)>, DecoratorError> {
        let decorated_user = UserDecorator::new(User::new("John", "Doe"));
        info!(birth_year = decorated_user.birth_year(), "Decorated user");

        let decorated_user_year_leap = LeapDecorator::new(decorated_user);
        info!(
            is_leap_year = decorated_user_year_leap.is_leap_year(),
            "Decorated with leap year check"
        );

        let profile = UserProfileDecorator::new(decorated_user_year_leap);
        info!(base = ?profile.subject(), "Chain complete");

        CHAIN_OPERATIONS
            .iter()
            .map(|operation| profile.respond_to(operation).map(|value| (*operation, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_resolves_every_chain_operation() {
        let profile = Showcase::run_decorator().unwrap();
        assert_eq!(
            profile,
            vec![
                ("full_name", Value::Text("John Doe".to_string())),
                ("birth_year", Value::Year(1989)),
                ("is_leap_year", Value::Flag(false)),
                ("name", Value::Text("John Doe".to_string())),
                ("last_name", Value::Text("Doe".to_string())),
            ]
        );
    }
}
