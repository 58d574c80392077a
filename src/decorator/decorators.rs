//! Concrete decorators.
//!
//! | Decorator                | Adds                      | Needs from inner |
//! |--------------------------|---------------------------|------------------|
//! | [`UserDecorator`]        | `full_name`, `birth_year` | [`Profile`]      |
//! | [`LeapDecorator`]        | `is_leap_year`            | [`BirthYear`]    |
//! | [`UserProfileDecorator`] | `name`                    | [`Profile`]      |

use super::calendar;
use super::{Decorator, Profile, User, Value};
use chrono::Datelike;

/// Layers that can answer `birth_year`.
///
/// Decorators stacked above a [`UserDecorator`] forward this so that later layers
/// (such as [`LeapDecorator`]) can build on it.
pub trait BirthYear: Profile {
    fn birth_year(&self) -> i32;
}

/// Adds display helpers computed from the wrapped profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDecorator<P: Profile = User> {
    object: P,
}

impl<P: Profile> UserDecorator<P> {
    pub fn new(object: P) -> Self {
        Self { object }
    }

    /// First token of the first name, a space, and the last name.
    ///
    /// Empty when the first name is absent or blank.
    pub fn full_name(&self) -> String {
        match self
            .object
            .first_name()
            .and_then(|name| name.split_whitespace().next())
        {
            Some(first) => format!("{} {}", first, self.object.last_name()),
            None => String::new(),
        }
    }
}

impl<P: Profile> BirthYear for UserDecorator<P> {
    fn birth_year(&self) -> i32 {
        self.object.born_on().year()
    }
}

impl<P: Profile> Decorator for UserDecorator<P> {
    type Inner = P;
    const LAYER: &'static str = "UserDecorator";

    fn inner(&self) -> &P {
        &self.object
    }

    fn own_operation(&self, operation: &str) -> Option<Value> {
        match operation {
            "full_name" => Some(Value::Text(self.full_name())),
            "birth_year" => Some(Value::Year(self.birth_year())),
            _ => None,
        }
    }
}

/// Answers whether the wrapped profile was born in a leap year.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapDecorator<P: BirthYear> {
    object: P,
}

impl<P: BirthYear> LeapDecorator<P> {
    pub fn new(object: P) -> Self {
        Self { object }
    }

    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.object.birth_year())
    }
}

impl<P: BirthYear> BirthYear for LeapDecorator<P> {
    fn birth_year(&self) -> i32 {
        self.object.birth_year()
    }
}

impl<P: BirthYear> Decorator for LeapDecorator<P> {
    type Inner = P;
    const LAYER: &'static str = "LeapDecorator";

    fn inner(&self) -> &P {
        &self.object
    }

    fn own_operation(&self, operation: &str) -> Option<Value> {
        match operation {
            "is_leap_year" => Some(Value::Flag(self.is_leap_year())),
            _ => None,
        }
    }
}

/// Builds its output straight from the subject, skipping any layers in between.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileDecorator<P: Profile> {
    object: P,
}

impl<P: Profile> UserProfileDecorator<P> {
    pub fn new(object: P) -> Self {
        Self { object }
    }

    pub fn name(&self) -> String {
        let base = self.base();
        format!(
            "{} {}",
            base.first_name.as_deref().unwrap_or_default(),
            base.last_name
        )
    }
}

impl<P: BirthYear> BirthYear for UserProfileDecorator<P> {
    fn birth_year(&self) -> i32 {
        self.object.birth_year()
    }
}

impl<P: Profile> Decorator for UserProfileDecorator<P> {
    type Inner = P;
    const LAYER: &'static str = "UserProfileDecorator";

    fn inner(&self) -> &P {
        &self.object
    }

    fn own_operation(&self, operation: &str) -> Option<Value> {
        match operation {
            "name" => Some(Value::Text(self.name())),
            _ => None,
        }
    }
}
