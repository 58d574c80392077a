//! # Decorator
//!
//! Wraps a [`User`] to add operations while forwarding everything else to the
//! wrapped object. Decorators can wrap other decorators.
//!
//! # Architecture Note
//! There is no "forward whatever I don't know" in Rust, so the forwarding table is
//! spelled out once:
//!
//! - [`Profile`] is the full capability set of the subject. `User` implements it,
//!   and so does every decorator.
//! - [`Decorator`] is what a wrapper actually writes: the object it wraps and the
//!   operations it adds.
//! - A blanket `impl<D: Decorator> Profile for D` answers every subject operation
//!   through the layer's `layer_*` methods, which forward to [`Decorator::inner`]
//!   unless overridden, and resolves [`Profile::respond_to`] locally first, inward
//!   second.
//!
//! # Resolution Order
//! For `respond_to("op")` on `LeapDecorator<UserDecorator<User>>`:
//! 1. `first_name`, `last_name`, `born_on`: the outer layer's `layer_*` methods,
//!    which reach the innermost override, or the `User` fields
//! 2. `LeapDecorator` own operations
//! 3. `UserDecorator` own operations
//! 4. [`DecoratorError::UnsupportedOperation`]

pub mod calendar;
pub mod decorators;
pub mod error;
pub mod user;

pub use decorators::*;
pub use error::*;
pub use user::*;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Everything a profile can be asked, by every layer of a decorator chain.
pub trait Profile {
    fn first_name(&self) -> Option<&str>;

    fn last_name(&self) -> &str;

    fn born_on(&self) -> NaiveDate;

    /// The innermost subject, however deep the chain.
    fn subject(&self) -> &User;

    /// Resolve an operation by name.
    ///
    /// Returns [`DecoratorError::UnsupportedOperation`] when neither this layer nor
    /// anything underneath defines `operation`.
    fn respond_to(&self, operation: &str) -> Result<Value, DecoratorError>;
}

/// A wrapper around exactly one [`Profile`].
///
/// Implementors get [`Profile`] for free. Subject operations go through the
/// `layer_*` methods, which forward to [`inner`](Decorator::inner) unless the layer
/// overrides them. [`own_operation`](Decorator::own_operation) holds the operations
/// the layer adds.
///
/// Override a subject operation through its `layer_*` method, never through
/// `own_operation`: named requests for subject operations are answered from the
/// `layer_*` methods so both paths agree.
pub trait Decorator {
    /// The wrapped layer, a subject or another decorator.
    type Inner: Profile + ?Sized;

    /// Layer name used in logs.
    const LAYER: &'static str;

    /// The next layer inward.
    fn inner(&self) -> &Self::Inner;

    /// The subject at the bottom of the chain.
    fn base(&self) -> &User {
        self.inner().subject()
    }

    /// What this layer answers for `first_name`.
    fn layer_first_name(&self) -> Option<&str> {
        self.inner().first_name()
    }

    /// What this layer answers for `last_name`.
    fn layer_last_name(&self) -> &str {
        self.inner().last_name()
    }

    /// What this layer answers for `born_on`.
    fn layer_born_on(&self) -> NaiveDate {
        self.inner().born_on()
    }

    /// Operations this layer adds. `None` means "ask the next layer".
    fn own_operation(&self, operation: &str) -> Option<Value>;
}

impl<D: Decorator> Profile for D {
    fn first_name(&self) -> Option<&str> {
        D::layer_first_name(self)
    }

    fn last_name(&self) -> &str {
        D::layer_last_name(self)
    }

    fn born_on(&self) -> NaiveDate {
        D::layer_born_on(self)
    }

    fn subject(&self) -> &User {
        self.inner().subject()
    }

    #[instrument(skip(self), fields(layer = D::LAYER))]
    fn respond_to(&self, operation: &str) -> Result<Value, DecoratorError> {
        let subject_value = match operation {
            "first_name" => Some(
                D::layer_first_name(self)
                    .map(|name| Value::Text(name.to_string()))
                    .unwrap_or(Value::Nil),
            ),
            "last_name" => Some(Value::Text(D::layer_last_name(self).to_string())),
            "born_on" => Some(Value::Date(D::layer_born_on(self))),
            _ => None,
        };
        if let Some(value) = subject_value.or_else(|| self.own_operation(operation)) {
            debug!(?value, "Resolved locally");
            return Ok(value);
        }
        debug!("Forwarding inward");
        self.inner().respond_to(operation)
    }
}

/// The result of an operation resolved by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An absent attribute, such as a missing first name.
    Nil,
    /// A yes/no answer, such as `is_leap_year`.
    Flag(bool),
    /// A calendar year, such as `birth_year`.
    Year(i32),
    /// A calendar date, such as `born_on`.
    Date(NaiveDate),
    /// Free text, such as `full_name`.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Flag(flag) => write!(f, "{}", flag),
            Value::Year(year) => write!(f, "{}", year),
            Value::Date(date) => write!(f, "{}", date),
            Value::Text(text) => f.write_str(text),
        }
    }
}
