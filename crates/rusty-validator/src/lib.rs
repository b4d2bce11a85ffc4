//! # rusty-validator
//!
//! Declarative struct validation. Fields carry a rule string, the derive macro
//! records every field's name, kind, rule and visibility at compile time, and
//! the engine dispatches each rule-bearing public field to the validator
//! registered for its kind. All failures are returned, not just the first.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_validator::{ErrorKind, Reflect, Validate};
//!
//! #[derive(Reflect)]
//! struct Person {
//!     #[validator = "required"]
//!     pub first: String,
//!
//!     #[validator = "required,allowempty"]
//!     pub last: String,
//!
//!     #[validator = "required,greaterthan,0"]
//!     pub weight: i64,
//!
//!     #[validator = "required"]
//!     pub nicknames: Vec<String>,
//!
//!     // private fields are never checked
//!     #[validator = "required"]
//!     secret: String,
//! }
//!
//! let person = Person {
//!     first: String::new(),
//!     last: String::new(),
//!     weight: 0,
//!     nicknames: vec![],
//!     secret: String::new(),
//! };
//!
//! let errors = person.validate();
//! let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         ErrorKind::ValidationFailed, // first
//!         ErrorKind::ValidationFailed, // weight
//!         ErrorKind::Unsupported,      // nicknames
//!     ]
//! );
//! ```
//!
//! ## Rule strings
//!
//! `rule := token (',' token)*`. `greaterthan` and `lessthan` take the next
//! token as their parameter; every other token is a flag.
//!
//! | Kind | Requirements |
//! |------|--------------|
//! | `string` | `required` rejects `""` unless `allowempty` is present |
//! | `int` | with `required`: `greaterthan,N` rejects `<= N`, `lessthan,N` rejects `>= N` |
//!
//! Other kinds are reported as [`ErrorKind::Unsupported`] until a validator is
//! registered for them with [`Registry::builder`].
//!
//! ## Architecture
//!
//! - **`kind`** - closed set of data kinds
//! - **`reflect`** - [`Reflect`] / [`Record`] traits and field descriptors
//! - **`rules`** - rule-string parser producing a [`RequirementSet`]
//! - **`registry`** - kind-indexed validator table
//! - **`validators`** - built-in string and integer validators
//! - **`validator`** - the driver: field iteration and error aggregation
//! - **`config`** - TOML configuration for the registry

#![doc(html_root_url = "https://docs.rs/rusty-validator/0.1.0")]

// Lets the derive's `::rusty_validator::` paths resolve inside this crate's own tests
extern crate self as rusty_validator;

pub mod config;
pub mod error;
pub mod kind;
pub mod reflect;
pub mod registry;
pub mod rules;
pub mod validator;
pub mod validators;

// Re-export derive macro (same name as the trait, like serde)
pub use rusty_validator_derive::Reflect;

pub use config::{Config, RegistryConfig};
pub use error::{
    ErrorKind, ValidationError, ERROR_MESSAGE_FAILED, ERROR_MESSAGE_INVALID,
    ERROR_MESSAGE_UNSUPPORTED,
};
pub use kind::{Kind, UnknownKind};
pub use reflect::{FieldDescriptor, FieldValue, Record, Reflect, Visibility};
pub use registry::{Registry, RegistryBuilder, ValidatorFn};
pub use rules::{RequirementSet, RuleError};
pub use validator::{validate, Validate, Validator};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Reflect)]
    struct Thing {
        #[validator = "required"]
        pub name: String,
        #[validator = "required"]
        hidden: String,
    }

    #[test]
    fn test_derive_resolves_inside_crate() {
        let thing = Thing {
            name: String::new(),
            hidden: String::new(),
        };
        assert_eq!(thing.hidden, "");

        let errors = validate(&thing);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), Some("name"));
    }
}
