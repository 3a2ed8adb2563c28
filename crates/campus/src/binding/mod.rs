//! Form-field bindings over structured values
//!
//! A list-valued form field holds entities (grades, streams, subjects) as
//! [`Value`](crate::Value)s. The bindings here decide whether an entity is
//! "selected" by deep equality, so an entity that was fetched again or
//! rebuilt from scratch still matches the copy already in the form.

mod form;
mod membership;
mod select;

pub use form::{FormState, FormStore, SetFieldOptions};
pub use membership::{is_checked, toggle, MembershipBinding};
pub use select::{ObjectSelect, SelectOption};
