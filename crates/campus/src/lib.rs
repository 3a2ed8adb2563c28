//! # Campus
//!
//! Client-side data plumbing for the campus school-management application.
//!
//! Two small pieces of logic sit between the forms and the REST API:
//!
//! - **Membership bindings**: checkbox and multi-select fields whose value is
//!   a list of entities (grades, streams, subjects). Selection is decided by
//!   deep equality, so re-fetched entities still match.
//! - **Query derivation**: a response [`Schema`] is turned into sparse
//!   fieldset parameters (`fields=...&expand=...`) with snake_case paths.
//!
//! ## Architecture
//!
//! - **Value**: tagged union for entities, with deep equality
//! - **Schema**: neutral response-shape descriptor
//! - **Query**: schema walk and parameter building
//! - **Binding**: form state seam plus membership and select bindings
//! - **Context**: scoped providers for shared state such as filters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod config;
pub mod context;
pub mod error;
pub mod query;
pub mod schema;
pub mod value;

// Re-export main types
pub use binding::{
    is_checked, toggle, FormState, FormStore, MembershipBinding, ObjectSelect, SelectOption,
    SetFieldOptions,
};
pub use config::QueryConfig;
pub use context::{ContextStack, ScopeGuard};
pub use error::{CampusError, Result};
pub use query::{
    build_query_params, build_query_params_with_config, derive_from_schema, derive_with_config,
    to_snake_path, DerivedFields, QueryOptions, QueryParams,
};
pub use schema::{Schema, SchemaFields};
pub use value::{Value, ValueMap};

/// Campus version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
