//! Sparse-fieldset query derivation
//!
//! Turns a [`Schema`](crate::Schema) (or explicit [`QueryOptions`]) into the
//! flat query parameters the backend understands:
//!
//! ```
//! use campus::{build_query_params, Schema};
//!
//! let schema = Schema::object([
//!     ("firstName", Schema::scalar()),
//!     ("homeAddress", Schema::object([("postCode", Schema::scalar())])),
//! ]);
//!
//! let params = build_query_params(&schema, None);
//! assert_eq!(params.get("fields"), Some("first_name,home_address.post_code"));
//! assert_eq!(params.get("expand"), Some("home_address"));
//! ```

mod case;
mod derive;
mod params;

pub use case::to_snake_path;
pub use derive::{derive_from_schema, derive_with_config, DerivedFields};
pub use params::{build_query_params, build_query_params_with_config, QueryOptions, QueryParams};
