//! Value representation for form-field entries and query parameters

mod display;
mod impls;
mod json;

use indexmap::IndexMap;
use std::sync::Arc;

/// Key/value mapping held by [`Value::Map`].
///
/// Uses IndexMap so that iteration and serialization follow insertion
/// order; equality ignores that order.
pub type ValueMap = IndexMap<String, Value>;

/// A structured value as it travels through forms and API responses.
///
/// Values form a tagged union over primitives, ordered sequences and
/// key/value mappings. Heap parts are Arc-wrapped so clones are cheap and
/// re-fetched entities can be compared by content, not by identity.
///
/// Equality is deep: lists compare element-wise, maps compare entry-wise
/// regardless of key order, and numbers compare by numeric value
/// (`Int(1) == Float(1.0)`).
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// Absent / JSON `null`
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Heap-allocated string
    String(Arc<String>),

    // ═══════════════════════════════════════════════════════════════════
    // Compound
    // ═══════════════════════════════════════════════════════════════════
    /// Ordered sequence
    List(Arc<Vec<Value>>),

    /// String-keyed mapping (an entity such as a grade or a stream)
    Map(Arc<ValueMap>),
}
