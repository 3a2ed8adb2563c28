//! The form state container seam

use indexmap::{IndexMap, IndexSet};

use crate::value::Value;

/// What the form should do after a field is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetFieldOptions {
    /// Re-run validation for the field
    pub should_validate: bool,

    /// Mark the field as modified since the last load or save
    pub should_dirty: bool,
}

impl SetFieldOptions {
    /// Options used by user-driven edits: validate and mark dirty.
    pub fn user_edit() -> Self {
        Self {
            should_validate: true,
            should_dirty: true,
        }
    }
}

/// A form state container holding list-valued fields.
///
/// Bindings only read a field and replace it wholesale; persistence,
/// submission and the validation rules themselves belong to the container.
pub trait FormState {
    /// Current list held by `name`, or `None` if the field was never set.
    fn field(&self, name: &str) -> Option<&[Value]>;

    /// Replace the list held by `name`.
    fn set_field(&mut self, name: &str, value: Vec<Value>, options: SetFieldOptions);
}

/// In-memory form state.
///
/// Tracks which fields are dirty and how many times validation was
/// requested for each field.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    values: IndexMap<String, Vec<Value>>,
    dirty: IndexSet<String>,
    validations: IndexMap<String, usize>,
}

impl FormStore {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a field's initial value (builder pattern). Loaded fields are
    /// clean.
    pub fn with_field(mut self, name: impl Into<String>, value: Vec<Value>) -> Self {
        let name = name.into();
        self.dirty.shift_remove(&name);
        self.values.insert(name, value);
        self
    }

    /// Check if a field was modified since load or the last save.
    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    /// Check if any field is dirty.
    pub fn has_changes(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Names of dirty fields, in the order they became dirty.
    pub fn dirty_fields(&self) -> Vec<&str> {
        self.dirty.iter().map(String::as_str).collect()
    }

    /// How many times validation was requested for `name`.
    pub fn validation_count(&self, name: &str) -> usize {
        self.validations.get(name).copied().unwrap_or(0)
    }

    /// Forget dirty state, e.g. after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }

    /// All field values, in insertion order.
    pub fn values(&self) -> &IndexMap<String, Vec<Value>> {
        &self.values
    }
}

impl FormState for FormStore {
    fn field(&self, name: &str) -> Option<&[Value]> {
        self.values.get(name).map(Vec::as_slice)
    }

    fn set_field(&mut self, name: &str, value: Vec<Value>, options: SetFieldOptions) {
        self.values.insert(name.to_string(), value);
        if options.should_dirty {
            self.dirty.insert(name.to_string());
        }
        if options.should_validate {
            *self.validations.entry(name.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_field_is_clean() {
        let form = FormStore::new().with_field("grades", vec![Value::Int(1)]);
        assert_eq!(form.field("grades"), Some(&[Value::Int(1)][..]));
        assert!(!form.is_dirty("grades"));
        assert!(!form.has_changes());
    }

    #[test]
    fn test_set_field_honours_options() {
        let mut form = FormStore::new();
        form.set_field("streams", vec![], SetFieldOptions::default());
        assert!(!form.is_dirty("streams"));
        assert_eq!(form.validation_count("streams"), 0);

        form.set_field("streams", vec![], SetFieldOptions::user_edit());
        assert!(form.is_dirty("streams"));
        assert_eq!(form.validation_count("streams"), 1);

        form.mark_clean();
        assert!(!form.has_changes());
    }
}
