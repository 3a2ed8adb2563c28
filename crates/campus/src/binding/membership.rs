//! Checkbox-style membership of one value in a list-valued field

use super::form::{FormState, SetFieldOptions};
use crate::value::Value;

/// Check if `candidate` is in `current`, by deep equality.
///
/// An absent list is treated as empty.
pub fn is_checked(current: Option<&[Value]>, candidate: &Value) -> bool {
    current
        .unwrap_or_default()
        .iter()
        .any(|entry| entry == candidate)
}

/// Compute the field's new list after a checkbox toggle.
///
/// Checking appends `candidate` without looking for an existing copy, so
/// checking twice stores it twice. Unchecking removes every entry deep-equal
/// to `candidate`. An absent list is treated as empty.
pub fn toggle(checked: bool, current: Option<&[Value]>, candidate: &Value) -> Vec<Value> {
    let current = current.unwrap_or_default();
    if checked {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current);
        next.push(candidate.clone());
        next
    } else {
        current
            .iter()
            .filter(|entry| *entry != candidate)
            .cloned()
            .collect()
    }
}

/// Binds one structured value to membership in a form field.
///
/// # Example
///
/// ```
/// use campus::{FormStore, MembershipBinding, Value};
///
/// let grade = Value::map([("id", Value::Int(2)), ("name", Value::from("Grade 2"))]);
/// let binding = MembershipBinding::new("grades", grade.clone());
/// let mut form = FormStore::new();
///
/// binding.toggle(&mut form, true);
/// assert!(binding.is_checked(&form));
/// assert!(form.is_dirty("grades"));
///
/// binding.toggle(&mut form, false);
/// assert!(!binding.is_checked(&form));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipBinding {
    field: String,
    candidate: Value,
}

impl MembershipBinding {
    /// Bind `candidate` to the list field `field`.
    pub fn new(field: impl Into<String>, candidate: Value) -> Self {
        Self {
            field: field.into(),
            candidate,
        }
    }

    /// The bound field's name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The bound value.
    pub fn candidate(&self) -> &Value {
        &self.candidate
    }

    /// Whether the form's list currently holds the bound value.
    pub fn is_checked<F: FormState + ?Sized>(&self, form: &F) -> bool {
        is_checked(form.field(&self.field), &self.candidate)
    }

    /// Apply a checkbox change, replacing the field's list.
    ///
    /// The form is asked to re-validate the field and mark it dirty.
    pub fn toggle<F: FormState + ?Sized>(&self, form: &mut F, checked: bool) {
        let next = toggle(checked, form.field(&self.field), &self.candidate);
        tracing::debug!(
            field = %self.field,
            checked,
            len = next.len(),
            "membership toggled"
        );
        form.set_field(&self.field, next, SetFieldOptions::user_edit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(id: i64) -> Value {
        Value::map([("id", Value::Int(id)), ("name", Value::from(format!("S{id}")))])
    }

    #[test]
    fn test_absent_list_is_empty() {
        assert!(!is_checked(None, &stream(1)));
        assert_eq!(toggle(true, None, &stream(1)), vec![stream(1)]);
        assert!(toggle(false, None, &stream(1)).is_empty());
    }

    #[test]
    fn test_toggle_on_appends_without_dedup() {
        let list = vec![stream(1)];
        let next = toggle(true, Some(list.as_slice()), &stream(1));
        assert_eq!(next, vec![stream(1), stream(1)]);
    }

    #[test]
    fn test_toggle_off_removes_all_copies_only() {
        let list = vec![stream(1), stream(2), stream(1)];
        let next = toggle(false, Some(list.as_slice()), &stream(1));
        assert_eq!(next, vec![stream(2)]);
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let list = vec![stream(1)];
        let _ = toggle(false, Some(list.as_slice()), &stream(1));
        assert_eq!(list.len(), 1);
    }
}
