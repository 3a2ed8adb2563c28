//! Multi-select over a fixed set of structured options

use super::form::{FormState, SetFieldOptions};
use super::membership::MembershipBinding;
use crate::value::Value;

/// A labelled choice in an [`ObjectSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Text shown to the user
    pub label: String,

    /// The entity stored in the field when chosen
    pub value: Value,
}

impl SelectOption {
    /// Create an option
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Binds a list field to a multi-select over structured options.
///
/// Which options show as selected is decided by deep equality against the
/// field's list, so options built from a fresh fetch still match.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSelect {
    field: String,
    options: Vec<SelectOption>,
}

impl ObjectSelect {
    /// Create a select for `field` over `options`.
    pub fn new(field: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            field: field.into(),
            options,
        }
    }

    /// The bound field's name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The available options.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Indices of options whose value is in the field's list.
    pub fn selected_indices<F: FormState + ?Sized>(&self, form: &F) -> Vec<usize> {
        let current = form.field(&self.field).unwrap_or_default();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| current.contains(&option.value))
            .map(|(i, _)| i)
            .collect()
    }

    /// Labels of the selected options.
    pub fn labels<F: FormState + ?Sized>(&self, form: &F) -> Vec<&str> {
        self.selected_indices(form)
            .into_iter()
            .map(|i| self.options[i].label.as_str())
            .collect()
    }

    /// Replace the field's list with the values of the chosen options.
    ///
    /// Values are stored in the order given; out-of-range indices are
    /// ignored.
    pub fn select<F: FormState + ?Sized>(
        &self,
        form: &mut F,
        indices: impl IntoIterator<Item = usize>,
    ) {
        let next: Vec<Value> = indices
            .into_iter()
            .filter_map(|i| self.options.get(i))
            .map(|option| option.value.clone())
            .collect();
        tracing::debug!(field = %self.field, selected = next.len(), "options selected");
        form.set_field(&self.field, next, SetFieldOptions::user_edit());
    }

    /// Check or uncheck a single option, leaving the rest of the list alone.
    ///
    /// Out-of-range indices are ignored.
    pub fn toggle_option<F: FormState + ?Sized>(&self, form: &mut F, index: usize, checked: bool) {
        if let Some(option) = self.options.get(index) {
            MembershipBinding::new(self.field.clone(), option.value.clone()).toggle(form, checked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::FormStore;

    fn subjects() -> ObjectSelect {
        ObjectSelect::new(
            "subjects",
            vec![
                SelectOption::new("Maths", Value::map([("code", Value::from("MAT"))])),
                SelectOption::new("Physics", Value::map([("code", Value::from("PHY"))])),
                SelectOption::new("History", Value::map([("code", Value::from("HIS"))])),
            ],
        )
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let select = subjects();
        let mut form = FormStore::new();
        select.select(&mut form, [2, 9, 0]);

        assert_eq!(select.selected_indices(&form), vec![0, 2]);
        assert_eq!(form.field("subjects").map(<[Value]>::len), Some(2));
        assert!(form.is_dirty("subjects"));
    }

    #[test]
    fn test_labels_follow_option_order() {
        let select = subjects();
        let mut form = FormStore::new();
        select.select(&mut form, [1, 0]);
        assert_eq!(select.labels(&form), vec!["Maths", "Physics"]);
    }

    #[test]
    fn test_toggle_option() {
        let select = subjects();
        let mut form = FormStore::new();
        select.toggle_option(&mut form, 1, true);
        select.toggle_option(&mut form, 5, true);
        assert_eq!(select.selected_indices(&form), vec![1]);

        select.toggle_option(&mut form, 1, false);
        assert!(select.selected_indices(&form).is_empty());
    }
}
