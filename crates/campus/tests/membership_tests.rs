//! Tests for checkbox membership and multi-select bindings

use campus::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn grade(level: i64) -> Value {
    Value::from(json!({
        "id": level,
        "name": format!("Grade {level}"),
        "streams": [{"id": 1, "name": "East"}, {"id": 2, "name": "West"}]
    }))
}

// ═══════════════════════════════════════════════════════════════════════
// Pure functions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_deep_equal_copies_are_checked() {
    let stored = grade(3);
    // Rebuilt from scratch with a different key order
    let refetched = Value::map([
        (
            "streams",
            Value::list(vec![
                Value::map([("name", Value::from("East")), ("id", Value::Int(1))]),
                Value::map([("name", Value::from("West")), ("id", Value::Int(2))]),
            ]),
        ),
        ("name", Value::from("Grade 3")),
        ("id", Value::Float(3.0)),
    ]);

    assert!(is_checked(Some(&[stored][..]), &refetched));
}

#[test]
fn test_nested_difference_is_not_checked() {
    let changed = grade(3).with_entry("streams", Value::list(vec![]));
    assert!(!is_checked(Some(&[grade(3)][..]), &changed));
}

#[test]
fn test_on_then_off_leaves_no_copies() {
    let list = vec![grade(1), grade(2), grade(2)];
    let on = toggle(true, Some(list.as_slice()), &grade(2));
    let off = toggle(false, Some(on.as_slice()), &grade(2));

    assert!(!is_checked(Some(off.as_slice()), &grade(2)));
    assert_eq!(off, vec![grade(1)]);
}

#[test]
fn test_on_on_off_removes_both_copies() {
    let c = grade(4);
    let once = toggle(true, None, &c);
    let twice = toggle(true, Some(once.as_slice()), &c);
    assert_eq!(twice.len(), 2);

    let off = toggle(false, Some(twice.as_slice()), &c);
    assert!(off.iter().all(|v| v != &c));
    assert!(off.is_empty());
}

#[test]
fn test_order_of_other_entries_is_kept() {
    let list = vec![grade(1), grade(2), grade(3)];
    let off = toggle(false, Some(list.as_slice()), &grade(2));
    assert_eq!(off, vec![grade(1), grade(3)]);
}

// ═══════════════════════════════════════════════════════════════════════
// Bindings against a form
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_binding_reads_loaded_value() {
    let form = FormStore::new().with_field("grades", vec![grade(1)]);
    let binding = MembershipBinding::new("grades", grade(1));

    assert!(binding.is_checked(&form));
    assert!(!MembershipBinding::new("grades", grade(2)).is_checked(&form));
    assert!(!MembershipBinding::new("streams", grade(1)).is_checked(&form));
}

#[test]
fn test_every_toggle_validates_and_dirties() {
    let mut form = FormStore::new().with_field("grades", vec![grade(1)]);
    let binding = MembershipBinding::new("grades", grade(2));

    binding.toggle(&mut form, true);
    assert!(form.is_dirty("grades"));
    assert_eq!(form.validation_count("grades"), 1);

    binding.toggle(&mut form, false);
    assert_eq!(form.validation_count("grades"), 2);
    assert_eq!(form.field("grades"), Some(&[grade(1)][..]));
}

#[test]
fn test_binding_through_trait_object() {
    let mut form = FormStore::new();
    let state: &mut dyn FormState = &mut form;
    let binding = MembershipBinding::new("grades", grade(5));

    binding.toggle(state, true);
    assert!(binding.is_checked(&*state));
    assert_eq!(form.dirty_fields(), vec!["grades"]);
}

#[test]
fn test_select_matches_refetched_options() {
    let mut form = FormStore::new().with_field("grades", vec![grade(2)]);
    let select = ObjectSelect::new(
        "grades",
        (1..=3)
            .map(|level| SelectOption::new(format!("Grade {level}"), grade(level)))
            .collect(),
    );

    assert_eq!(select.selected_indices(&form), vec![1]);
    assert_eq!(select.labels(&form), vec!["Grade 2"]);

    select.select(&mut form, [0, 2]);
    assert_eq!(form.field("grades"), Some(&[grade(1), grade(3)][..]));
    assert!(form.is_dirty("grades"));
}
