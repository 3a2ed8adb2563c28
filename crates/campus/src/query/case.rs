//! Identifier case conversion for query paths

use heck::ToSnakeCase;

/// Convert a dotted camelCase path to snake_case, one segment at a time.
///
/// Dots are kept as nesting separators and never become underscores.
/// Leading and trailing underscores of a segment (`_id`, `__typename`) are
/// kept. Already snake_cased input is returned unchanged.
///
/// ```
/// use campus::to_snake_path;
///
/// assert_eq!(to_snake_path("studentPhoto"), "student_photo");
/// assert_eq!(to_snake_path("outer.innerField"), "outer.inner_field");
/// assert_eq!(to_snake_path("outer._privateField"), "outer._private_field");
/// ```
pub fn to_snake_path(path: &str) -> String {
    path.split('.').map(snake_segment).collect::<Vec<_>>().join(".")
}

fn snake_segment(segment: &str) -> String {
    let body = segment.trim_matches('_');
    if body.is_empty() {
        return segment.to_string();
    }
    // heck drops underscores around the word, put them back
    let lead = segment.len() - segment.trim_start_matches('_').len();
    let trail = segment.len() - segment.trim_end_matches('_').len();
    format!(
        "{}{}{}",
        &segment[..lead],
        body.to_snake_case(),
        &segment[segment.len() - trail..]
    )
}
