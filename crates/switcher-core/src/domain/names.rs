//! Display names for group identifiers.

/// Converts `UPPER_SNAKE` identifiers into title case for the menu.
///
/// `"COMPANY_A"` becomes `"Company A"`.  Runs of underscores or spaces
/// collapse into a single space.
pub fn format_group_name(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
