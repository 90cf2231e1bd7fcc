//! Node id → display label.

/// `press_one_menu` → `Press One Menu`.
///
/// Underscores become spaces, runs of whitespace collapse, and each word is
/// upper-cased on its first character and lower-cased on the rest. An id with
/// no word characters (`___`) is returned unchanged so the label is never
/// empty; labels and jump targets both go through here and stay in step.
pub fn humanize(id: &str) -> String {
    let label = id
        .replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    if label.is_empty() { id.to_string() } else { label }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
