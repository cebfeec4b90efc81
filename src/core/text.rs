//! String helpers for display text and URLs.

regex!(WHITESPACE_RUN, r"\s+");
regex!(NON_SLUG, r"[^A-Za-z0-9_-]");
regex!(HTML_TAG, r"<[^>]*>");

/// First character upper-cased, the rest lower-cased: `"hELLO"` -> `"Hello"`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Cuts to `len` characters and appends `...` when the text is longer.
pub fn truncate(value: &str, len: usize) -> String {
    match value.char_indices().nth(len) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}

/// `"Hello World!"` -> `"hello-world"`
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG.replace_all(&dashed, "").into_owned()
}

/// Trims and collapses internal whitespace runs to one space.
pub fn normalize_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value.trim(), " ").into_owned()
}

/// Drops anything that looks like a tag; the text between tags is kept.
pub fn sanitize_html(value: &str) -> String {
    HTML_TAG.replace_all(value, "").into_owned()
}
