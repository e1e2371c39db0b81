//! URL-safe identifiers derived from free text.

/// Slugify free text: transliterate to ASCII, lowercase, collapse every run
/// of non-alphanumeric characters into a single `-` and trim the ends.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Whether `s` is already in slug form.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.bytes()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'-')
}
