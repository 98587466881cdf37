pub const STYLE_KEY_PREFIX: &str = "weiz-icon-";
pub const DEFAULT_STYLE_KEY: &str = "weiz-icon-default";

/// Picks the decorative icon class for an article from its first tag.
pub fn resolve_style<S: AsRef<str>>(tags: &[S]) -> String {
    match tags.first().map(|t| t.as_ref().trim()) {
        Some(tag) if !tag.is_empty() => format!("{}{}", STYLE_KEY_PREFIX, tag.to_lowercase()),
        _ => DEFAULT_STYLE_KEY.to_string(),
    }
}
