/// Derive a URL-safe identifier from a movie title.
///
/// Lowercases, strips anything outside `[a-z0-9\s-]`, and collapses
/// whitespace runs into single hyphens. Empty titles yield empty slugs;
/// uniqueness is not guaranteed and collisions are not checked.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}
