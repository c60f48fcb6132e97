//! Heading anchor generation.

/// Characters removed from a title before it becomes an anchor.
const DROPPED_CHARS: [char; 20] = [
    '"', '\'', '`', '.', '!', ',', '~', '&', '%', '^', '*', '#', '@', '|', '(', ')', '{', '}',
    '[', ']',
];

/// Converts a heading title into the anchor fragment used in TOC links.
///
/// The title is lower-cased, the characters in [`DROPPED_CHARS`] are removed
/// and every space becomes a hyphen. Nothing else is normalized: leading or
/// repeated hyphens and non-ASCII characters are kept as they are, so the
/// anchors match the ones existing READMEs already link to.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !DROPPED_CHARS.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
