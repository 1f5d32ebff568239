use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::constants::AUDIO_SLUG_MAX_LEN;

/// Matches inline bookmark tags such as `<bookmark mark='intro'/>`.
static BOOKMARK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<bookmark\s*mark\s*=\s*['"][\w-]*['"]\s*/>"#).unwrap()
});

/// Strip bookmark tags from scene text before hashing and synthesis.
///
/// Bookmarks only key on-screen actions to points in the narration, they
/// must not change which audio gets synthesized or cached.
pub fn remove_bookmarks(text: &str) -> String {
    BOOKMARK_REGEX.replace_all(text, "").to_string()
}

/// Deterministic audio file stem for a synthesized text.
///
/// Joins a short ASCII slug of the text with the cache-key digest so the
/// file is both human-recognizable and unique per parameter set.
pub fn audio_basename(text: &str, digest: &str) -> String {
    let slug = slugify(text, AUDIO_SLUG_MAX_LEN);
    if slug.is_empty() {
        digest.to_string()
    } else {
        format!("{}-{}", slug, digest)
    }
}

fn slugify(text: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(max_len);
    let mut last_dash = true;
    for c in text.chars() {
        if slug.len() >= max_len {
            break;
        }
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
