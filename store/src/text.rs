//! Derived text fields: title slugs and read-time estimates.
//!
//! Both algorithms intentionally match the deployed snapshot producer so
//! regenerated fields agree with already-published data, quirks included.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Maximum slug length in characters.
const SLUG_MAX_LEN: usize = 50;

/// Average reading speed used for the read-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Derive a post id from its title: lowercase, strip everything outside
/// `[a-z0-9 ]`, collapse each run of spaces into a single hyphen, truncate
/// to 50 characters.
///
/// Leading and trailing space runs become hyphens rather than being trimmed,
/// and two titles can produce the same slug; neither case is rejected here.
#[must_use]
pub fn slug_from_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space_run = false;
    for c in title.to_lowercase().chars() {
        if c == ' ' {
            if !in_space_run {
                slug.push('-');
                in_space_run = true;
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_space_run = false;
        }
        // Any other character is stripped and does not break a space run.
    }
    slug.truncate(SLUG_MAX_LEN);
    slug
}

/// Estimate reading time for `content`, formatted as `"<N> min read"`.
///
/// Words are counted by splitting on literal single spaces, so tabs,
/// newlines, and doubled spaces under-count. The estimate never drops below
/// one minute.
#[must_use]
pub fn read_time(content: &str) -> String {
    let words = content.split(' ').count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{minutes} min read")
}
