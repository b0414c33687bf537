use super::*;

// =============================================================
// slug_from_title
// =============================================================

#[test]
fn slug_lowercases_and_hyphenates() {
    assert_eq!(
        slug_from_title("IoT Security Best Practices"),
        "iot-security-best-practices"
    );
}

#[test]
fn slug_strips_punctuation() {
    assert_eq!(
        slug_from_title("Rust & WebAssembly: A Field Guide!"),
        "rust-webassembly-a-field-guide"
    );
}

#[test]
fn slug_collapses_space_runs_including_punctuation_gaps() {
    // "a ! b" strips to "a  b"; both spaces form one run.
    assert_eq!(slug_from_title("a ! b"), "a-b");
    assert_eq!(slug_from_title("one   two"), "one-two");
}

#[test]
fn slug_keeps_leading_and_trailing_hyphens() {
    assert_eq!(slug_from_title("  padded  "), "-padded-");
}

#[test]
fn slug_truncates_to_fifty_characters() {
    let slug = slug_from_title("Modern JavaScript Frameworks: A Comprehensive Comparison");
    assert_eq!(slug, "modern-javascript-frameworks-a-comprehensive-compa");
    assert_eq!(slug.len(), 50);
}

#[test]
fn slug_of_digits_is_preserved() {
    assert_eq!(slug_from_title("Top 10 Tips for 2025"), "top-10-tips-for-2025");
}

#[test]
fn slug_of_only_stripped_characters_is_empty() {
    assert_eq!(slug_from_title("!!!"), "");
}

// =============================================================
// read_time
// =============================================================

#[test]
fn read_time_of_four_hundred_words_is_two_minutes() {
    let content = vec!["word"; 400].join(" ");
    assert_eq!(read_time(&content), "2 min read");
}

#[test]
fn read_time_of_one_word_is_one_minute() {
    assert_eq!(read_time("word"), "1 min read");
}

#[test]
fn read_time_of_empty_content_is_one_minute() {
    assert_eq!(read_time(""), "1 min read");
}

#[test]
fn read_time_rounds_up_at_word_boundary() {
    let content = vec!["word"; 201].join(" ");
    assert_eq!(read_time(&content), "2 min read");
}

#[test]
fn read_time_counts_newline_separated_words_as_one() {
    // Split is on literal single spaces; newline-joined text under-counts.
    assert_eq!(read_time("one\ntwo\nthree"), "1 min read");
}
