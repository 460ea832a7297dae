//! Heuristic token estimation.
//!
//! Counts whitespace-separated words and inflates by 30% to leave headroom for
//! words that split into several model tokens. This is a budgeting aid, not a
//! tokenizer, and deliberately overestimates.

/// Estimated token cost of `text`. Zero only for empty or whitespace-only text.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    estimate_tokens_for_words(text.split_whitespace().count())
}

/// `max(1, ceil(words * 1.3))`, or 0 when there are no words.
#[must_use]
pub fn estimate_tokens_for_words(words: usize) -> usize {
    if words == 0 {
        return 0;
    }
    // Integer form of ceil(words * 1.3); avoids float rounding at large counts.
    (words * 13).div_ceil(10).max(1)
}
