//! Splits cleaned page text into pieces that fit the model's input budget.

use super::tokens::{estimate_tokens, estimate_tokens_for_words};

/// How [`split_content`] measures and cuts its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkMode {
    /// Fixed windows of `max` *characters*. Ignores token estimates and
    /// sentence structure entirely; only a last-resort fallback.
    RawCharacterWindow,
    /// Greedy packing of whole sentences up to `max` estimated tokens.
    Sentences,
}

/// Split `content` into ordered, non-empty chunks.
///
/// In [`ChunkMode::Sentences`] a sentence is never cut: one whose own estimate
/// exceeds `max` becomes a chunk by itself.
#[must_use]
pub fn split_content(content: &str, max: usize, mode: ChunkMode) -> Vec<String> {
    match mode {
        ChunkMode::RawCharacterWindow => split_character_windows(content, max),
        ChunkMode::Sentences => pack_sentences(content, max),
    }
}

/// Sentence boundaries fall right after `.`, `!` or `?` when whitespace follows;
/// that whitespace is dropped. Abbreviations such as "Mr. Smith" split too.
#[must_use]
pub fn split_sentences(content: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let end = idx + ch.len_utf8();
        if !chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
            continue;
        }
        sentences.push(&content[start..end]);
        start = content.len();
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                start = ws_idx;
                break;
            }
            chars.next();
        }
    }
    if start < content.len() {
        sentences.push(&content[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

fn pack_sentences(content: &str, max_tokens: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    // Word count of `current`; its estimate is derived from this instead of
    // re-scanning the growing chunk for every sentence.
    let mut current_words = 0;

    for sentence in split_sentences(content) {
        let words = sentence.split_whitespace().count();
        let fits =
            estimate_tokens_for_words(current_words) + estimate_tokens(sentence) <= max_tokens;
        if !fits {
            flush(&mut chunks, &mut current);
            current_words = 0;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(sentence);
        current_words += words;
    }
    flush(&mut chunks, &mut current);

    chunks
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}

fn split_character_windows(content: &str, max_chars: usize) -> Vec<String> {
    let window = max_chars.max(1);
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(window)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
