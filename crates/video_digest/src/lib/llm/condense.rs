//! Transcript clean-up applied before text is sent to a completion model.

use std::sync::LazyLock;

use another_tiktoken_rs::{cl100k_base, CoreBPE};
use itertools::Itertools;
use regex::Regex;

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:so basically|what i mean is|you know|kind of|sort of|basically|actually|literally|um+|uh+)\b,?",
    )
    .unwrap()
});

static BPE: LazyLock<Option<CoreBPE>> = LazyLock::new(|| {
    cl100k_base()
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to load tokenizer, using estimate"))
        .ok()
});

/// Sentences this short are usually caption noise ("Okay.", "[Music]")
const MIN_SENTENCE_CHARS: usize = 10;

/// Rough characters-per-token ratio used when the tokenizer is unavailable
const CHARS_PER_TOKEN: usize = 4;

/// Removes filler words and near-duplicate sentences and collapses whitespace.
///
/// Sentences are compared on their first five words, order-insensitive, which
/// catches the repeated lines auto-generated captions are full of. If nothing
/// survives the filtering the whitespace-collapsed input is returned instead.
pub fn condense_transcript(text: &str) -> String {
    let collapsed = text.split_whitespace().join(" ");
    let without_fillers = FILLER_RE.replace_all(&collapsed, "");

    let sentences = without_fillers
        .split('.')
        .map(|s| s.split_whitespace().join(" "))
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .unique_by(|s| {
            s.to_lowercase()
                .split_whitespace()
                .take(5)
                .sorted()
                .join(" ")
        })
        .collect::<Vec<_>>();

    if sentences.is_empty() {
        return collapsed;
    }

    format!("{}.", sentences.join(". "))
}

/// Cuts `text` down to at most `limit` tokens
pub fn truncate_to_token_limit(text: &str, limit: usize) -> String {
    match BPE.as_ref() {
        Some(bpe) => {
            let tokens = bpe.encode_with_special_tokens(text);
            if tokens.len() <= limit {
                return text.to_string();
            }
            tracing::info!(tokens = tokens.len(), limit, "Truncating prompt to token limit");
            bpe.decode(tokens[..limit].to_vec())
                .unwrap_or_else(|_| truncate_chars(text, limit * CHARS_PER_TOKEN))
        }
        None => truncate_chars(text, limit * CHARS_PER_TOKEN),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
