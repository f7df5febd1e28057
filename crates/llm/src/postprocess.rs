//! Cleanup of generated paragraphs

use tracing::debug;

/// Number of leading characters searched for an echoed topic
const ECHO_WINDOW: usize = 50;

/// Fragments at or below this many characters are dropped during cleanup
const MIN_FRAGMENT_CHARS: usize = 10;

/// Clean up a generated paragraph
///
/// When the topic shows up (case-insensitively) within the first 50
/// characters, the model is assumed to have echoed the prompt. The text is
/// then split on '.', short fragments are dropped and the rest re-joined with
/// ". ", ending with a period. Otherwise the text is returned unchanged.
///
/// This is a heuristic: it can drop legitimate short sentences and misses
/// echoes that start later in the text.
pub fn clean_generated_text(topic: &str, text: &str) -> String {
    if text.is_empty() || !echoes_topic(topic, text) {
        return text.to_string();
    }

    debug!("Topic echoed in generated text, dropping short fragments");

    let mut cleaned = text
        .split('.')
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_CHARS)
        .collect::<Vec<_>>()
        .join(". ");

    if !cleaned.ends_with('.') {
        cleaned.push('.');
    }

    cleaned
}

fn echoes_topic(topic: &str, text: &str) -> bool {
    let head: String = text.to_lowercase().chars().take(ECHO_WINDOW).collect();
    head.contains(&topic.to_lowercase())
}
