//! Character-count based text fitting for node labels, card keys, and the caption.
//!
//! Counts are in `char`s, not bytes, so multi-byte step names are never split
//! inside a code point.

pub const ELLIPSIS: &str = "...";

/// Greedy whole-word wrap. Labels within `wrap_chars` stay on one line; longer ones
/// are packed into at most `max_lines` lines and any remaining words are dropped.
pub fn wrap_label(label: &str, wrap_chars: usize, max_lines: usize) -> Vec<String> {
    if label.chars().count() <= wrap_chars {
        return vec![label.to_string()];
    }
    let words: Vec<&str> = label.split_whitespace().collect();
    if words.is_empty() {
        return vec![label.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in words {
        let word_len = word.chars().count();
        if current_len + word_len + 1 <= wrap_chars {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.truncate(max_lines.max(1));
    lines
}

/// Shortens keys longer than `max_chars` to their first `keep_chars` plus `...`.
pub fn truncate_key(key: &str, max_chars: usize, keep_chars: usize) -> String {
    if key.chars().count() <= max_chars {
        return key.to_string();
    }
    let mut out: String = key.chars().take(keep_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Caps text at `max_chars` characters in total, ellipsis included.
pub fn truncate_caption(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
