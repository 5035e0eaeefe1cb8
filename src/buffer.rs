//! Best-effort reconciliation between the item list and the raw text buffer.
//!
//! Hiding an item tries to remove its line from the buffer, unhiding tries
//! to re-append it. Matching is heuristic — URL substring first, then title
//! substring — and deliberately non-bijective; the hidden-flag flip itself
//! never depends on these edits succeeding.

use crate::item::Item;

/// Drop the buffer lines that correspond to `item` (and any blank lines).
pub fn remove_item_lines(buffer: &str, item: &Item) -> String {
    let kept: Vec<&str> = buffer
        .lines()
        .filter(|line| {
            let l = line.trim();
            if l.is_empty() {
                return false;
            }
            let parts: Vec<&str> = l.split('\t').collect();
            if !item.url.is_empty() && parts.len() >= 2 {
                // Tab-separated line: compare the URL column only.
                return parts[1].trim() != item.url;
            }
            if !item.url.is_empty() && l.contains(&item.url) {
                return false;
            }
            // Less strict fallback: match on the title.
            if !item.title.is_empty() && (l == item.title || l.contains(&item.title)) {
                return false;
            }
            true
        })
        .collect();
    kept.join("\n")
}

/// Re-append `item`'s line to the buffer unless a matching line is already
/// present. Also normalizes the buffer (trimmed lines, blanks dropped).
pub fn append_item_line(buffer: &str, item: &Item) -> String {
    let mut lines: Vec<String> = buffer
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    let exists = lines.iter().any(|line| {
        if !item.url.is_empty() && line.contains(&item.url) {
            return true;
        }
        !item.title.is_empty() && (line == &item.title || line.contains(&item.title))
    });

    if !exists {
        if let Some(line) = item.buffer_line() {
            lines.push(line);
        }
    }
    lines.join("\n")
}
