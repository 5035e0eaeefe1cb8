//! List Parser — raw pasted text into ordered `Item` records.
//!
//! Input is newline-separated, each line either `title<TAB>url` or a bare
//! URL/string, optionally wrapped in a Discord-style backtick fence. Titles
//! are normalized with a word-casing rule (stopwords stay lowercase except
//! in first/last position).

use url::Url;

use crate::item::Item;

/// Words kept lowercase unless they are the first or last word of a title.
const LOWERCASE_WORDS: &[&str] = &[
    "of", "the", "and", "or", "but", "in", "on", "at", "to", "for", "a", "an",
];

/// Error during list parsing
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse pasted text into items. An input with no non-blank lines is a
/// reportable condition, not a silent empty list.
pub fn parse_lines(text: &str) -> Result<Vec<Item>, ParseError> {
    let body = strip_code_fence(text);

    let items: Vec<Item> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(parse_line)
        .collect();

    if items.is_empty() {
        return Err(ParseError {
            message: "No valid lines found to load".to_string(),
        });
    }
    Ok(items)
}

fn parse_line(line: &str) -> Item {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() >= 2 {
        // Tab-separated: first field is the title, second the URL. Any
        // further fields are ignored.
        return Item::new(format_title(parts[0].trim()), parts[1].trim());
    }

    // Single column: try to infer a title from the URL, else the whole
    // line doubles as both raw title and URL.
    let raw_title = derive_title(line).unwrap_or_else(|| line.to_string());
    Item::new(format_title(&raw_title), line)
}

/// Strip a surrounding code fence if present. Triple backticks may carry a
/// language tag on the opening line; the closing fence must sit on its own
/// line. A bare double-backtick pair is also accepted.
fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();

    if let Some(rest) = t.strip_prefix("```") {
        if let Some(nl) = rest.find('\n') {
            if let Some(body) = rest[nl + 1..]
                .strip_suffix("```")
                .and_then(|b| b.strip_suffix('\n'))
            {
                return body.trim();
            }
        }
    }

    if let Some(body) = t.strip_prefix("``").and_then(|b| b.strip_suffix("``")) {
        return body.trim();
    }

    t
}

/// Raw title for a bare-URL line: the last non-empty, percent-decoded path
/// segment, falling back to the hostname.
fn derive_title(line: &str) -> Option<String> {
    let parsed = Url::parse(line).ok()?;

    let segment = parsed
        .path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
        .map(str::to_string);

    let raw = segment
        .or_else(|| parsed.host_str().map(str::to_string))
        .or_else(|| {
            let path = parsed.path();
            (!path.is_empty()).then(|| path.to_string())
        })?;

    match urlencoding::decode(&raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw),
    }
}

/// Normalize a raw title: dashes/underscores become spaces, the first and
/// last words are always capitalized, stopwords elsewhere stay lowercase,
/// everything else is capitalized.
pub fn format_title(raw: &str) -> String {
    let spaced = raw.replace(['-', '_'], " ");
    let words: Vec<&str> = spaced.split(' ').filter(|w| !w.is_empty()).collect();
    if words.is_empty() {
        return String::new();
    }

    let last = words.len() - 1;
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 || i == last {
                capitalize(word)
            } else if LOWERCASE_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_separated_line() {
        let items = parse_lines("Cool Game\thttps://x.io/cool-game").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Cool Game");
        assert_eq!(items[0].url, "https://x.io/cool-game");
        assert!(!items[0].hidden);
    }

    #[test]
    fn tab_line_trims_fields_and_ignores_extras() {
        let items = parse_lines(" my-game \t https://x.io/my-game \tnotes").unwrap();
        assert_eq!(items[0].title, "My Game");
        assert_eq!(items[0].url, "https://x.io/my-game");
    }

    #[test]
    fn bare_url_derives_title_from_last_path_segment() {
        let items = parse_lines("https://x.io/my-cool_game").unwrap();
        assert_eq!(items[0].title, "My Cool Game");
        assert_eq!(items[0].url, "https://x.io/my-cool_game");
    }

    #[test]
    fn bare_url_trailing_slash_still_finds_segment() {
        let items = parse_lines("https://x.io/deep/path/the-game/").unwrap();
        assert_eq!(items[0].title, "The Game");
    }

    #[test]
    fn bare_url_with_empty_path_uses_hostname() {
        let items = parse_lines("https://itch.io/").unwrap();
        assert_eq!(items[0].title, "Itch.io");
        assert_eq!(items[0].url, "https://itch.io/");
    }

    #[test]
    fn percent_encoded_segment_is_decoded() {
        let items = parse_lines("https://x.io/space%20race").unwrap();
        assert_eq!(items[0].title, "Space Race");
    }

    #[test]
    fn non_url_line_is_both_title_and_url() {
        let items = parse_lines("just some game").unwrap();
        assert_eq!(items[0].title, "Just Some Game");
        assert_eq!(items[0].url, "just some game");
    }

    #[test]
    fn blank_lines_dropped_order_preserved() {
        let items = parse_lines("a\tu1\n\n  \nb\tu2\n").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url, "u1");
        assert_eq!(items[1].url, "u2");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_lines("").is_err());
        assert!(parse_lines("  \n \n").is_err());
    }

    #[test]
    fn triple_fence_stripped_with_language_tag() {
        let text = "```txt\na\tu1\nb\tu2\n```";
        let items = parse_lines(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn double_fence_stripped() {
        let items = parse_lines("``a\tu1``").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "u1");
    }

    #[test]
    fn unterminated_fence_left_alone() {
        // No closing fence on its own line: the backticks stay in the data.
        let items = parse_lines("```\na\tu1").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn stopwords_lowercase_except_first_and_last() {
        assert_eq!(
            format_title("the lord of the rings"),
            "The Lord of the Rings"
        );
        assert_eq!(format_title("war-and-peace"), "War and Peace");
        // Stopword forced to uppercase in last position
        assert_eq!(format_title("what it is for"), "What It Is For");
    }

    #[test]
    fn dashes_and_underscores_become_spaces() {
        assert_eq!(format_title("my-cool_game"), "My Cool Game");
        assert_eq!(format_title("--double--dash--"), "Double Dash");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["the lord of the rings", "my-cool_game", "SHOUTY NAME"] {
            let once = format_title(raw);
            assert_eq!(format_title(&once), once);
        }
    }

    #[test]
    fn mixed_case_words_are_normalized() {
        assert_eq!(format_title("SHOUTY NAME"), "Shouty Name");
        assert_eq!(format_title("iNtErNaL cAsE"), "Internal Case");
    }
}
