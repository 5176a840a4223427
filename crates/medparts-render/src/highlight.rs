use serde::Serialize;

/// A run of text that is either plain or part of a search-term match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    fn plain(text: String) -> Self {
        Span {
            text,
            highlighted: false,
        }
    }

    fn hit(text: String) -> Self {
        Span {
            text,
            highlighted: true,
        }
    }
}

/// Splits `text` into spans, marking every non-overlapping, case-insensitive
/// occurrence of `term`. An empty term yields a single plain span.
///
/// Matching is a character-window scan rather than a regex built from user
/// input, so search terms containing regex metacharacters are matched
/// literally. Case folding is per-character (`char::to_lowercase`), which
/// covers the accented Latin text in the catalog.
#[must_use]
pub fn highlight(text: &str, term: &str) -> Vec<Span> {
    if term.is_empty() || text.is_empty() {
        return vec![Span::plain(text.to_string())];
    }

    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    if needle.len() > haystack.len() {
        return vec![Span::plain(text.to_string())];
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if chars_match(&haystack[i..i + needle.len()], &needle) {
            if plain_start < i {
                spans.push(Span::plain(haystack[plain_start..i].iter().collect()));
            }
            spans.push(Span::hit(haystack[i..i + needle.len()].iter().collect()));
            i += needle.len();
            plain_start = i;
        } else {
            i += 1;
        }
    }
    if plain_start < haystack.len() {
        spans.push(Span::plain(haystack[plain_start..].iter().collect()));
    }

    spans
}

fn chars_match(window: &[char], needle: &[char]) -> bool {
    window
        .iter()
        .zip(needle)
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}
