//! Decoder for the word endpoint's array-like text payload.
//!
//! The endpoint answers with something shaped like `["apple","banana"]`.
//! The body is treated as opaque text rather than JSON: the first `[` and
//! first `]` are removed, every `"` and `\r` is dropped, leading and
//! trailing line breaks are trimmed, and the rest is split on `,`.
//!
//! Malformed input never fails. Notable shapes:
//!
//! | Body | Result |
//! |------|--------|
//! | `""` | `[""]` |
//! | `["a","b",]` | `["a", "b", ""]` |
//! | `["a", "b"]` | `["a", " b"]` (whitespace is kept) |
//! | `["it\"s"]` | `["it\s"]` (escaped quotes lose their quote) |

/// Splits a raw response body into words in the order the source sent them.
pub fn parse_words(body: &str) -> Vec<String> {
    let stripped = body
        .replacen('[', "", 1)
        .replacen(']', "", 1)
        .replace('"', "")
        .replace('\r', "");

    stripped
        .trim_matches(|ch| ch == '\r' || ch == '\n')
        .split(',')
        .map(str::to_owned)
        .collect()
}
