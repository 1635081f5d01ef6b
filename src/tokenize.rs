//! Heuristic tokenizer for the one metadata line trailing each comment body.
//!
//! The line is free-form markup, but two facts hold on well-formed pages: the
//! timestamp lives in the token at a fixed offset from the line start, wrapped
//! in a fixed attribute prefix and a closing quote, and the polarity phrase
//! runs backward from the second-to-last token until the literal marker
//! `"Side:"`. Everything here is best-effort: any irregularity resolves to
//! the `"Not Available"` sentinels, and no error crosses this boundary.

use crate::model::NOT_AVAILABLE;

/// Marker token terminating the backward polarity scan.
const SIDE_MARKER: &str = "Side:";
/// Offset of the timestamp token from the line start.
const TIMESTAMP_TOKEN_INDEX: usize = 3;
/// Characters stripped from the front of the timestamp token (`datetime="`).
const TIMESTAMP_PREFIX_LEN: usize = 10;
/// Characters stripped from its tail (the closing quote).
const TIMESTAMP_SUFFIX_LEN: usize = 1;

enum State {
    ScanningFromEnd,
    CollectingPolarity,
    FoundMarker,
    Done,
}

/// Recover `(timestamp, polarity)` from one metadata line, degrading both to
/// [`NOT_AVAILABLE`] on any failure.
pub fn polarity_time(line: &str) -> (String, String) {
    match tokenize(line) {
        Some(pair) => pair,
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

fn tokenize(line: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let timestamp = strip_affixes(tokens.get(TIMESTAMP_TOKEN_INDEX)?);

    // Backward scan, skipping the trailing closing-tag token. The scan start
    // itself being out of range counts as failure, same as a missing marker.
    let mut it = tokens.len().checked_sub(2)?;
    let mut collected: Vec<&str> = Vec::new();
    let mut polarity = None;
    let mut state = State::ScanningFromEnd;
    loop {
        state = match state {
            State::ScanningFromEnd | State::CollectingPolarity => {
                if tokens[it] == SIDE_MARKER {
                    State::FoundMarker
                } else {
                    collected.push(tokens[it]);
                    it = it.checked_sub(1)?;
                    State::CollectingPolarity
                }
            }
            State::FoundMarker => {
                collected.reverse();
                polarity = Some(collected.join(" "));
                State::Done
            }
            State::Done => break,
        };
    }

    Some((timestamp, polarity?))
}

/// Strip the fixed prefix and suffix by character count. Too-short tokens
/// yield an empty string rather than a failure.
fn strip_affixes(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= TIMESTAMP_PREFIX_LEN + TIMESTAMP_SUFFIX_LEN {
        return String::new();
    }
    chars[TIMESTAMP_PREFIX_LEN..chars.len() - TIMESTAMP_SUFFIX_LEN]
        .iter()
        .collect()
}
