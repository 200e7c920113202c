//! DataVals tokenization.
//!
//! Splits a raw DataVals string into entries. Commas separate entries
//! only at bracket depth zero, so a nested `DependFuncVals:[...]` value
//! stays intact as one entry.

use mstgraph_foundation::{DecodeFailure, Error};

/// One entry between top-level separators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry<'a> {
    /// A bare value whose field is chosen by position.
    Positional(&'a str),
    /// A `Name:Value` pair. The value may be empty.
    Keyed {
        /// Text before the first `:`.
        key: &'a str,
        /// Text after the first `:`.
        value: &'a str,
    },
}

impl<'a> Entry<'a> {
    fn classify(text: &'a str) -> Self {
        match text.split_once(':') {
            Some((key, value)) => Entry::Keyed {
                key: key.trim(),
                value: value.trim(),
            },
            None => Entry::Positional(text),
        }
    }
}

/// A token the tokenizer refused, before it is tied to the full input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejected<'a> {
    /// The offending text.
    pub token: &'a str,
    /// Why it was refused.
    pub failure: DecodeFailure,
}

impl<'a> Rejected<'a> {
    /// Creates a rejection.
    #[must_use]
    pub const fn new(token: &'a str, failure: DecodeFailure) -> Self {
        Self { token, failure }
    }

    /// Converts into an error naming the complete input string.
    #[must_use]
    pub fn into_error(self, raw: &str) -> Error {
        Error::decode(raw, self.token, self.failure)
    }
}

/// Splits DataVals strings into entries.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes one DataVals string.
    ///
    /// - `[a,b,c]` yields one entry per comma-separated element
    /// - `[]` yields no entries
    /// - text without an opening bracket is a single implicit entry
    ///
    /// # Errors
    ///
    /// Rejects empty input, empty elements, and unpaired brackets.
    pub fn entries(input: &str) -> Result<Vec<Entry<'_>>, Rejected<'_>> {
        let text = input.trim();
        if text.is_empty() {
            return Err(Rejected::new(input, DecodeFailure::EmptyEntry));
        }

        let Some(inner) = text.strip_prefix('[') else {
            check_balanced(text)?;
            return Ok(vec![Entry::classify(text)]);
        };
        let Some(body) = inner.strip_suffix(']') else {
            return Err(Rejected::new(text, DecodeFailure::UnbalancedBrackets));
        };
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        split_top_level(body)?
            .into_iter()
            .map(|piece| {
                let piece = piece.trim();
                if piece.is_empty() {
                    Err(Rejected::new(body, DecodeFailure::EmptyEntry))
                } else {
                    Ok(Entry::classify(piece))
                }
            })
            .collect()
    }
}

/// Splits on commas that are not inside brackets.
fn split_top_level(body: &str) -> Result<Vec<&str>, Rejected<'_>> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in body.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(Rejected::new(body, DecodeFailure::UnbalancedBrackets))?;
            }
            ',' if depth == 0 => {
                pieces.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Rejected::new(body, DecodeFailure::UnbalancedBrackets));
    }
    pieces.push(&body[start..]);
    Ok(pieces)
}

fn check_balanced(text: &str) -> Result<(), Rejected<'_>> {
    split_top_level(text).map(|_| ())
}
