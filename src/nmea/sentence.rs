// src/nmea/sentence.rs
//! Splitting sentences into a type tag and fields

use crate::error::{NmeaError, Result};

/// A sentence split into its type tag (`GPGLL`, without `$`) and its
/// comma-separated fields, with the `*checksum` suffix removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NmeaSentence {
    pub sentence_type: String,
    pub fields: Vec<String>,
}

impl NmeaSentence {
    pub fn new(sentence_type: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            sentence_type: sentence_type.into(),
            fields,
        }
    }

    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(NmeaError::MissingField(index))
    }

    /// First character of a field, used for `N`/`S`/`E`/`W` indicators.
    pub fn leading_char(&self, index: usize) -> Option<char> {
        self.fields.get(index).and_then(|f| f.chars().next())
    }
}

/// Split a sentence on commas. Does not validate the checksum.
///
/// Empty fields between consecutive commas are kept. Each token is cut at
/// its first `*`, and every `$` is removed from the type tag. An empty
/// input yields an empty tag and no fields. A comma ending the input does
/// not open a further empty field.
pub fn decompose_sentence(sentence: &str) -> NmeaSentence {
    let mut tokens = sentence
        .strip_suffix(',')
        .unwrap_or(sentence)
        .split(',')
        .map(|token| token.split('*').next().unwrap_or_default());

    let sentence_type = tokens.next().unwrap_or_default().replace('$', "");
    let fields = tokens.map(str::to_string).collect();

    NmeaSentence {
        sentence_type,
        fields,
    }
}
