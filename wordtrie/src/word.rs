//! # Word validation
//!
//! Every word-taking trie operation accepts anything convertible into a
//! [`Word`]. Conversion is where input is checked: an absent value or one that
//! is not a character sequence fails with `ErrorKind::InvalidInput` before the
//! tree is touched.

use std::fmt;
use std::str::Chars;

use serde_json::Value;
use wordtrie_error::Error;

use crate::error::WordError;

/// A validated word: a borrowed sequence of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word<'a>(&'a str);

impl<'a> Word<'a> {
    /// Wrap a string slice. Every `&str` is a valid word, including `""`.
    pub const fn new(word: &'a str) -> Self {
        Word(word)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Characters of the word, in order
    pub fn chars(&self) -> Chars<'a> {
        self.0.chars()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Build the `InvalidInput` error for a rejected word
fn rejected(cause: WordError) -> Error {
    Error::invalid_input(cause.to_string())
        .with_operation("word::parse")
        .with_context("reason", cause.reason())
        .set_source(cause)
}

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> TryFrom<&'a str> for Word<'a> {
    type Error = Error;

    fn try_from(word: &'a str) -> Result<Self, Self::Error> {
        Ok(Word(word))
    }
}

impl<'a> TryFrom<&'a String> for Word<'a> {
    type Error = Error;

    fn try_from(word: &'a String) -> Result<Self, Self::Error> {
        Ok(Word(word.as_str()))
    }
}

impl<'a> TryFrom<Option<&'a str>> for Word<'a> {
    type Error = Error;

    fn try_from(word: Option<&'a str>) -> Result<Self, Self::Error> {
        word.map(Word).ok_or_else(|| rejected(WordError::Absent))
    }
}

impl<'a> TryFrom<&'a [u8]> for Word<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        std::str::from_utf8(bytes)
            .map(Word)
            .map_err(|err| rejected(WordError::from(err)))
    }
}

impl<'a> TryFrom<&'a Value> for Word<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(word) => Ok(Word(word.as_str())),
            Value::Null => Err(rejected(WordError::Absent)),
            other => Err(rejected(WordError::NotText { found: json_type(other) })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wordtrie_error::ErrorKind;

    #[test]
    fn test_str_is_always_valid() {
        let word = Word::try_from("hello").unwrap();
        assert_eq!(word.as_str(), "hello");
        assert_eq!(word.chars().count(), 5);

        let empty = Word::try_from("").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_absent_option() {
        let err = Word::try_from(None::<&str>).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.operation(), "word::parse");
        assert_eq!(err.context()[0], ("reason", "absent".to_string()));

        assert_eq!(Word::try_from(Some("x")).unwrap(), Word::new("x"));
    }

    #[test]
    fn test_bytes_must_be_utf8() {
        assert_eq!(Word::try_from("héllo".as_bytes()).unwrap().as_str(), "héllo");

        let bad: &[u8] = &[b'a', 0xff, b'b'];
        let err = Word::try_from(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let cause = err.source_ref().unwrap().downcast_ref::<WordError>().unwrap();
        assert!(matches!(cause, WordError::InvalidUtf8(_)));
    }

    #[test]
    fn test_json_values() {
        let value = json!("cat");
        assert_eq!(Word::try_from(&value).unwrap().as_str(), "cat");

        let err = Word::try_from(&json!(null)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.source_ref().unwrap().downcast_ref::<WordError>(),
            Some(&WordError::Absent)
        );

        for (value, found) in [
            (json!(42), "number"),
            (json!(true), "boolean"),
            (json!(["a"]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            let err = Word::try_from(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert_eq!(err.message(), format!("expected a string, found {}", found));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Word::new("ant").to_string(), "ant");
    }
}
