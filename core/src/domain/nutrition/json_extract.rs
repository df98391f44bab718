//! Locating and decoding the JSON value embedded in a free-text completion.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

/// Finds the span of text holding a JSON value delimited by `open`/`close`.
pub trait ExtractJsonSpan {
    fn extract<'a>(&self, raw: &'a str, open: char, close: char) -> Option<&'a str>;
}

/// Takes everything from the first opening delimiter to the last closing one.
///
/// Prose containing a stray delimiter of the same kind breaks the span; the
/// reply is expected to hold exactly one JSON value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLastDelimiter;

impl ExtractJsonSpan for FirstLastDelimiter {
    fn extract<'a>(&self, raw: &'a str, open: char, close: char) -> Option<&'a str> {
        let start = raw.find(open)?;
        let end = raw.rfind(close)?;
        if end < start {
            return None;
        }
        Some(&raw[start..end + close.len_utf8()])
    }
}

pub fn parse_object(raw: &str) -> Result<Map<String, Value>, CoreError> {
    parse_object_with(&FirstLastDelimiter, raw)
}

pub fn parse_array(raw: &str) -> Result<Vec<Value>, CoreError> {
    parse_array_with(&FirstLastDelimiter, raw)
}

pub fn parse_object_with<E: ExtractJsonSpan>(
    extractor: &E,
    raw: &str,
) -> Result<Map<String, Value>, CoreError> {
    match decode_span(extractor, raw, '{', '}')? {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::ParseError(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

pub fn parse_array_with<E: ExtractJsonSpan>(
    extractor: &E,
    raw: &str,
) -> Result<Vec<Value>, CoreError> {
    match decode_span(extractor, raw, '[', ']')? {
        Value::Array(items) => Ok(items),
        other => Err(CoreError::ParseError(format!(
            "expected a JSON array, found {}",
            kind(&other)
        ))),
    }
}

/// Decodes an already extracted value into a typed reply.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| CoreError::ParseError(e.to_string()))
}

fn decode_span<E: ExtractJsonSpan>(
    extractor: &E,
    raw: &str,
    open: char,
    close: char,
) -> Result<Value, CoreError> {
    let span = extractor
        .extract(raw, open, close)
        .ok_or_else(|| CoreError::ParseError(format!("no `{open}...{close}` span in reply")))?;

    serde_json::from_str(span).map_err(|e| CoreError::ParseError(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
