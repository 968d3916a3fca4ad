//! Typed field parsers for `@Param`, `@Success`/`@Failure` and `@Router` text.
//!
//! Each parser is a small positional pattern matcher. None of them panic; a
//! text that does not fit comes back as a [`DecodeError`] and the caller
//! decides whether to drop it, log it, or fail the record.

use crate::annotation::AnnotationTag;
use crate::error::DecodeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// name in type required description
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"([[:alnum:]]+)[[:space:]]+([[:alnum:]]+)[[:space:]]+([[:alnum:]]+)",
        r"[[:space:]]+(true|false)[[:space:]]+(.*)"
    ))
    .unwrap()
});

// code {wrapper} remainder
static RE_RESPONSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})\s*(\{[^\}]*\})?\s*(.*)$").unwrap());

/// A single `@Param` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Where the parameter lives (path, query, header, body, formData)
    #[serde(rename = "in")]
    pub location: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: String,
}

/// A single `@Success` or `@Failure` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    /// Bracketed wrapper such as `{object}` or `{array}`, empty when absent
    pub model_wrapper: String,
    pub data_type: String,
    pub description: String,
}

/// Path and method from a `@Router` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub method: String,
}

/// Parses `name in type true|false description`.
///
/// The first three fields are ASCII alphanumeric only, so a type such as
/// `[]string` does not match. The pattern is not anchored: the first run of
/// five fields that fits wins, so `user_id path int true ...` yields a
/// parameter named `id`.
pub fn parse_param(text: &str) -> Result<Parameter, DecodeError> {
    let caps = RE_PARAM
        .captures(text)
        .ok_or_else(|| DecodeError::PatternMismatch {
            tag: AnnotationTag::Param,
            text: text.to_string(),
        })?;

    Ok(Parameter {
        name: caps[1].to_string(),
        location: caps[2].to_string(),
        param_type: caps[3].to_string(),
        required: &caps[4] == "true",
        description: caps[5].to_string(),
    })
}

/// Parses `code [{wrapper}] dataType description`.
///
/// The remainder after the optional wrapper is split on its first whitespace
/// run: the first token becomes the data type and the rest the description.
/// The split is positional, so `404 not found` gives data type `not`. `tag`
/// is the annotation the text came from (`@Success` or `@Failure`).
pub fn parse_response(tag: AnnotationTag, text: &str) -> Result<Response, DecodeError> {
    let caps = RE_RESPONSE
        .captures(text)
        .ok_or_else(|| DecodeError::PatternMismatch {
            tag,
            text: text.to_string(),
        })?;

    // \d also admits non-ASCII digits, which do not parse as an integer
    let code = &caps[1];
    let status_code = code
        .parse::<u16>()
        .map_err(|e| DecodeError::InvalidStatusCode {
            code: code.to_string(),
            message: e.to_string(),
        })?;

    let model_wrapper = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let remainder = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
    let (data_type, description) = match remainder.split_once(char::is_whitespace) {
        Some((data_type, description)) => (data_type, description.trim_start()),
        None => (remainder, ""),
    };

    Ok(Response {
        status_code,
        model_wrapper: model_wrapper.to_string(),
        data_type: data_type.to_string(),
        description: description.to_string(),
    })
}

/// Splits `path method` on the first whitespace run.
///
/// Everything after the path is the method, stored verbatim (`[get]` stays
/// `[get]`). A text with no method is a [`DecodeError::MalformedRouterAnnotation`].
pub fn parse_router(text: &str) -> Result<Route, DecodeError> {
    let trimmed = text.trim();
    let (path, method) = trimmed
        .split_once(char::is_whitespace)
        .map(|(path, method)| (path.trim(), method.trim()))
        .filter(|(path, method)| !path.is_empty() && !method.is_empty())
        .ok_or_else(|| DecodeError::MalformedRouterAnnotation(text.to_string()))?;

    Ok(Route {
        path: path.to_string(),
        method: method.to_string(),
    })
}
