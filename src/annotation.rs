//! Annotation detection and extraction for comment text.
//!
//! A comment is annotated when it contains `@` immediately followed by one of
//! the recognized keywords. The keyword may appear anywhere in the comment, so
//! prose that mentions `@Summary` inline is also picked up.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_HAS_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(Summary|Description|Tags|Accept|Produce|Param|Success|Failure|Router)").unwrap()
});

static RE_ANNOTATION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"@(Summary|Description|Tags|Accept|Produce|Param|Success|Failure|Router)[[:space:]]+(.*)",
    )
    .unwrap()
});

/// The fixed vocabulary of annotation keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationTag {
    Summary,
    Description,
    Tags,
    Accept,
    Produce,
    Param,
    Success,
    Failure,
    Router,
}

impl AnnotationTag {
    /// Maps a keyword (without the leading `@`) to its tag.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let tag = match keyword {
            "Summary" => AnnotationTag::Summary,
            "Description" => AnnotationTag::Description,
            "Tags" => AnnotationTag::Tags,
            "Accept" => AnnotationTag::Accept,
            "Produce" => AnnotationTag::Produce,
            "Param" => AnnotationTag::Param,
            "Success" => AnnotationTag::Success,
            "Failure" => AnnotationTag::Failure,
            "Router" => AnnotationTag::Router,
            _ => return None,
        };
        Some(tag)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            AnnotationTag::Summary => "Summary",
            AnnotationTag::Description => "Description",
            AnnotationTag::Tags => "Tags",
            AnnotationTag::Accept => "Accept",
            AnnotationTag::Produce => "Produce",
            AnnotationTag::Param => "Param",
            AnnotationTag::Success => "Success",
            AnnotationTag::Failure => "Failure",
            AnnotationTag::Router => "Router",
        }
    }
}

impl fmt::Display for AnnotationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One annotated comment line: the tag and the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    pub tag: AnnotationTag,
    /// Everything after the keyword and its whitespace, trailing whitespace trimmed
    pub text: String,
}

impl RawAnnotation {
    pub fn new(tag: AnnotationTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }
}

/// Returns true if the comment mentions any recognized `@keyword`.
pub fn has_annotation(comment: &str) -> bool {
    RE_HAS_ANNOTATION.is_match(comment)
}

/// Extracts the first `@keyword text` occurrence from a comment.
///
/// A keyword that is not followed by whitespace (e.g. `@Summary` at the very
/// end of the comment, or `@Tagsfoo`) does not count, and the comment yields
/// nothing.
pub fn extract_annotation(comment: &str) -> Option<RawAnnotation> {
    let caps = RE_ANNOTATION_TEXT.captures(comment)?;
    let tag = AnnotationTag::from_keyword(caps.get(1)?.as_str())?;
    let text = caps.get(2)?.as_str().trim_end();
    Some(RawAnnotation::new(tag, text))
}

/// Detects and extracts in one step, the way the scanner consumes comments.
pub fn scan_comment(comment: &str) -> Option<RawAnnotation> {
    if !has_annotation(comment) {
        return None;
    }
    extract_annotation(comment)
}
