//! Assembly of one documented operation from a file's annotations.
//!
//! Annotations are folded in file order by [`OperationBuilder`]. Scalar fields
//! are last-write-wins, list fields keep every entry in encounter order, and a
//! field whose text cannot be decoded is dropped. The one exception is a
//! malformed `@Router`, which fails the whole record.

use crate::annotation::{AnnotationTag, RawAnnotation};
use crate::error::{DecodeError, Result};
use crate::fields::{parse_param, parse_response, parse_router, Parameter, Response};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Everything documented about a single API operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// HTTP method as written in `@Router`; not normalized
    pub method: String,
    pub path: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub accept: Vec<String>,
    pub produce: Vec<String>,
    pub params: Vec<Parameter>,
    pub responses: Vec<Response>,
}

/// Incremental builder for an [`OperationSpec`].
#[derive(Debug, Default)]
pub struct OperationBuilder {
    spec: OperationSpec,
}

impl OperationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one annotation into the operation.
    ///
    /// # Errors
    ///
    /// Only a `@Router` annotation without a method fails; every other
    /// undecodable field is dropped.
    pub fn add_annotation(&mut self, annotation: &RawAnnotation) -> Result<()> {
        let text = &annotation.text;
        match annotation.tag {
            AnnotationTag::Summary => self.spec.summary = text.clone(),
            AnnotationTag::Description => self.spec.description = text.clone(),
            AnnotationTag::Tags => self.spec.tags.push(text.clone()),
            AnnotationTag::Accept => self.spec.accept.push(text.clone()),
            AnnotationTag::Produce => self.spec.produce.push(text.clone()),
            AnnotationTag::Param => match parse_param(text) {
                Ok(param) => self.spec.params.push(param),
                Err(e) => debug!("Dropping @Param: {}", e),
            },
            AnnotationTag::Success | AnnotationTag::Failure => {
                match parse_response(annotation.tag, text) {
                    Ok(response) => self.spec.responses.push(response),
                    Err(e @ DecodeError::InvalidStatusCode { .. }) => {
                        warn!("Error parsing response code in @{} {:?}: {}", annotation.tag, text, e)
                    }
                    Err(e) => debug!("Dropping response: {}", e),
                }
            }
            AnnotationTag::Router => {
                let route = parse_router(text)?;
                self.spec.path = route.path;
                self.spec.method = route.method;
            }
        }
        Ok(())
    }

    pub fn build(self) -> OperationSpec {
        self.spec
    }
}

/// Builds the operation for one file's annotations.
///
/// Returns `Ok(None)` when there are no annotations at all, since such a file
/// documents nothing and produces no output.
pub fn assemble(annotations: &[RawAnnotation]) -> Result<Option<OperationSpec>> {
    if annotations.is_empty() {
        return Ok(None);
    }

    let mut builder = OperationBuilder::new();
    for annotation in annotations {
        builder.add_annotation(annotation)?;
    }
    Ok(Some(builder.build()))
}
