use crate::annotation::AnnotationTag;
use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    FileRead { file: PathBuf, source: std::io::Error },
    ParseError { file: PathBuf, line: usize, message: String },
    AnnotationDecode(DecodeError),
    OutputWrite { file: PathBuf, source: std::io::Error },
    InvalidArgument(String),
    SerializationError(String),
}

/// Failure to decode the text of a single annotation into its typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The text does not fit the positional pattern expected for the tag
    PatternMismatch { tag: AnnotationTag, text: String },
    /// The leading status code matched the pattern but is not an integer
    InvalidStatusCode { code: String, message: String },
    /// A `@Router` text without a method after the path
    MalformedRouterAnnotation(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FileRead { file, source } => {
                write!(f, "Error reading file {}: {}", file.display(), source)
            }
            Error::ParseError { file, line, message } => {
                write!(f, "Error parsing file {}:{}: {}", file.display(), line, message)
            }
            Error::AnnotationDecode(e) => write!(f, "Error decoding annotation: {}", e),
            Error::OutputWrite { file, source } => {
                write!(f, "Error writing to output file {}: {}", file.display(), source)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeError::PatternMismatch { tag, text } => {
                write!(f, "@{} text does not match the expected pattern: {:?}", tag, text)
            }
            DecodeError::InvalidStatusCode { code, message } => {
                write!(f, "invalid response code {:?}: {}", code, message)
            }
            DecodeError::MalformedRouterAnnotation(text) => {
                write!(f, "@Router needs a path and a method, got {:?}", text)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileRead { source, .. } | Error::OutputWrite { source, .. } => Some(source),
            Error::AnnotationDecode(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::AnnotationDecode(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON serialization failed: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML serialization failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_file_and_line() {
        let err = Error::ParseError {
            file: PathBuf::from("handlers/user.go"),
            line: 12,
            message: "comment not terminated".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error parsing file handlers/user.go:12: comment not terminated"
        );
    }

    #[test]
    fn test_decode_error_converts_and_keeps_source() {
        let err: Error = DecodeError::MalformedRouterAnnotation("/users".to_string()).into();
        assert!(matches!(err, Error::AnnotationDecode(_)));
        assert!(err.to_string().contains("/users"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_output_write_source_is_io_error() {
        let err = Error::OutputWrite {
            file: PathBuf::from("api_spec.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Error writing to output file api_spec.md"));
        assert!(err.source().is_some());
    }
}
