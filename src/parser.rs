use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Comment collector for Go source files.
///
/// `CommentParser` is not a Go parser. It walks the source once, skipping
/// string, raw string and rune literals, and records every `//` line comment
/// and `/* */` block comment in source order. Only lexical problems that would
/// make comment boundaries ambiguous (an unterminated comment or literal) are
/// reported as parse errors.
///
/// # Example
///
/// ```no_run
/// use swamd::parser::CommentParser;
/// use std::path::Path;
///
/// let parsed = CommentParser::parse_file(Path::new("handlers/user.go")).unwrap();
/// println!("Found {} comments", parsed.comments.len());
/// ```
pub struct CommentParser;

/// A source file reduced to its comments.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Comments in source order
    pub comments: Vec<Comment>,
}

/// A single comment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The raw token, delimiters included
    pub text: String,
    /// 1-based line the comment starts on
    pub line: usize,
}

impl Comment {
    /// The comment text without its `//` or `/* */` delimiters.
    pub fn body(&self) -> &str {
        if let Some(rest) = self.text.strip_prefix("//") {
            rest
        } else if let Some(rest) = self.text.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            &self.text
        }
    }
}

impl CommentParser {
    /// Reads a file and collects its comments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read (including
    /// invalid UTF-8) and [`Error::ParseError`] if a comment or literal is not
    /// terminated.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
            file: path.to_path_buf(),
            source,
        })?;

        let comments = Self::parse_source(&content).map_err(|(line, message)| {
            Error::ParseError {
                file: path.to_path_buf(),
                line,
                message,
            }
        })?;

        debug!("Found {} comments in {}", comments.len(), path.display());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            comments,
        })
    }

    /// Collects comments from Go source text.
    ///
    /// On failure returns the 1-based line where the offending token starts
    /// together with a message.
    pub fn parse_source(source: &str) -> std::result::Result<Vec<Comment>, (usize, String)> {
        let bytes = source.as_bytes();
        let mut comments = Vec::new();
        let mut line = 1;
        let mut i = 0;

        // Every delimiter is ASCII, so byte offsets always land on char boundaries.
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    line += 1;
                    i += 1;
                }
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    let end = source[i..].find('\n').map_or(bytes.len(), |n| i + n);
                    let text = source[i..end].trim_end_matches('\r');
                    comments.push(Comment {
                        text: text.to_string(),
                        line,
                    });
                    i = end;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    let close = source[i + 2..]
                        .find("*/")
                        .ok_or_else(|| (line, "comment not terminated".to_string()))?;
                    let end = i + 2 + close + 2;
                    let text = &source[i..end];
                    comments.push(Comment {
                        text: text.to_string(),
                        line,
                    });
                    line += text.matches('\n').count();
                    i = end;
                }
                b'`' => {
                    let close = source[i + 1..]
                        .find('`')
                        .ok_or_else(|| (line, "raw string literal not terminated".to_string()))?;
                    let end = i + 1 + close + 1;
                    line += source[i..end].matches('\n').count();
                    i = end;
                }
                quote @ (b'"' | b'\'') => {
                    i = Self::skip_quoted(bytes, i, quote)
                        .ok_or_else(|| (line, Self::unterminated_message(quote)))?;
                }
                _ => i += 1,
            }
        }

        Ok(comments)
    }

    // Returns the index just past the closing quote. Interpreted strings and
    // rune literals cannot span lines.
    fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
        let mut i = start + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if bytes.get(i + 1) == Some(&b'\n') => return None,
                b'\\' => i += 2,
                b'\n' => return None,
                b if b == quote => return Some(i + 1),
                _ => i += 1,
            }
        }
        None
    }

    fn unterminated_message(quote: u8) -> String {
        if quote == b'"' {
            "string literal not terminated".to_string()
        } else {
            "rune literal not terminated".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    fn texts(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_line_and_block_comments_in_order() {
        let source = "package main\n\n// GetUser godoc\n/* block\n   comment */\nfunc GetUser() {} // trailing\n";
        let comments = CommentParser::parse_source(source).unwrap();

        assert_eq!(
            texts(&comments),
            vec!["// GetUser godoc", "/* block\n   comment */", "// trailing"]
        );
        assert_eq!(comments[0].line, 3);
        assert_eq!(comments[1].line, 4);
        assert_eq!(comments[2].line, 6);
    }

    #[test]
    fn test_comment_markers_inside_literals_are_ignored() {
        let source = r#"package main
var a = "http://example.com // not a comment"
var b = `raw /* not a comment */
still raw // nope`
var c = '/'
var d = "escaped \" // still string"
// real
"#;
        let comments = CommentParser::parse_source(source).unwrap();
        assert_eq!(texts(&comments), vec!["// real"]);
        assert_eq!(comments[0].line, 7);
    }

    #[test]
    fn test_crlf_line_endings() {
        let comments = CommentParser::parse_source("// @Summary ping\r\nfunc Ping() {}\r\n").unwrap();
        assert_eq!(texts(&comments), vec!["// @Summary ping"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = CommentParser::parse_source("package main\n/* never closed\n").unwrap_err();
        assert_eq!(err, (2, "comment not terminated".to_string()));
    }

    #[test]
    fn test_unterminated_string_literal() {
        let err = CommentParser::parse_source("package main\nvar s = \"open\n").unwrap_err();
        assert_eq!(err, (2, "string literal not terminated".to_string()));
    }

    #[test]
    fn test_escaped_newline_ends_string_literal() {
        let source = "package main\nvar s = \"open \\\n\"\n/* closed */\n";
        let err = CommentParser::parse_source(source).unwrap_err();
        assert_eq!(err, (2, "string literal not terminated".to_string()));
    }

    #[test]
    fn test_unterminated_raw_string() {
        let err = CommentParser::parse_source("var s = `open\n").unwrap_err();
        assert_eq!(err.0, 1);
    }

    #[test]
    fn test_comment_body_strips_delimiters() {
        let line = Comment { text: "// @Summary ping".to_string(), line: 1 };
        let block = Comment { text: "/* @Summary ping */".to_string(), line: 1 };
        assert_eq!(line.body(), " @Summary ping");
        assert_eq!(block.body(), " @Summary ping ");
    }

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_temp_file(&temp_dir, "user.go", "package main\n// @Summary get user\n");

        let parsed = CommentParser::parse_file(&file_path).unwrap();
        assert_eq!(parsed.path, file_path);
        assert_eq!(texts(&parsed.comments), vec!["// @Summary get user"]);
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = CommentParser::parse_file(Path::new("/nonexistent/file.go"));
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_parse_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_temp_file(&temp_dir, "bad.go", "package main\n/* open");

        let err = CommentParser::parse_file(&file_path).unwrap_err();
        match err {
            Error::ParseError { file, line, .. } => {
                assert_eq!(file, file_path);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
