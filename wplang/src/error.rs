use thiserror::Error;

/// A syntax error located by a byte range into the program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line of `start`.
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Every syntax error found in one program, in source order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Program text contains {} syntax error(s); the first is at {}",
    .0.len(),
    .0.first().map(ToString::to_string).unwrap_or_default()
)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }
}
