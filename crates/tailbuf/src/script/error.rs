use thiserror::Error;

/// A script could not be read.
///
/// `line` and `column` are 1-based and point at the offending character, or
/// just past the last character for [`SyntaxError::UnexpectedEndOfInput`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ScriptError {
    /// What went wrong.
    pub source: SyntaxError,
    /// Line of the error.
    pub line: usize,
    /// Column of the error, counted in characters.
    pub column: usize,
}

/// The kinds of malformed script input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot start or continue the expected token.
    #[error("invalid character '{0}', expected a non-negative integer")]
    InvalidCharacter(char),
    /// A selector outside the single-byte range.
    #[error("selector '{0}' is not a single-byte character")]
    NonAsciiSelector(char),
    /// An integer that does not fit in `usize`.
    #[error("integer out of range")]
    NumberOutOfRange,
    /// Non-whitespace input after the last record.
    #[error("unexpected character '{0}' after the last operation")]
    TrailingInput(char),
    /// Input ended before the header and all records were read.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
