//! Incremental reader for the textual script format.
//!
//! A script is a header of two integers, the window size `k` and the record
//! count `q`, followed by `q` records of a count `n` and a single-character
//! selector `c`:
//!
//! ```text
//! 4 2
//! 5 x
//! 3 0
//! ```
//!
//! Tokens are separated by ASCII whitespace. A selector may directly follow
//! its count (`5x`), but a digit selector needs a separator since digits
//! extend the count.
//!
//! [`ScriptReader`] accepts input in arbitrary chunks. Each call to
//! [`feed`](ScriptReader::feed) appends to the unread input; iterating the
//! reader then yields every event that is complete so far. A number that
//! reaches the end of the fed input stays pending, since the next chunk may
//! extend it. [`finish`](ScriptReader::finish) closes the input and resolves
//! whatever is still pending.

mod buffer;
mod error;

use alloc::{string::String, vec::Vec};

use bstr::BString;
use buffer::Buffer;
pub use error::{ScriptError, SyntaxError};

use crate::{editor::process, operation::Operation, options::ScriptOptions};

/// An item read from a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    /// The header, always the first event.
    Header {
        /// Number of trailing bytes to emit.
        window: usize,
        /// Number of records that follow.
        operations: usize,
    },
    /// One record.
    Operation(Operation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    Window,
    RecordTotal,
    Count,
    Selector,
    Done,
    Error,
}

/// Streaming script reader.
///
/// ```rust
/// use tailbuf::{Operation, ScriptEvent, ScriptOptions, ScriptReader};
///
/// let mut reader = ScriptReader::new(ScriptOptions::default());
/// reader.feed("4 1\n1");
/// let first: Vec<_> = reader.by_ref().collect();
/// assert_eq!(
///     first,
///     vec![Ok(ScriptEvent::Header { window: 4, operations: 1 })]
/// );
///
/// reader.feed("2 z");
/// let rest: Vec<_> = reader.finish().collect();
/// assert_eq!(rest, vec![Ok(ScriptEvent::Operation(Operation::append(12, b'z')))]);
/// ```
#[derive(Debug)]
pub struct ScriptReader {
    source: Buffer,
    /// Digits of the number being read.
    token: String,
    token_start: (usize, usize),
    options: ScriptOptions,
    state: ReadState,
    end_of_input: bool,
    window: usize,
    remaining: usize,
    count: usize,
    line: usize,
    column: usize,
}

impl ScriptReader {
    /// Create a reader with no input yet.
    #[must_use]
    pub fn new(options: ScriptOptions) -> Self {
        Self {
            source: Buffer::new(),
            token: String::new(),
            token_start: (1, 1),
            options,
            state: ReadState::Window,
            end_of_input: false,
            window: 0,
            remaining: 0,
            count: 0,
            line: 1,
            column: 1,
        }
    }

    /// Append a chunk of input. Iterate the reader to collect the events it
    /// completes.
    pub fn feed(&mut self, chunk: &str) {
        if matches!(self.state, ReadState::Error) {
            return;
        }
        self.source.push(chunk);
    }

    /// Close the input and iterate the remaining events.
    #[must_use]
    pub fn finish(mut self) -> ClosedScriptReader {
        self.end_of_input = true;
        ClosedScriptReader { reader: self }
    }

    /// Whether the header and every declared record have been read.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, ReadState::Done)
    }

    fn next_event(&mut self) -> Option<Result<ScriptEvent, ScriptError>> {
        loop {
            match self.state {
                ReadState::Error => return None,
                ReadState::Done => return self.trailing_input().map(Err),
                ReadState::Selector => return self.read_selector(),
                ReadState::Window | ReadState::RecordTotal | ReadState::Count => {
                    let value = match self.read_number()? {
                        Ok(value) => value,
                        Err(err) => return Some(Err(err)),
                    };
                    match self.state {
                        ReadState::Window => {
                            self.window = value;
                            self.state = ReadState::RecordTotal;
                        }
                        ReadState::RecordTotal => {
                            log::debug!("script header: window {}, {value} operations", self.window);
                            self.remaining = value;
                            self.state = if value == 0 {
                                ReadState::Done
                            } else {
                                ReadState::Count
                            };
                            return Some(Ok(ScriptEvent::Header {
                                window: self.window,
                                operations: value,
                            }));
                        }
                        _ => {
                            self.count = value;
                            self.state = ReadState::Selector;
                        }
                    }
                }
            }
        }
    }

    /// `None` means more input is needed to finish the number.
    fn read_number(&mut self) -> Option<Result<usize, ScriptError>> {
        if self.token.is_empty() {
            self.skip_whitespace();
            match self.source.peek() {
                None if self.end_of_input => {
                    return Some(Err(self.fail(SyntaxError::UnexpectedEndOfInput)));
                }
                None => return None,
                Some(c) if !c.is_ascii_digit() => {
                    return Some(Err(self.fail(SyntaxError::InvalidCharacter(c))));
                }
                Some(_) => self.token_start = (self.line, self.column),
            }
        }

        self.column += self
            .source
            .copy_while(&mut self.token, |c| c.is_ascii_digit());
        if self.source.peek().is_none() && !self.end_of_input {
            return None;
        }

        // Only digits were copied, so parsing can fail only on overflow
        let parsed = self.token.parse::<usize>();
        self.token.clear();
        Some(parsed.map_err(|_| {
            let (line, column) = self.token_start;
            self.fail_at(SyntaxError::NumberOutOfRange, line, column)
        }))
    }

    fn read_selector(&mut self) -> Option<Result<ScriptEvent, ScriptError>> {
        self.skip_whitespace();
        let Some(c) = self.source.peek() else {
            if self.end_of_input {
                return Some(Err(self.fail(SyntaxError::UnexpectedEndOfInput)));
            }
            return None;
        };
        if !c.is_ascii() {
            return Some(Err(self.fail(SyntaxError::NonAsciiSelector(c))));
        }
        self.advance();

        let mut selector = [0; 1];
        c.encode_utf8(&mut selector);
        let operation = Operation::new(self.count, selector[0]);

        self.remaining -= 1;
        self.state = if self.remaining == 0 {
            ReadState::Done
        } else {
            ReadState::Count
        };
        Some(Ok(ScriptEvent::Operation(operation)))
    }

    fn trailing_input(&mut self) -> Option<ScriptError> {
        if !self.options.reject_trailing_input {
            self.source.clear();
            return None;
        }
        self.skip_whitespace();
        let c = self.source.peek()?;
        Some(self.fail(SyntaxError::TrailingInput(c)))
    }

    fn skip_whitespace(&mut self) {
        while self.source.peek().is_some_and(is_separator) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Some(c) = self.source.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn fail(&mut self, source: SyntaxError) -> ScriptError {
        self.fail_at(source, self.line, self.column)
    }

    fn fail_at(&mut self, source: SyntaxError, line: usize, column: usize) -> ScriptError {
        self.state = ReadState::Error;
        self.source.clear();
        ScriptError {
            source,
            line,
            column,
        }
    }
}

impl Iterator for ScriptReader {
    type Item = Result<ScriptEvent, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// A [`ScriptReader`] whose input has ended.
#[derive(Debug)]
pub struct ClosedScriptReader {
    reader: ScriptReader,
}

impl ClosedScriptReader {
    /// Whether the header and every declared record have been read.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.reader.is_complete()
    }
}

impl Iterator for ClosedScriptReader {
    type Item = Result<ScriptEvent, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_event()
    }
}

/// ASCII whitespace, including vertical tab.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// A fully read script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    /// Number of trailing bytes to emit.
    pub window: usize,
    /// Records in input order.
    pub operations: Vec<Operation>,
}

impl Script {
    /// Read a whole script with default options.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScriptError`] in `text`.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        Self::parse_with_options(text, ScriptOptions::default())
    }

    /// Read a whole script.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScriptError`] in `text`.
    pub fn parse_with_options(text: &str, options: ScriptOptions) -> Result<Self, ScriptError> {
        let mut reader = ScriptReader::new(options);
        reader.feed(text);

        let mut script = Self::default();
        for event in reader.finish() {
            match event? {
                ScriptEvent::Header { window, operations } => {
                    script.window = window;
                    // Every record takes at least two characters
                    script.operations.reserve(operations.min(text.len() / 2));
                }
                ScriptEvent::Operation(operation) => script.operations.push(operation),
            }
        }
        Ok(script)
    }

    /// Apply the operations and return the normalized window.
    #[must_use]
    pub fn run(&self) -> BString {
        process(self.window, self.operations.iter().copied())
    }
}
