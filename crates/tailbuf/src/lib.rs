//! A command-driven byte buffer editor.
//!
//! A [`BufferEditor`] applies a stream of [`Operation`]s (append a byte `n`
//! times, append `n` blanks, or truncate `n` bytes from the tail) and, once
//! finished, exposes a trailing window of the buffer in which the run of
//! trailing blanks has been rewritten to underscores.
//!
//! The textual input format (`k q` followed by `q` records of `n c`) is read
//! incrementally by [`ScriptReader`], or all at once by [`Script::parse`].
//!
//! ```rust
//! use tailbuf::{Operation, process};
//!
//! let out = process(4, [Operation::append(5, b'x'), Operation::blank(3)]);
//! assert_eq!(out, "x___");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "fuzzing"))]
extern crate std;

mod editor;
mod operation;
mod options;
mod script;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use editor::{BufferEditor, FinalizedBuffer, normalize_trailing_blanks, process};
pub use operation::{BLANK_SELECTOR, Edit, Operation, TRUNCATE_SELECTOR};
pub use options::{EditorOptions, ScriptOptions};
pub use script::{ClosedScriptReader, Script, ScriptError, ScriptEvent, ScriptReader, SyntaxError};
