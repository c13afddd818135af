use alloc::vec::Vec;
use core::iter;

use bstr::{BStr, BString, ByteSlice};

use crate::{
    operation::{Edit, Operation},
    options::EditorOptions,
};

const BLANK: u8 = b' ';
const FILL: u8 = b'_';

/// Accumulates [`Operation`]s into a byte buffer.
///
/// The editor only grows or shrinks its buffer at the tail. Once all
/// operations are applied, [`finish`](Self::finish) consumes it and returns a
/// [`FinalizedBuffer`] whose trailing blanks have been normalized; no further
/// operations can be applied after that point.
///
/// ```rust
/// use tailbuf::{BufferEditor, Operation};
///
/// let mut editor = BufferEditor::new();
/// editor.apply(Operation::append(3, b'a'));
/// editor.apply(Operation::truncate(2));
/// assert_eq!(editor.finalize(5), "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferEditor {
    buffer: Vec<u8>,
}

impl BufferEditor {
    /// Create an editor with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor, reserving `options.capacity` bytes.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            buffer: Vec::with_capacity(options.capacity),
        }
    }

    /// Apply one operation.
    ///
    /// Never fails: a truncation longer than the buffer empties it.
    pub fn apply(&mut self, operation: Operation) {
        let count = operation.count;
        match operation.edit() {
            Edit::Append(byte) => self.buffer.extend(iter::repeat_n(byte, count)),
            Edit::AppendBlank => self.buffer.extend(iter::repeat_n(BLANK, count)),
            Edit::Truncate => {
                let removed = count.min(self.buffer.len());
                self.buffer.truncate(self.buffer.len() - removed);
            }
        }
        log::trace!("applied {operation:?}, length {}", self.buffer.len());
    }

    /// Apply every operation from `operations` in order.
    pub fn apply_all<I>(&mut self, operations: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for operation in operations {
            self.apply(operation);
        }
    }

    /// Current buffer length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffer as it stands, before normalization.
    #[must_use]
    pub fn contents(&self) -> &BStr {
        self.buffer.as_bstr()
    }

    /// Normalize trailing blanks and stop accepting operations.
    #[must_use]
    pub fn finish(self) -> FinalizedBuffer {
        let mut buffer = self.buffer;
        let rewritten = normalize_trailing_blanks(&mut buffer);
        log::debug!(
            "finished buffer of {} bytes, {rewritten} trailing blanks rewritten",
            buffer.len()
        );
        FinalizedBuffer { buffer }
    }

    /// Finish the buffer and copy out its last `window` bytes.
    #[must_use]
    pub fn finalize(self, window: usize) -> BString {
        BString::from(self.finish().window(window))
    }
}

impl Extend<Operation> for BufferEditor {
    fn extend<T: IntoIterator<Item = Operation>>(&mut self, iter: T) {
        self.apply_all(iter);
    }
}

/// A buffer whose trailing blanks have been normalized.
///
/// Returned by [`BufferEditor::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedBuffer {
    buffer: Vec<u8>,
}

impl FinalizedBuffer {
    /// The last `window` bytes, or the whole buffer if it is shorter.
    #[must_use]
    pub fn window(&self, window: usize) -> &BStr {
        let start = self.buffer.len().saturating_sub(window);
        self.buffer[start..].as_bstr()
    }

    /// The whole normalized buffer.
    #[must_use]
    pub fn contents(&self) -> &BStr {
        self.buffer.as_bstr()
    }

    /// Length of the normalized buffer in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the normalized buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take ownership of the normalized bytes.
    #[must_use]
    pub fn into_inner(self) -> BString {
        BString::from(self.buffer)
    }
}

/// Rewrite the run of blanks at the end of `buffer` to underscores.
///
/// Scanning stops at the first non-blank byte from the end, so leading and
/// interior blanks are kept. Returns the number of bytes rewritten; a second
/// call on the same buffer rewrites nothing.
pub fn normalize_trailing_blanks(buffer: &mut [u8]) -> usize {
    let mut rewritten = 0;
    for byte in buffer.iter_mut().rev() {
        if *byte != BLANK {
            break;
        }
        *byte = FILL;
        rewritten += 1;
    }
    rewritten
}

/// Apply `operations` to a fresh editor and return the last `window` bytes
/// of the normalized result.
#[must_use]
pub fn process<I>(window: usize, operations: I) -> BString
where
    I: IntoIterator<Item = Operation>,
{
    let mut editor = BufferEditor::new();
    editor.apply_all(operations);
    editor.finalize(window)
}
