/// Selector that appends blanks instead of itself.
pub const BLANK_SELECTOR: u8 = b'0';

/// Selector that truncates the tail of the buffer.
pub const TRUNCATE_SELECTOR: u8 = b'1';

/// One `(count, selector)` directive.
///
/// The selector decides what the count means; see [`Operation::edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct Operation {
    /// How many times the edit is repeated.
    pub count: usize,
    /// The single-byte selector.
    pub selector: u8,
}

/// The edit an [`Operation`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Append the given byte.
    Append(u8),
    /// Append the blank (space) byte.
    AppendBlank,
    /// Remove bytes from the tail, clamped to the buffer length.
    Truncate,
}

impl Operation {
    /// Create an operation from a raw count and selector.
    #[must_use]
    pub const fn new(count: usize, selector: u8) -> Self {
        Self { count, selector }
    }

    /// Append `byte` `count` times.
    ///
    /// `byte` is taken as the selector verbatim, so passing
    /// [`BLANK_SELECTOR`] or [`TRUNCATE_SELECTOR`] does not append those
    /// digits. Use [`Operation::new`] to make that explicit.
    #[must_use]
    pub const fn append(count: usize, byte: u8) -> Self {
        Self::new(count, byte)
    }

    /// Append `count` blanks.
    #[must_use]
    pub const fn blank(count: usize) -> Self {
        Self::new(count, BLANK_SELECTOR)
    }

    /// Truncate up to `count` bytes from the tail.
    #[must_use]
    pub const fn truncate(count: usize) -> Self {
        Self::new(count, TRUNCATE_SELECTOR)
    }

    /// Resolve the selector into an [`Edit`].
    ///
    /// Every selector other than `'0'` and `'1'` is checked first and appends
    /// itself; only then is `'0'` (blank) told apart from `'1'` (truncate).
    #[must_use]
    pub const fn edit(&self) -> Edit {
        match self.selector {
            c if c != BLANK_SELECTOR && c != TRUNCATE_SELECTOR => Edit::Append(c),
            BLANK_SELECTOR => Edit::AppendBlank,
            _ => Edit::Truncate,
        }
    }
}

impl From<(usize, u8)> for Operation {
    fn from((count, selector): (usize, u8)) -> Self {
        Self::new(count, selector)
    }
}
