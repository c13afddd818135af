/// Configuration options for [`BufferEditor`](crate::BufferEditor).
///
/// # Default
///
/// No capacity is reserved up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorOptions {
    /// Number of bytes to reserve when the buffer is created.
    ///
    /// This is only a hint; the buffer grows as needed either way.
    ///
    /// # Default
    ///
    /// `0`
    pub capacity: usize,
}

/// Configuration options for [`ScriptReader`](crate::ScriptReader).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOptions {
    /// Whether input after the last declared record is an error.
    ///
    /// By default everything following the `q`-th record is ignored, so a
    /// script may carry trailing notes or a second script. When `true`, any
    /// non-whitespace character after the last record yields
    /// [`SyntaxError::TrailingInput`](crate::SyntaxError::TrailingInput).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_trailing_input: bool,
}
