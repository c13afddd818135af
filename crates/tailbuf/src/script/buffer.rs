#![expect(clippy::inline_always)]

use alloc::{collections::VecDeque, string::String};

/// Unread script input carried between feeds.
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    data: VecDeque<char>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        // Byte length is an upper bound on the number of chars
        self.data.reserve(text.len());
        self.data.extend(text.chars());
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<char> {
        self.data.front().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Move the longest prefix matching `predicate` into `dst`.
    #[inline]
    pub(crate) fn copy_while<F>(&mut self, dst: &mut String, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let prefix = self.data.iter().take_while(|&&c| predicate(c)).count();
        dst.extend(self.data.drain(..prefix));
        prefix
    }
}

impl Iterator for Buffer {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.data.pop_front()
    }
}
