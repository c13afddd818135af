use alloc::vec::Vec;

/// Split `text` at the char boundaries derived from `splits`.
///
/// Each split picks the next chunk length as `1 + split % remaining`, so any
/// sequence of `usize`s maps to a valid partition. Whatever is left once the
/// splits run out becomes the last chunk.
pub(crate) fn partition<'a>(text: &'a str, splits: &[usize]) -> Vec<&'a str> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(core::iter::once(text.len()))
        .collect();
    let total = boundaries.len() - 1;

    let mut chunks = Vec::new();
    let mut start = 0;
    for split in splits {
        let remaining = total - start;
        if remaining == 0 {
            break;
        }
        let end = start + 1 + split % remaining;
        chunks.push(&text[boundaries[start]..boundaries[end]]);
        start = end;
    }
    if start < total {
        chunks.push(&text[boundaries[start]..]);
    }
    chunks
}

#[test]
fn partition_covers_text() {
    let text = "12 3\n\u{e9}x";
    let chunks = partition(text, &[0, 2]);
    assert_eq!(chunks, alloc::vec!["1", "2 3", "\n\u{e9}x"]);
    assert_eq!(chunks.concat(), text);
    assert!(partition("", &[3]).is_empty());
}
