use alloc::vec::Vec;

use rstest::rstest;

use crate::{BufferEditor, Operation, process};

#[rstest]
#[case::truncate_after_append(5, &[(3, b'a'), (2, b'1')], "a")]
#[case::trailing_blanks_normalized(4, &[(5, b'x'), (3, b'0')], "x___")]
#[case::truncate_past_empty(10, &[(2, b'z'), (10, b'1')], "")]
#[case::leading_blanks_kept(3, &[(1, b'0'), (1, b'0'), (1, b'a')], "  a")]
#[case::empty_buffer(3, &[], "")]
#[case::zero_window(0, &[(4, b'q')], "")]
#[case::all_blank(2, &[(3, b'0')], "__")]
#[case::literal_space_selector(3, &[(1, b'k'), (2, b' ')], "k__")]
#[case::interior_blanks_kept(6, &[(1, b'a'), (2, b'0'), (1, b'b'), (1, b'0')], "a  b_")]
#[case::blank_then_truncate(4, &[(2, b'm'), (3, b'0'), (1, b'1')], "mm__")]
fn windows(#[case] window: usize, #[case] operations: &[(usize, u8)], #[case] expected: &str) {
    let operations: Vec<Operation> = operations.iter().copied().map(Operation::from).collect();
    assert_eq!(process(window, operations), expected);
}

#[test]
fn finalize_is_stable_across_windows() {
    let mut editor = BufferEditor::new();
    editor.extend([Operation::append(5, b'x'), Operation::blank(3)]);
    let finished = editor.finish();
    assert_eq!(finished.contents(), "xxxxx___");
    assert_eq!(finished.window(4), "x___");
    assert_eq!(finished.window(4), finished.window(4));
    assert_eq!(finished.window(100), "xxxxx___");
}
