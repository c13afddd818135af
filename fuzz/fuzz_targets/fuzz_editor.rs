#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tailbuf::{BufferEditor, Operation};

#[derive(Debug, Arbitrary)]
struct Input {
    window: u16,
    operations: Vec<Operation>,
}

fuzz_target!(|input: Input| {
    let mut editor = BufferEditor::new();
    let mut model: Vec<u8> = Vec::new();

    for raw in &input.operations {
        // Counts stay small so a run cannot allocate gigabytes
        let op = Operation::new(raw.count % 256, raw.selector);
        editor.apply(op);
        match op.selector {
            b'1' => model.truncate(model.len().saturating_sub(op.count)),
            b'0' => model.resize(model.len() + op.count, b' '),
            c => model.resize(model.len() + op.count, c),
        }
        assert_eq!(editor.contents(), model.as_slice());
    }

    let trailing = model.iter().rev().take_while(|&&b| b == b' ').count();
    let keep = model.len() - trailing;
    model[keep..].fill(b'_');

    let finished = editor.finish();
    assert_eq!(finished.contents(), model.as_slice());

    let window = usize::from(input.window);
    let out = finished.window(window);
    assert_eq!(out.len(), window.min(model.len()));
    assert!(model.ends_with(out));
});
