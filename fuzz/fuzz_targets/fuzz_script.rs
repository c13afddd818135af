#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tailbuf::{Operation, Script, ScriptOptions, ScriptReader};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    splits: Vec<u8>,
    strict: bool,
}

fuzz_target!(|input: Input<'_>| {
    let options = ScriptOptions {
        reject_trailing_input: input.strict,
    };
    let whole = Script::parse_with_options(input.text, options);

    // Feed the same text in chunks cut at char boundaries
    let mut reader = ScriptReader::new(options);
    let mut events = Vec::new();
    let mut rest = input.text;
    for &split in &input.splits {
        if rest.is_empty() {
            break;
        }
        let mut at = (usize::from(split) % rest.len()) + 1;
        while !rest.is_char_boundary(at) {
            at += 1;
        }
        let (chunk, tail) = rest.split_at(at);
        reader.feed(chunk);
        events.extend(reader.by_ref());
        rest = tail;
    }
    reader.feed(rest);
    events.extend(reader.by_ref());
    events.extend(reader.finish());

    let chunked: Result<Vec<_>, _> = events.into_iter().collect();
    match (whole, chunked) {
        (Ok(script), Ok(events)) => {
            let operations: Vec<Operation> = events
                .into_iter()
                .filter_map(|event| match event {
                    tailbuf::ScriptEvent::Operation(op) => Some(op),
                    tailbuf::ScriptEvent::Header { .. } => None,
                })
                .collect();
            assert_eq!(script.operations, operations);
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        (whole, chunked) => panic!("whole {whole:?} != chunked {chunked:?}"),
    }
});
