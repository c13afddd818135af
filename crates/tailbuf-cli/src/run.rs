use std::io::{Read, Write};

use anyhow::{Context, Result, bail};
use tailbuf::{BufferEditor, EditorOptions, ScriptEvent, ScriptOptions, ScriptReader};

const CHUNK_SIZE: usize = 8 * 1024;

/// Stream a script from `input` through the editor and write the window,
/// newline terminated, to `output`.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, options: ScriptOptions) -> Result<()> {
    let mut reader = ScriptReader::new(options);
    let mut editor = BufferEditor::with_options(EditorOptions { capacity: CHUNK_SIZE });
    let mut window = 0;

    let mut chunk = vec![0u8; CHUNK_SIZE];
    // Bytes of a UTF-8 sequence split across reads
    let mut carry = 0;
    let mut offset = 0;
    loop {
        let read = input
            .read(&mut chunk[carry..])
            .context("failed to read script")?;
        if read == 0 {
            if carry > 0 {
                bail!("script is not valid UTF-8 at byte {offset}");
            }
            break;
        }
        let filled = carry + read;
        let valid = match std::str::from_utf8(&chunk[..filled]) {
            Ok(text) => text.len(),
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => bail!("script is not valid UTF-8 at byte {}", offset + err.valid_up_to()),
        };
        // `valid` ends on a char boundary
        let text = std::str::from_utf8(&chunk[..valid]).context("script is not valid UTF-8")?;
        reader.feed(text);
        for event in reader.by_ref() {
            apply(event?, &mut editor, &mut window);
        }

        chunk.copy_within(valid..filled, 0);
        carry = filled - valid;
        offset += valid;

        if reader.is_complete() && !options.reject_trailing_input {
            log::debug!("all operations read, ignoring the rest of the input");
            break;
        }
    }
    for event in reader.finish() {
        apply(event?, &mut editor, &mut window);
    }

    log::info!("buffer holds {} bytes, emitting up to {window}", editor.len());
    let out = editor.finalize(window);
    output.write_all(&out).context("failed to write window")?;
    output.write_all(b"\n").context("failed to write window")?;
    output.flush().context("failed to write window")?;
    Ok(())
}

fn apply(event: ScriptEvent, editor: &mut BufferEditor, window: &mut usize) {
    match event {
        ScriptEvent::Header {
            window: k,
            operations,
        } => {
            log::info!("window {k}, {operations} operations");
            *window = k;
        }
        ScriptEvent::Operation(operation) => editor.apply(operation),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use rstest::rstest;

    use super::*;

    /// Yields its data a few bytes at a time to split tokens and characters.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn run_str(input: &[u8], options: ScriptOptions) -> Result<String> {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, options)?;
        Ok(String::from_utf8(out)?)
    }

    #[rstest]
    #[case(b"5 2\n3 a\n2 1\n", "a\n")]
    #[case(b"4 2\n5 x\n3 0\n", "x___\n")]
    #[case(b"10 2\n2 z\n10 1\n", "\n")]
    #[case(b"3 3\n1 0\n1 0\n1 a\n", "  a\n")]
    fn prints_window(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(run_str(input, ScriptOptions::default()).unwrap(), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn trickled_input_matches(#[case] step: usize) {
        let data = "6 3\n12 q\n2 0\n1 1 trailing \u{e9}t\u{e9}".as_bytes();
        let mut out = Vec::new();
        run(Trickle { data, step }, &mut out, ScriptOptions::default()).unwrap();
        assert_eq!(out, b"qqqqq_\n");
    }

    #[test]
    fn malformed_script_is_an_error() {
        let err = run_str(b"3 2\n1 a\n", ScriptOptions::default()).unwrap_err();
        insta::assert_snapshot!(err, @"unexpected end of input at 3:1");
    }

    #[test]
    fn strict_rejects_trailing_text() {
        let strict = ScriptOptions {
            reject_trailing_input: true,
        };
        let err = run_str(b"3 1\n1 a\nmore", strict).unwrap_err();
        insta::assert_snapshot!(err, @"unexpected character 'm' after the last operation at 3:1");
        assert_eq!(run_str(b"3 1\n1 a\n\n", strict).unwrap(), "a\n");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = run_str(b"3 1\n1 \xFF", ScriptOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "script is not valid UTF-8 at byte 6");

        let err = run_str(b"3 1\n1 \xC3", ScriptOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "script is not valid UTF-8 at byte 6");
    }
}
