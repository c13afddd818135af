#![allow(missing_docs)]

use tailbuf::{Operation, Script};

#[test]
fn script_roundtrips_through_json() {
    let script = Script::parse("4 3 5x 3 0 1 1").unwrap();
    let json = serde_json::to_string(&script).unwrap();
    assert_eq!(
        json,
        r#"{"window":4,"operations":[{"count":5,"selector":120},{"count":3,"selector":48},{"count":1,"selector":49}]}"#
    );

    let back: Script = serde_json::from_str(&json).unwrap();
    assert_eq!(back, script);
    assert_eq!(back.operations[1], Operation::blank(3));
    assert_eq!(back.run(), "xx__");
}
