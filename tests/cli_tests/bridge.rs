use pretty_assertions::assert_eq;

use crate::codec_test::io_util::namecodec_stdout;

#[test]
fn to_standard_path() {
    let stdout = namecodec_stdout(&["to-standard", "-e", "Win", "dir/a：b", "x？"], b"");
    assert_eq!(String::from_utf8_lossy(&stdout), "dir/a:b\nx?\n");
}

#[test]
fn from_standard_path() {
    let stdout = namecodec_stdout(&["from-standard", "-e", "Slash,Win", "dir/a:b"], b"");
    assert_eq!(String::from_utf8_lossy(&stdout), "dir/a：b\n");
}

#[test]
fn from_standard_name() {
    let stdout = namecodec_stdout(&["from-standard", "--identity", "--name", "a／b"], b"");
    assert_eq!(String::from_utf8_lossy(&stdout), "a/b\n");
}

#[test]
fn to_standard_name() {
    let stdout = namecodec_stdout(&["to-standard", "--identity", "--name"], b"a/b\n");
    assert_eq!(String::from_utf8_lossy(&stdout), "a／b\n");
}

#[test]
fn standard_is_unchanged() {
    let stdout = namecodec_stdout(&["to-standard"], "a／b/c\u{1}\n".as_bytes());
    assert_eq!(String::from_utf8_lossy(&stdout), "a／b/c\u{1}\n");
}
