use crate::codec_test::io_util::{namecodec_stdout, run_namecodec};

#[test]
fn unknown_encoding() {
    let output = run_namecodec(&["encode", "--encoding", "Slash,Colon", "a"], b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid encoding 'Colon'"), "{stderr}");
}

#[test]
fn identity_conflicts_with_encoding() {
    let output = run_namecodec(&["decode", "--identity", "--encoding", "Win", "a"], b"");
    assert!(!output.status.success());
}

#[test]
fn completions() {
    let stdout = namecodec_stdout(&["completions", "bash"], b"");
    let script = String::from_utf8_lossy(&stdout);
    assert!(script.contains("namecodec"));
    assert!(script.contains("from-standard"));
}
