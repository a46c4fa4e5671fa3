use std::{
    ffi::OsStr,
    io::Write,
    process::{Command, Output, Stdio},
};

pub static NAMECODEC_PATH: &str = env!("CARGO_BIN_EXE_namecodec");

/// Runs namecodec with `args`, writing `stdin` to its standard input.
pub fn run_namecodec<S: AsRef<OsStr>>(args: &[S], stdin: &[u8]) -> Output {
    let mut child = Command::new(NAMECODEC_PATH)
        .args(args)
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Couldn't start namecodec");

    child
        .stdin
        .take()
        .expect("namecodec stdin was not captured")
        .write_all(stdin)
        .expect("Couldn't write to namecodec stdin");

    let output = child
        .wait_with_output()
        .expect("Couldn't wait for namecodec");

    eprint!("{}", String::from_utf8_lossy(&output.stderr));

    output
}

/// Runs namecodec and returns its stdout, asserting that it succeeded.
pub fn namecodec_stdout<S: AsRef<OsStr>>(args: &[S], stdin: &[u8]) -> Vec<u8> {
    let output = run_namecodec(args, stdin);
    assert!(
        output.status.success(),
        "namecodec did not exit successfully"
    );
    output.stdout
}
