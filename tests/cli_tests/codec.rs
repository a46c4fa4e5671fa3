use pretty_assertions::assert_eq;

use crate::codec_test::io_util::namecodec_stdout;

macro_rules! gen_codec_tests {
    ( $( $name:ident: [$($arg:expr),*], $input:expr => $output:expr; )* ) => {
        $(
            paste::item! {
                #[test]
                fn [<args_ $name>]() {
                    let mut args = vec![$($arg),*];
                    args.push($input);
                    let stdout = namecodec_stdout(args.as_slice(), b"");
                    assert_eq!(String::from_utf8_lossy(&stdout), format!("{}\n", $output));
                }

                #[test]
                fn [<stdin_ $name>]() {
                    let stdout = namecodec_stdout(&[$($arg),*], format!("{}\n", $input).as_bytes());
                    assert_eq!(String::from_utf8_lossy(&stdout), format!("{}\n", $output));
                }
            }
        )*
    };
}

gen_codec_tests! {
    encode_standard: ["encode"], "a/b\u{7f}" => "a／b␡";
    encode_quotes_lookalikes: ["encode"], "a／b" => "a‛／b";
    encode_win: ["encode", "--encoding", "Win,RightPeriod"], "what?." => "what？．";
    encode_identity: ["encode", "--identity"], "a/b" => "a/b";
    decode_standard: ["decode"], "a／b␡" => "a/b\u{7f}";
    decode_win: ["decode", "-e", "win"], "a：b" => "a:b";
    decode_leading_space: ["decode", "-e", "LeftSpace"], "␠x" => " x";
}

#[test]
fn several_names() {
    let stdout = namecodec_stdout(&["encode", "a/b", "c\u{1}d", "plain"], b"");
    assert_eq!(String::from_utf8_lossy(&stdout), "a／b\nc␁d\nplain\n");
}

#[test]
fn stdin_lines() {
    let stdout = namecodec_stdout(&["decode"], "one／\ntwo␀\nthree".as_bytes());
    assert_eq!(String::from_utf8_lossy(&stdout), "one/\ntwo\0\nthree\n");
}

#[test]
fn invalid_utf8_from_stdin() {
    let stdout = namecodec_stdout(&["encode", "-e", "Standard,InvalidUtf8"], b"\xFFname\n");
    assert_eq!(String::from_utf8_lossy(&stdout), "‛FFname\n");
}

#[test]
fn invalid_utf8_is_written_raw() {
    let stdout = namecodec_stdout(&["decode", "-e", "Standard,InvalidUtf8", "‛FFname"], b"");
    assert_eq!(stdout, b"\xFFname\n");
}

#[test]
fn empty_stdin() {
    let stdout = namecodec_stdout(&["encode"], b"");
    assert!(stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn invalid_utf8_argument() {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let args = [
        OsString::from("encode"),
        OsString::from("-e"),
        OsString::from("Standard,InvalidUtf8"),
        OsString::from_vec(b"a\xFF/b".to_vec()),
    ];
    let stdout = namecodec_stdout(&args, b"");
    assert_eq!(String::from_utf8_lossy(&stdout), "a‛FF／b\n");
}
