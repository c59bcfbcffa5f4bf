//! Tokenizer behavior over realistic log content

use ansihl::{AnsiColor, ByteRange, Tokenizer, RESET_SEQUENCE};

#[test]
fn test_typical_log_line() {
    let tokenizer = Tokenizer::new();
    let line = "\x1b[31mERROR\x1b[0m disk full on /var\n";
    let result = tokenizer.scan(line, 0);

    assert_eq!(result.colored_run_count(), 1);
    let run = &result.colored[&31][0];
    assert_eq!(run.range, ByteRange::new(5, 10));
    assert_eq!(run.note.as_deref(), Some("ANSI 31: ERROR"));

    // Both the color escape and the reset are hidden
    assert_eq!(result.hidden.len(), 2);
    assert_eq!(result.hidden[0], ByteRange::new(0, 5));
    assert_eq!(result.hidden[1], ByteRange::new(10, 15));
}

#[test]
fn test_any_numeric_token_ends_a_run() {
    let tokenizer = Tokenizer::new();
    let result = tokenizer.scan("\x1b[33mwarn\x1b[1mstill", 0);

    // \x1b[1m matches the token pattern, so the yellow run ends there
    let run = &result.colored[&33][0];
    assert_eq!(run.range.end, 9);
    // Code 1 gets its own bucket; the engine drops it later
    assert!(result.colored.contains_key(&1));
}

#[test]
fn test_multiline_colored_run() {
    let tokenizer = Tokenizer::new();
    let result = tokenizer.scan("\x1b[32mline one\nline two", 0);

    let run = &result.colored[&32][0];
    assert_eq!(run.range, ByteRange::new(5, 22));
    assert_eq!(run.note.as_deref(), Some("ANSI 32: line one\nline two"));
}

#[test]
fn test_repeated_code_accumulates_in_one_bucket() {
    let tokenizer = Tokenizer::new();
    let text = "\x1b[34ma\x1b[0m \x1b[34mb\x1b[0m \x1b[34mc";
    let result = tokenizer.scan(text, 0);

    assert_eq!(result.colored.len(), 1);
    assert_eq!(result.colored[&34].len(), 3);
}

#[test]
fn test_zero_width_run_kept() {
    let tokenizer = Tokenizer::new();
    let result = tokenizer.scan("\x1b[31m\x1b[32mB", 0);

    let red = result.colored[&31][0].range;
    assert_eq!(red, ByteRange::new(5, 5));
    assert!(red.is_empty());
    assert_eq!(result.colored[&32][0].range, ByteRange::new(10, 11));
}

#[test]
fn test_reset_sequence_constant() {
    assert_eq!(RESET_SEQUENCE, "\x1b[0m");
    let tokenizer = Tokenizer::new();
    let result = tokenizer.scan(RESET_SEQUENCE, 0);
    assert!(result.colored.is_empty());
    assert_eq!(result.hidden.len(), 1);
}

#[test]
fn test_scan_is_deterministic() {
    let tokenizer = Tokenizer::new();
    let text = "\x1b[35mmagenta\x1b[0m and \x1b[36mcyan";
    assert_eq!(tokenizer.scan(text, 7), tokenizer.scan(text, 7));
}

#[test]
fn test_all_recognized_codes_round_trip() {
    for color in AnsiColor::ALL {
        assert_eq!(AnsiColor::from_sgr(color.sgr()), Some(color));
    }
    assert_eq!(AnsiColor::from_sgr(29), None);
    assert_eq!(AnsiColor::from_sgr(38), None);
}

#[test]
fn test_utf8_content_offsets_are_bytes() {
    let tokenizer = Tokenizer::new();
    let result = tokenizer.scan("\x1b[31mméh", 0);

    // "méh" is 4 bytes
    assert_eq!(result.colored[&31][0].range, ByteRange::new(5, 9));
}
