//! Property-based tests for the tokenizer

use ansihl::{AnsiColor, Tokenizer};
use proptest::prelude::*;

/// Fragments that compose into realistic and adversarial scan input
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,12}".prop_map(String::from),
        (0u16..50).prop_map(|c| format!("\x1b[{}m", c)),
        Just("\x1b[0m".to_string()),
        Just("\x1b[m".to_string()),
        Just("\x1b[1;31m".to_string()),
        Just("\x1b[".to_string()),
        Just("\x1b".to_string()),
        Just("\n".to_string()),
        Just("é✓".to_string()),
    ]
}

fn scan_input() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..20).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn scan_never_panics(text in scan_input(), base in 0usize..10_000) {
        let tokenizer = Tokenizer::new();
        let _ = tokenizer.scan(&text, base);
    }

    #[test]
    fn scan_is_deterministic(text in scan_input()) {
        let tokenizer = Tokenizer::new();
        prop_assert_eq!(tokenizer.scan(&text, 0), tokenizer.scan(&text, 0));
    }

    #[test]
    fn ranges_stay_within_scanned_text(text in scan_input(), base in 0usize..10_000) {
        let tokenizer = Tokenizer::new();
        let result = tokenizer.scan(&text, base);

        for runs in result.colored.values() {
            for run in runs {
                prop_assert!(run.range.start >= base);
                prop_assert!(run.range.end <= base + text.len());
            }
        }
        for span in &result.hidden {
            prop_assert!(span.start >= base);
            prop_assert!(span.end <= base + text.len());
        }
    }

    #[test]
    fn colored_runs_never_overlap(text in scan_input()) {
        let tokenizer = Tokenizer::new();
        let result = tokenizer.scan(&text, 0);

        let mut all: Vec<_> = result
            .colored
            .values()
            .flatten()
            .map(|d| d.range)
            .collect();
        all.sort();
        for pair in all.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn hidden_spans_are_ordered_and_disjoint(text in scan_input()) {
        let tokenizer = Tokenizer::new();
        let result = tokenizer.scan(&text, 0);

        for pair in result.hidden.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn notes_echo_visible_text(text in scan_input()) {
        let tokenizer = Tokenizer::new();
        let result = tokenizer.scan(&text, 0);

        for (code, runs) in &result.colored {
            for run in runs {
                let visible = &text[run.range.start..run.range.end];
                let expected = format!("ANSI {}: {}", code, visible);
                prop_assert_eq!(
                    run.note.as_deref(),
                    Some(expected.as_str())
                );
            }
        }
    }

    #[test]
    fn sgr_round_trip(code in 30u16..=37) {
        let color = AnsiColor::from_sgr(code).unwrap();
        prop_assert_eq!(color.sgr(), code);
    }
}
