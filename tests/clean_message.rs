use tts_reader::message::{clean_message, VALID_MESSAGE_CHARS};

const SAMPLES: &[&str] = &[
    "",
    "Hello?\tWorld!\n",
    "café €100",
    "Q: what's 2+2?\r\nA: 4; obviously!",
    "tabs\t\tand\n\nnewlines",
    "<html>&amp; \"quotes\" 'single' (parens) [brackets] {braces}</html>",
    "emoji 🎉 and ß and ümlaut",
    "....;;;;::::!!!!????",
];

#[test]
fn test_punctuation_whitespace_and_filtering() {
    assert_eq!(clean_message("Hello?\tWorld!\n"), "Hello. World. ");
    assert_eq!(clean_message("café €100"), "caf 100");
}

#[test]
fn test_idempotent() {
    for sample in SAMPLES {
        let once = clean_message(sample);
        assert_eq!(clean_message(&once), once, "{:?}", sample);
    }
}

#[test]
fn test_output_within_alphabet() {
    for sample in SAMPLES {
        let cleaned = clean_message(sample);
        assert!(cleaned.chars().all(|c| VALID_MESSAGE_CHARS.contains(c)), "{:?}", cleaned);
    }
}

#[test]
fn test_never_grows() {
    for sample in SAMPLES {
        assert!(clean_message(sample).chars().count() <= sample.chars().count());
    }
}

#[test]
fn test_mixed_message() {
    assert_eq!(
        clean_message("Q: what's 2+2?\r\nA: 4; obviously!"),
        "Q. what's 2+2.  A. 4. obviously."
    );
}
