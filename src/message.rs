//! Cleaning of the message text before it is handed to the synthesizer.

/// Characters read as the end of a sentence; each is replaced with `.`.
pub const PUNCTUATION_CHARS: &str = "?!:;";

/// Characters replaced with a single space.
pub const WHITESPACE_CHARS: &str = "\n\r\t";

/// The only characters a cleaned message can contain.
pub const VALID_MESSAGE_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ .\"'1234567890,()*/-+&%$#@";

/// Restricts the message to [`VALID_MESSAGE_CHARS`].
///
/// Sentence punctuation becomes `.`, line breaks and tabs become spaces, and every other
/// character outside the allowed set is removed. Nothing else is normalized: case and runs of
/// spaces are kept as they are. Cleaning an already cleaned message returns it unchanged.
pub fn clean_message(message: &str) -> String {
    message
        .chars()
        .map(normalize_punctuation)
        .map(normalize_whitespace)
        .filter(|&c| VALID_MESSAGE_CHARS.contains(c))
        .collect()
}

fn normalize_punctuation(c: char) -> char {
    if PUNCTUATION_CHARS.contains(c) {
        '.'
    } else {
        c
    }
}

fn normalize_whitespace(c: char) -> char {
    if WHITESPACE_CHARS.contains(c) {
        ' '
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_whitespace_are_normalized() {
        assert_eq!(clean_message("Hello?\tWorld!\n"), "Hello. World. ");
        assert_eq!(clean_message("a:b;c\r\n"), "a.b.c  ");
    }

    #[test]
    fn characters_outside_the_alphabet_are_removed() {
        assert_eq!(clean_message("café €100"), "caf 100");
        assert_eq!(clean_message("<b>[x]</b> ~_`|\\{}^="), "bx/b ");
    }

    #[test]
    fn allowed_symbols_pass_through() {
        let symbols = ".\"'1234567890,()*/-+&%$#@";
        assert_eq!(clean_message(symbols), symbols);
    }

    #[test]
    fn spacing_and_case_are_kept() {
        assert_eq!(clean_message("  MiXeD   case  "), "  MiXeD   case  ");
    }

    #[test]
    fn empty_and_fully_invalid_input() {
        assert_eq!(clean_message(""), "");
        assert_eq!(clean_message("日本語\u{0}\u{7f}"), "");
    }
}
