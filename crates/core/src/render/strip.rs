//! Removal of terminal escape sequences

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Single-character escapes and CSI sequences (covers every SGR code owo-colors writes)
static ANSI_ESCAPE: OnceLock<Regex> = OnceLock::new();

fn ansi_escape() -> &'static Regex {
    ANSI_ESCAPE.get_or_init(|| {
        Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])")
            .expect("Failed to compile ANSI escape regex")
    })
}

/// Strip escape sequences, leaving all other characters untouched
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ansi_escape().replace_all(text, "")
}

/// Check if `text` contains any escape sequence
pub fn has_ansi(text: &str) -> bool {
    ansi_escape().is_match(text)
}
