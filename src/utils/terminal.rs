//! Sanitizing text before it reaches the terminal.
//!
//! Sender names and message bodies can come from a user config file or from an
//! export file on disk. Escape sequences in them must not reach the terminal, so
//! the `show`, `digest` and `view` paths run content through these helpers.

/// Remove ANSI CSI sequences (`ESC [ ... letter`) and control characters other than
/// tab, newline and carriage return.
///
/// ```
/// use mock_inbox::utils::terminal::strip_control;
///
/// assert_eq!(strip_control("\x1b[31mAlice\x1b[0m"), "Alice");
/// ```
pub fn strip_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter.
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }
        out.push(ch);
    }

    out
}

/// [`strip_control`] with line breaks and tabs flattened to single spaces, for
/// one-line list rows.
pub fn single_line(text: &str) -> String {
    let stripped = strip_control(text);
    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split(['\n', '\r', '\t']).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color_codes() {
        assert_eq!(strip_control("\x1b[1m\x1b[31mBold Red\x1b[0m tail"), "Bold Red tail");
    }

    #[test]
    fn test_strip_cursor_movement() {
        assert_eq!(strip_control("\x1b[2J\x1b[HCleared"), "Cleared");
    }

    #[test]
    fn test_strip_bell_and_backspace() {
        assert_eq!(strip_control("Ding\x07\x08!"), "Ding!");
    }

    #[test]
    fn test_keeps_whitespace_controls() {
        assert_eq!(strip_control("a\nb\tc\rd"), "a\nb\tc\rd");
    }

    #[test]
    fn test_lone_escape_dropped() {
        assert_eq!(strip_control("x\x1by"), "xy");
    }

    #[test]
    fn test_unicode_untouched() {
        assert_eq!(strip_control("Hello 👋 \x1b[32mWorld\x1b[0m"), "Hello 👋 World");
    }

    #[test]
    fn test_single_line_flattens_breaks() {
        assert_eq!(single_line("Line 1\nLine 2\r\n\tLine 3"), "Line 1 Line 2 Line 3");
    }

    #[test]
    fn test_single_line_plain() {
        assert_eq!(single_line("The bug has been fixed."), "The bug has been fixed.");
    }
}
