//! Helpers for putting caller-controlled text (aliases, raw dropfile lines)
//! into single-line log records.

/// Longest preview kept by [`escape_log`].
pub const MAX_PREVIEW: usize = 120;

/// Escape `s` for a single log line, truncated to [`MAX_PREVIEW`] characters.
pub fn escape_log(s: &str) -> String {
    escape_log_limit(s, MAX_PREVIEW)
}

/// Escape backslashes, line breaks, tabs and other control characters
/// (`\xNN`, or `\u{..}` above 0xFF). Output is cut after `limit` input
/// characters and ends with `…` when that happens.
pub fn escape_log_limit(s: &str, limit: usize) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len().min(limit) + 4);
    for (i, ch) in s.chars().enumerate() {
        if i == limit {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{1b}' => out.push_str("\\e"),
            c if c.is_control() && (c as u32) <= 0xFF => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_terminators_and_ansi() {
        assert_eq!(escape_log("Jane\r\n"), "Jane\\r\\n");
        assert_eq!(escape_log("\u{1b}[31mred"), "\\e[31mred");
        assert_eq!(escape_log("a\\b\u{7}"), "a\\\\b\\x07");
    }

    #[test]
    fn truncates_long_values() {
        let long = "x".repeat(10);
        assert_eq!(escape_log_limit(&long, 4), "xxxx…");
        assert_eq!(escape_log_limit("xxxx", 4), "xxxx");
    }
}
