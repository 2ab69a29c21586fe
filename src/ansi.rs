//! ANSI escape helpers for the door's remote terminal.
//!
//! Everything here builds strings or byte buffers; the caller decides where
//! they are written (normally stdout, which the BBS host pipes to the caller's
//! terminal). [`load_art`] is the only function that touches the filesystem.

use codepage_437::{FromCp437, CP437_CONTROL};
use std::io;
use std::path::Path;

use crate::dropfile::Emulation;

pub const ESC: &str = "\u{1b}[";

pub const RESET: &str = "\u{1b}[0m";
pub const ERASE_SCREEN: &str = "\u{1b}[2J";
pub const ERASE_LINE: &str = "\u{1b}[2K";
pub const CURSOR_HIDE: &str = "\u{1b}[?25l";
pub const CURSOR_SHOW: &str = "\u{1b}[?25h";

pub const BLACK: &str = "\u{1b}[30m";
pub const RED: &str = "\u{1b}[31m";
pub const GREEN: &str = "\u{1b}[32m";
pub const YELLOW: &str = "\u{1b}[33m";
pub const BLUE: &str = "\u{1b}[34m";
pub const MAGENTA: &str = "\u{1b}[35m";
pub const CYAN: &str = "\u{1b}[36m";
pub const WHITE: &str = "\u{1b}[37m";

pub const RED_HI: &str = "\u{1b}[31;1m";
pub const GREEN_HI: &str = "\u{1b}[32;1m";
pub const YELLOW_HI: &str = "\u{1b}[33;1m";
pub const CYAN_HI: &str = "\u{1b}[36;1m";
pub const WHITE_HI: &str = "\u{1b}[37;1m";

/// SAUCE comment block marker; precedes the SAUCE record when present.
const SAUCE_COMMENT: &str = "COMNT";
const SAUCE_RECORD: &str = "SAUCE00";

/// Cursor position sequence. Coordinates are 1-based, column first.
pub fn move_cursor(x: u16, y: u16) -> String {
    format!("{ESC}{y};{x}f")
}

pub fn clear_screen() -> String {
    format!("{ERASE_SCREEN}{}", move_cursor(1, 1))
}

/// Place `text` at column `x`, row `y`.
pub fn print_at(text: &str, x: u16, y: u16) -> String {
    format!("{}{text}", move_cursor(x, y))
}

/// Strip SAUCE metadata from ANSI art.
///
/// Cuts at the comment block if present, otherwise at the SAUCE record, and
/// drops the EOF character (`^Z`) sitting right before the marker.
pub fn trim_sauce(art: &str) -> &str {
    let cut = art
        .find(SAUCE_COMMENT)
        .or_else(|| art.find(SAUCE_RECORD));
    match cut {
        Some(idx) => {
            let head = &art[..idx];
            match head.char_indices().next_back() {
                Some((last, _)) => &head[..last],
                None => head,
            }
        }
        None => art,
    }
}

/// Byte-level [`trim_sauce`] for art read straight from disk.
pub fn trim_sauce_bytes(art: &[u8]) -> &[u8] {
    let find = |marker: &str| {
        art.windows(marker.len())
            .position(|w| w == marker.as_bytes())
    };
    match find(SAUCE_COMMENT).or_else(|| find(SAUCE_RECORD)) {
        Some(idx) => &art[..idx.saturating_sub(1)],
        None => art,
    }
}

/// Prepare raw `.ans` bytes for output. Remote callers get the CP437 bytes
/// as drawn; a local console gets them converted to UTF-8.
pub fn art_for_display(raw: &[u8], local_display: bool) -> Vec<u8> {
    let art = trim_sauce_bytes(raw);
    if local_display {
        String::from_cp437(art.to_vec(), &CP437_CONTROL).into_bytes()
    } else {
        art.to_vec()
    }
}

/// Read an ANSI art file and prepare it with [`art_for_display`].
pub fn load_art<P: AsRef<Path>>(path: P, local_display: bool) -> io::Result<Vec<u8>> {
    let raw = std::fs::read(path)?;
    Ok(art_for_display(&raw, local_display))
}

/// Render art with its top-left corner at (`x`, `y`), one row per line.
pub fn art_at(art: &str, x: u16, y: u16) -> String {
    let mut out = String::new();
    for (row, line) in trim_sauce(art).lines().enumerate() {
        let row = y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
        out.push_str(&print_at(line, x, row));
    }
    out
}

/// Visible character count, ignoring SGR (`ESC[...m`) sequences.
pub fn visible_width(s: &str) -> usize {
    strip_sgr(s).chars().count()
}

pub fn center_text(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s)) / 2;
    format!("{}{s}", " ".repeat(pad))
}

pub fn right_align(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// Colorize `text` if the session's terminal can show it.
pub fn paint(text: &str, color: &str, emulation: Emulation) -> String {
    if emulation.supports_ansi() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Remove SGR sequences, for ASCII-only terminals.
pub fn strip_sgr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_sequence_is_row_then_column() {
        assert_eq!(move_cursor(10, 3), "\u{1b}[3;10f");
    }

    #[test]
    fn sauce_record_and_eof_marker_are_removed() {
        let art = "line one\r\nline two\u{1a}SAUCE00 title goes here";
        assert_eq!(trim_sauce(art), "line one\r\nline two");
    }

    #[test]
    fn sauce_comment_block_wins_over_record() {
        let art = "art\u{1a}COMNTsome commentSAUCE00";
        assert_eq!(trim_sauce(art), "art");
    }

    #[test]
    fn art_without_sauce_is_untouched() {
        assert_eq!(trim_sauce("plain"), "plain");
        assert_eq!(trim_sauce("SAUCE00"), "");
    }

    #[test]
    fn width_ignores_color_codes() {
        let s = format!("{RED}abc{RESET}");
        assert_eq!(visible_width(&s), 3);
        assert_eq!(center_text(&s, 9), format!("   {s}"));
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(right_align("abcdef", 3), "abcdef");
    }

    #[test]
    fn remote_art_keeps_cp437_bytes() {
        let raw = [0xB0, 0xDB, b'\r', b'\n', 0x1A, b'S', b'A', b'U', b'C', b'E', b'0', b'0'];
        assert_eq!(art_for_display(&raw, false), vec![0xB0, 0xDB, b'\r', b'\n']);
    }

    #[test]
    fn local_art_is_converted_to_utf8() {
        let raw = [0xB0, 0xDB, 0x1A, b'C', b'O', b'M', b'N', b'T'];
        let out = art_for_display(&raw, true);
        assert_eq!(String::from_utf8(out).unwrap(), "\u{2591}\u{2588}");
    }

    #[test]
    fn art_file_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.ans");
        std::fs::write(&path, [b'h', b'i', 0x1A, b'S', b'A', b'U', b'C', b'E', b'0', b'0']).unwrap();
        assert_eq!(load_art(&path, true).unwrap(), b"hi".to_vec());
        assert!(load_art(dir.path().join("absent.ans"), false).is_err());
    }

    #[test]
    fn art_lines_are_positioned_on_consecutive_rows() {
        let out = art_at("ab\ncd", 5, 2);
        assert_eq!(out, "\u{1b}[2;5fab\u{1b}[3;5fcd");
    }

    #[test]
    fn paint_respects_emulation() {
        assert_eq!(paint("hi", RED, Emulation::Ascii), "hi");
        assert_eq!(paint("hi", RED, Emulation::Ansi), format!("{RED}hi{RESET}"));
        assert_eq!(strip_sgr(&format!("{RED}hi{RESET}")), "hi");
    }
}
