//! Extension trait for string slices and, through deref, owned strings.
//!
//! Lengths and offsets are counted in `char`s (Unicode scalar values), never
//! in bytes.

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::lines::{LineReader, DEFAULT_DELIMITER};

/// Characters removed by [StrExt::escaped_file_name]
pub const FILE_NAME_FORBIDDEN: &[char] = &['/', '\\', ':', '?', '%', '*', '|', '"', '<', '>'];

const ELLIPSIS: &str = "...";

/// Helpers for working with string slices
pub trait StrExt {
    /// Shorten to `max_len` characters, the last three of which become `...`.
    ///
    /// Only strings strictly shorter than `max_len` are returned untouched; a
    /// string of exactly `max_len` characters is shortened as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::string::StrExt;
    ///
    /// assert_eq!("hey".truncate_ellipsis(5), "hey");
    /// assert_eq!("hello".truncate_ellipsis(5), "he...");
    /// assert_eq!("hello world".truncate_ellipsis(8), "hello...");
    /// ```
    fn truncate_ellipsis(&self, max_len: usize) -> String;

    /// Pad with `pad` on the left up to `len` characters, or keep only the
    /// last `len` characters if the string is at least that long.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::string::StrExt;
    ///
    /// assert_eq!("3".left_pad(5, '0'), "00003");
    /// assert_eq!("123456".left_pad(5, '0'), "23456");
    /// ```
    fn left_pad(&self, len: usize, pad: char) -> String;

    /// Every match of `pattern`, each as the list of its capture groups.
    ///
    /// Group 0 is the whole match; groups that did not take part in a match
    /// are empty strings. An invalid pattern yields no matches; use
    /// [Self::try_capture] to see the compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::string::StrExt;
    ///
    /// let caps = "a=1, b=2".capture(r"(\w)=(\d)");
    /// assert_eq!(caps, vec![vec!["a=1", "a", "1"], vec!["b=2", "b", "2"]]);
    /// assert!("abc".capture("(").is_empty());
    /// ```
    fn capture(&self, pattern: &str) -> Vec<Vec<String>>;

    /// Like [Self::capture], but reports a pattern that fails to compile
    fn try_capture(&self, pattern: &str) -> Result<Vec<Vec<String>>>;

    /// A version of the string usable as a file name.
    ///
    /// Surrounding whitespace is trimmed, every `:` becomes ` -` and all
    /// characters in [FILE_NAME_FORBIDDEN] are then dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::string::StrExt;
    ///
    /// assert_eq!("  Notes: 2024/05?  ".escaped_file_name(), "Notes - 202405");
    /// ```
    fn escaped_file_name(&self) -> String;

    /// True if the string is empty or consists only of whitespace
    fn is_blank(&self) -> bool;

    /// Character at `offset`, or `None` if `offset` is negative or past the end
    fn char_at(&self, offset: isize) -> Option<char>;

    /// Split into a [LineReader] at every `delimiter`; the split happens immediately
    fn line_reader(&self, delimiter: &str) -> LineReader;

    /// [Self::line_reader] with [DEFAULT_DELIMITER]
    fn line_reader_default(&self) -> LineReader {
        self.line_reader(DEFAULT_DELIMITER)
    }
}

impl StrExt for str {
    fn truncate_ellipsis(&self, max_len: usize) -> String {
        if self.chars().count() < max_len {
            return self.to_owned();
        }
        let keep = max_len.saturating_sub(ELLIPSIS.len());
        let mut out: String = self.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    }

    fn left_pad(&self, len: usize, pad: char) -> String {
        let count = self.chars().count();
        if count < len {
            std::iter::repeat(pad)
                .take(len - count)
                .chain(self.chars())
                .collect()
        } else {
            self.chars().skip(count - len).collect()
        }
    }

    fn capture(&self, pattern: &str) -> Vec<Vec<String>> {
        self.try_capture(pattern).unwrap_or_else(|e| {
            debug!("Ignoring invalid capture pattern {pattern:?}: {e}");
            Vec::new()
        })
    }

    fn try_capture(&self, pattern: &str) -> Result<Vec<Vec<String>>> {
        let re = Regex::new(pattern)?;
        let matches = re
            .captures_iter(self)
            .map(|caps| {
                caps.iter()
                    .map(|group| group.map_or_else(String::new, |m| m.as_str().to_owned()))
                    .collect()
            })
            .collect();
        Ok(matches)
    }

    fn escaped_file_name(&self) -> String {
        self.trim()
            .replace(':', " -")
            .chars()
            .filter(|c| !FILE_NAME_FORBIDDEN.contains(c))
            .collect()
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn char_at(&self, offset: isize) -> Option<char> {
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.chars().nth(i))
    }

    fn line_reader(&self, delimiter: &str) -> LineReader {
        LineReader::new(self, delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_truncate_ellipsis_boundary() {
        assert_eq!("hell".truncate_ellipsis(5), "hell");
        assert_eq!("hello".truncate_ellipsis(5), "he...");
        assert_eq!("hello!".truncate_ellipsis(5), "he...");
    }

    #[test]
    fn test_truncate_ellipsis_counts_chars() {
        assert_eq!("ääää".truncate_ellipsis(5), "ääää");
        assert_eq!("äöüäöü".truncate_ellipsis(5), "äö...");
    }

    #[test]
    fn test_truncate_ellipsis_tiny_limit() {
        assert_eq!("hello".truncate_ellipsis(2), "...");
        assert_eq!("".truncate_ellipsis(0), "...");
    }

    #[test]
    fn test_left_pad() {
        assert_eq!("3".left_pad(5, '0'), "00003");
        assert_eq!("12345".left_pad(5, '0'), "12345");
        assert_eq!("123456".left_pad(5, '0'), "23456");
        assert_eq!("".left_pad(3, ' '), "   ");
        assert_eq!("abc".left_pad(0, ' '), "");
        assert_eq!("ü".left_pad(3, '·'), "··ü");
    }

    #[test]
    fn test_capture_optional_group_is_empty() {
        let caps = "ab b".capture(r"(a)?(b)");
        assert_eq!(caps, vec![vec!["ab", "a", "b"], vec!["b", "", "b"]]);
    }

    #[test]
    fn test_capture_no_match() {
        assert!("xyz".capture(r"\d+").is_empty());
    }

    #[test]
    fn test_capture_invalid_pattern() {
        assert!("abc".capture("[a-").is_empty());
        assert!(matches!(
            "abc".try_capture("[a-"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_escaped_file_name() {
        assert_eq!("a:b/c?d".escaped_file_name(), "a -bcd");
        assert_eq!(
            "\n <x>|\"y\"*%\\z \t".escaped_file_name(),
            "xyz"
        );
        assert_eq!("plain.txt".escaped_file_name(), "plain.txt");
    }

    #[test]
    fn test_is_blank() {
        assert!("".is_blank());
        assert!(" \t\r\n ".is_blank());
        assert!("\u{00A0}\u{2003}".is_blank());
        assert!(!" x ".is_blank());
    }

    #[test]
    fn test_char_at() {
        let s = "aäb";
        assert_eq!(s.char_at(0), Some('a'));
        assert_eq!(s.char_at(1), Some('ä'));
        assert_eq!(s.char_at(2), Some('b'));
        assert_eq!(s.char_at(3), None);
        assert_eq!(s.char_at(-1), None);
    }

    #[test]
    fn test_line_reader() {
        let mut reader = "a\nb\nc".line_reader_default();
        assert_eq!(reader.next_line(), Some("a"));

        let reader = "a;b".to_string().line_reader(";");
        assert_eq!(reader.lines(), ["a", "b"]);
    }
}
