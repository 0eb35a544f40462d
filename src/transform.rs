//! Text transforms applied to the raw state before tokenizing.
//!
//! Both transforms operate on the raw sensor string and are applied in a
//! fixed order by the formatter: [`short_form`] first, then [`hide_seconds`].

use crate::unit::{is_word_char, starts_with_word, Unit};

/// Replaces every whole-word unit name with its abbreviation.
///
/// Matching is ASCII case-insensitive and accepts singular and plural forms
/// (`years`/`year` → `y`, `minutes`/`minute` → `min`, ...). Words glued to
/// digits or other word characters are left alone, so numerals are never
/// touched. Applying the transform twice gives the same result as once.
///
/// ```rust
/// use long_form_countdown::transform::short_form;
///
/// assert_eq!(short_form("2 Years, 1 minute"), "2 y, 1 min");
/// ```
pub fn short_form(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        let word_len = rest
            .find(|c: char| !is_word_char(c))
            .unwrap_or(rest.len());
        if word_len == 0 {
            let c_len = rest.chars().next().map_or(1, char::len_utf8);
            out.push_str(&rest[..c_len]);
            rest = &rest[c_len..];
            continue;
        }
        let word = &rest[..word_len];
        match Unit::from_full_name(word) {
            Some(unit) => out.push_str(unit.abbreviation()),
            None => out.push_str(word),
        }
        rest = &rest[word_len..];
    }
    out
}

/// Removes the seconds component, including its leading separator.
///
/// Each occurrence of `<comma or colon?><whitespace*><digits><whitespace*><second|seconds|s>`
/// ending on a word boundary is deleted, so `"2 hours, 30 minutes, 5 seconds"`
/// becomes `"2 hours, 30 minutes"` with no dangling comma. A seconds
/// component that opens the text takes the separator after it instead.
///
/// ```rust
/// use long_form_countdown::transform::hide_seconds;
///
/// assert_eq!(hide_seconds("2 hours, 30 minutes, 5 seconds"), "2 hours, 30 minutes");
/// assert_eq!(hide_seconds("1 h: 5 min: 30 s"), "1 h: 5 min");
/// assert_eq!(hide_seconds("1h 2min 3s"), "1h 2min");
/// ```
pub fn hide_seconds(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        if let Some(end) = seconds_match_end(input, pos) {
            pos = end;
            if out.trim().is_empty() {
                pos = skip_separator(input, pos);
            }
            continue;
        }
        let c_len = input[pos..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&input[pos..pos + c_len]);
        pos += c_len;
    }
    out
}

const SECOND_FORMS: [&str; 3] = ["seconds", "second", "s"];

/// Tries to match a seconds component starting exactly at `start`, returning
/// the byte offset just past it.
fn seconds_match_end(input: &str, start: usize) -> Option<usize> {
    let mut pos = start;
    if input[pos..].starts_with([',', ':']) {
        pos += 1;
    }
    pos += leading_len(&input[pos..], char::is_whitespace);
    let digits = leading_len(&input[pos..], |c| c.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    pos += digits;
    pos += leading_len(&input[pos..], char::is_whitespace);
    SECOND_FORMS
        .into_iter()
        .find(|form| starts_with_word(&input[pos..], form))
        .map(|form| pos + form.len())
}

/// Skips `<whitespace*><comma or colon><whitespace*>` at `start`, if present.
fn skip_separator(input: &str, start: usize) -> usize {
    let pos = start + leading_len(&input[start..], char::is_whitespace);
    if input[pos..].starts_with([',', ':']) {
        let pos = pos + 1;
        pos + leading_len(&input[pos..], char::is_whitespace)
    } else {
        start
    }
}

fn leading_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_all_units() {
        assert_eq!(
            short_form("1 year, 2 months, 3 days, 4 hours, 5 minutes, 6 seconds"),
            "1 y, 2 m, 3 d, 4 h, 5 min, 6 s"
        );
    }

    #[test]
    fn test_short_form_is_case_insensitive() {
        assert_eq!(short_form("3 DAYS, 1 Hour"), "3 d, 1 h");
    }

    #[test]
    fn test_short_form_is_idempotent() {
        let inputs = [
            "2 years, 3 months, 14 days, 05:12:33",
            "1 Minute 2 seconds",
            "Finished",
            "dayside, yearsx",
        ];
        for input in inputs {
            let once = short_form(input);
            assert_eq!(short_form(&once), once);
        }
    }

    #[test]
    fn test_short_form_respects_word_boundaries() {
        assert_eq!(short_form("5days"), "5days");
        assert_eq!(short_form("weekdays yearly"), "weekdays yearly");
        assert_eq!(short_form("days_left"), "days_left");
    }

    #[test]
    fn test_short_form_keeps_non_ascii_text() {
        assert_eq!(short_form("noch 2 days – ungefähr"), "noch 2 d – ungefähr");
    }

    #[test]
    fn test_hide_seconds_removes_leading_comma() {
        let out = hide_seconds("2 hours, 30 minutes, 5 seconds");
        assert_eq!(out, "2 hours, 30 minutes");
        assert!(!out.ends_with(','));
    }

    #[test]
    fn test_hide_seconds_removes_leading_colon() {
        let out = hide_seconds("1 h: 5 min: 30 s");
        assert_eq!(out, "1 h: 5 min");
        assert!(!out.trim_end().ends_with(':'));
        assert_eq!(hide_seconds("2 days:30 seconds"), "2 days");
    }

    #[test]
    fn test_hide_seconds_singular_and_abbreviated() {
        assert_eq!(hide_seconds("1 minute, 1 second"), "1 minute");
        assert_eq!(hide_seconds("1 m, 10 s"), "1 m");
        assert_eq!(hide_seconds("4h 12s"), "4h");
        assert_eq!(hide_seconds("4 H, 12 SECONDS"), "4 H");
    }

    #[test]
    fn test_hide_seconds_in_the_middle() {
        assert_eq!(hide_seconds("3 days 5 seconds left"), "3 days left");
    }

    #[test]
    fn test_hide_seconds_at_the_start_takes_following_separator() {
        assert_eq!(hide_seconds("10 seconds, then 2 hours"), "then 2 hours");
        assert_eq!(hide_seconds("30 s: 4 min"), "4 min");
        assert_eq!(hide_seconds("5 seconds left"), " left");
        assert_eq!(hide_seconds("5 seconds"), "");
    }

    #[test]
    fn test_hide_seconds_leaves_other_units() {
        assert_eq!(hide_seconds("5 hours, 3 secs"), "5 hours, 3 secs");
        assert_eq!(hide_seconds("05:12:33"), "05:12:33");
        assert_eq!(hide_seconds("Finished"), "Finished");
    }
}
