//! Duration units recognised inside countdown text.
//!
//! A [`Unit`] is one of the six granularities a long-form countdown sensor
//! reports: years, months, days, hours, minutes and seconds. Each unit knows
//! its canonical key (used to build per-unit option names such as
//! `min_n_color`), the abbreviation used in short-form mode, and the word
//! forms it accepts when tokenizing.
//!
//! # Matching
//!
//! Word forms are tried longest first and must end on a word boundary, so
//! `"minutes"` is never read as the month abbreviation `"m"` followed by
//! `"inutes"`:
//!
//! ```rust
//! use long_form_countdown::unit::Unit;
//!
//! assert_eq!(Unit::match_at("minutes left"), Some((Unit::Minute, 7)));
//! assert_eq!(Unit::match_at("m, 3 d"), Some((Unit::Month, 1)));
//! assert_eq!(Unit::match_at("mins"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six duration granularities, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Years (`y`).
    Year,
    /// Months (`m`).
    Month,
    /// Days (`d`).
    Day,
    /// Hours (`h`).
    Hour,
    /// Minutes (`min`).
    Minute,
    /// Seconds (`s`).
    Second,
}

impl Unit {
    /// All units in the fixed order used for tokenizing.
    pub const ALL: [Unit; 6] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Canonical key used to name per-unit options (`y`, `m`, `d`, `h`, `min`, `s`).
    pub fn key(self) -> &'static str {
        match self {
            Unit::Year => "y",
            Unit::Month => "m",
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "min",
            Unit::Second => "s",
        }
    }

    /// Abbreviation substituted for the full word in short-form mode.
    ///
    /// Identical to [`Unit::key`] today; kept separate because the option
    /// naming scheme and the display abbreviation are different concerns.
    pub fn abbreviation(self) -> &'static str {
        self.key()
    }

    /// Singular English name.
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Plural English name.
    pub fn plural(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
        }
    }

    /// Human label used by the editor ("Year", "Min", ...).
    pub fn label(self) -> &'static str {
        match self {
            Unit::Year => "Year",
            Unit::Month => "Month",
            Unit::Day => "Day",
            Unit::Hour => "Hour",
            Unit::Minute => "Min",
            Unit::Second => "Sec",
        }
    }

    /// Accepted word forms, longest first.
    pub fn forms(self) -> [&'static str; 3] {
        [self.plural(), self.singular(), self.abbreviation()]
    }

    /// Looks up a unit by its canonical key.
    pub fn from_key(key: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| u.key() == key)
    }

    /// Returns the unit whose full name (singular or plural) equals `word`,
    /// ignoring ASCII case. Abbreviations do not count.
    pub fn from_full_name(word: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| {
            word.eq_ignore_ascii_case(u.singular()) || word.eq_ignore_ascii_case(u.plural())
        })
    }

    /// Matches a unit word at the start of `text`.
    ///
    /// Units are tried in [`Unit::ALL`] order and each unit's forms longest
    /// first. A form only matches when it is followed by a word boundary.
    /// Returns the unit and the byte length of the matched word.
    pub fn match_at(text: &str) -> Option<(Unit, usize)> {
        Unit::ALL.into_iter().find_map(|unit| {
            unit.forms()
                .into_iter()
                .find(|form| starts_with_word(text, form))
                .map(|form| (unit, form.len()))
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// ASCII word character, matching the `\w` class of common regex engines.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when `text` starts with `word` (ASCII case-insensitive) and the
/// match ends on a word boundary.
pub(crate) fn starts_with_word(text: &str, word: &str) -> bool {
    let Some(head) = text.get(..word.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(word) {
        return false;
    }
    text[word.len()..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c))
}
