//! Normalization of the raw text fragments a statement line yields, and the
//! ordered first-match-wins rule tables the vendors map descriptions with.

use slugify::slugify;
use time::{Date, Month};

/// Normalize a statement amount into a canonical signed decimal string.
///
/// Currency symbol, surrounding whitespace and thousands separators are
/// stripped; parentheses or a leading minus mean negative.  The digit
/// sequence and decimal point are preserved exactly, no rounding.
pub(crate) fn scrub_amount(raw: &str) -> String {
    let mut s = raw.trim();
    let mut negative = false;

    if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    }
    s = s.trim_start_matches('$').trim_start();
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    }

    let digits = s.replace(',', "");
    if negative {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Normalize `MM-DD-YYYY`, `MM/DD/YYYY` or `M/D/YYYY` into `YYYY-MM-DD`.
///
/// Anything that does not decompose into three numeric components naming a
/// real calendar day passes through unchanged rather than failing.
pub(crate) fn scrub_date(raw: &str) -> String {
    let parts = raw.split(['-', '/']).collect::<Vec<_>>();
    if parts.len() != 3 {
        return raw.to_string();
    }
    let (Ok(month), Ok(day), Ok(year)) = (
        parts[0].parse::<u8>(),
        parts[1].parse::<u8>(),
        parts[2].parse::<i32>(),
    ) else {
        return raw.to_string();
    };
    let valid = Month::try_from(month).and_then(|month| Date::from_calendar_date(year, month, day));
    match valid {
        Ok(_) => format!("{year:04}-{month:02}-{day:02}"),
        Err(_) => raw.to_string(),
    }
}

/// Flip the sign of a canonical decimal string.
pub(crate) fn flip_sign(value: &str) -> String {
    match value.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{value}"),
    }
}

/// Turn a free-text property name into a beancount account segment,
/// e.g. `2943 Butterfly Palm` becomes `2943-Butterfly-Palm`.
pub(crate) fn account_segment(name: &str) -> String {
    slugify(name.trim(), "", "-", None)
        .split('-')
        .map(|chunk| {
            let mut chars = chunk.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// An ordered list of (substring conjunction, result) rules.
///
/// The first rule whose needles all occur in the description wins.  These
/// tables encode vendor business rules literally, one table per vendor per
/// axis (payee, account, narration).
pub(crate) struct RuleTable<T: 'static>(pub(crate) &'static [(&'static [&'static str], T)]);

impl<T> RuleTable<T> {
    pub(crate) fn lookup(&self, desc: &str) -> Option<&'static T> {
        self.0
            .iter()
            .find(|(needles, _)| needles.iter().all(|needle| desc.contains(needle)))
            .map(|(_, result)| result)
    }
}
