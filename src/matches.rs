// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    collections::BTreeMap,
    ops::{Index, Range},
};

/// Outcome of running a pattern against a subject.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchStatus {
    NoMatch = 0,
    Match = 1,
}

impl MatchStatus {
    /// `0` for no match and `1` for a match.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// The key of a captured value, either the group position or the group name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Matches<'t> {
    status: MatchStatus,
    positional: BTreeMap<usize, Capture<'t>>,
    named: BTreeMap<String, Capture<'t>>,
}

impl<'t> Matches<'t> {
    pub(crate) fn no_match() -> Self {
        Matches {
            status: MatchStatus::NoMatch,
            positional: BTreeMap::new(),
            named: BTreeMap::new(),
        }
    }

    pub(crate) fn from_captures(re: &regex::Regex, captures: &regex::Captures<'t>) -> Self {
        // groups which did not participate in the match get no entry
        let positional: BTreeMap<usize, Capture<'t>> = captures
            .iter()
            .enumerate()
            .filter_map(|(idx, m)| m.map(|m| (idx, Capture::from(m))))
            .collect();

        let named: BTreeMap<String, Capture<'t>> = re
            .capture_names()
            .enumerate()
            .filter_map(|(idx, name)| {
                let name = name?;
                let capture = positional.get(&idx)?;
                Some((name.to_owned(), capture.clone()))
            })
            .collect();

        Matches {
            status: MatchStatus::Match,
            positional,
            named,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::Match
    }

    /// The whole matched text, i.e. the group `0`.
    pub fn whole(&self) -> Option<&Capture<'t>> {
        self.positional.get(&0)
    }

    pub fn get(&self, index: usize) -> Option<&Capture<'t>> {
        self.positional.get(&index)
    }

    pub fn name(&self, name: &str) -> Option<&Capture<'t>> {
        self.named.get(name)
    }

    /// The number of groups which took part in the match, including the
    /// whole match.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// The number of entries yielded by `iter`, a named group is counted
    /// twice since it is reachable by position and by name.
    pub fn entries(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, positional ones first (in group order) and then the
    /// named ones (in name order).
    pub fn iter(&self) -> impl Iterator<Item = (Key<'_>, &'t str)> + '_ {
        let positional = self
            .positional
            .iter()
            .map(|(idx, capture)| (Key::Index(*idx), capture.as_str()));
        let named = self
            .named
            .iter()
            .map(|(name, capture)| (Key::Name(name.as_str()), capture.as_str()));
        positional.chain(named)
    }
}

impl Index<usize> for Matches<'_> {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| {
                panic!(
                    "Capture group {} does not exist or did not participate in the match.",
                    index
                )
            })
            .as_str()
    }
}

impl Index<&str> for Matches<'_> {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        self.name(name)
            .unwrap_or_else(|| panic!("Cannot find the capture group named \"{}\".", name))
            .as_str()
    }
}

/// A single captured text.
#[derive(Debug, PartialEq, Clone)]
pub struct Capture<'t> {
    pub start: usize, // the position of utf-8 byte stream (value included)
    pub end: usize,   // the position of utf-8 byte stream (value excluded)
    pub value: &'t str,
}

impl<'t> Capture<'t> {
    pub fn new(start: usize, end: usize, value: &'t str) -> Self {
        Capture { start, end, value }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &'t str {
        self.value
    }
}

impl<'t> From<regex::Match<'t>> for Capture<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Capture::new(m.start(), m.end(), m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Capture, Key, MatchStatus, Matches};

    fn captures_of<'t>(pattern: &str, text: &'t str) -> Matches<'t> {
        let re = regex::Regex::new(pattern).unwrap();
        match re.captures(text) {
            Some(captures) => Matches::from_captures(&re, &captures),
            None => Matches::no_match(),
        }
    }

    #[test]
    fn test_status_code() {
        assert_eq!(MatchStatus::NoMatch.code(), 0);
        assert_eq!(MatchStatus::Match.code(), 1);
    }

    #[test]
    fn test_no_match() {
        let m = captures_of("(a)(b)", "xyz");
        assert_eq!(m.status(), MatchStatus::NoMatch);
        assert!(!m.is_match());
        assert!(m.is_empty());
        assert_eq!(m.entries(), 0);
        assert_eq!(m.whole(), None);
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn test_positional_captures() {
        let m = captures_of("(a+)(b+)", "xaabbby");
        assert!(m.is_match());
        assert_eq!(m.whole(), Some(&Capture::new(1, 6, "aabbb")));
        assert_eq!(m.get(1), Some(&Capture::new(1, 3, "aa")));
        assert_eq!(m.get(2), Some(&Capture::new(3, 6, "bbb")));
        assert_eq!(m.get(3), None);
        assert_eq!(&m[0], "aabbb");
        assert_eq!(&m[2], "bbb");
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_named_captures() {
        let m = captures_of(r"(?P<year>\d{4})-(\d{2})", "on 2024-05");
        assert_eq!(&m[1], "2024");
        assert_eq!(&m["year"], "2024");
        assert_eq!(m.name("year"), m.get(1));
        assert_eq!(m.name("month"), None);
        assert_eq!(m.len(), 3);
        assert_eq!(m.entries(), 4);

        let entries: Vec<(Key, &str)> = m.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Key::Index(0), "2024-05"),
                (Key::Index(1), "2024"),
                (Key::Index(2), "05"),
                (Key::Name("year"), "2024"),
            ]
        );
    }

    #[test]
    fn test_non_participating_groups() {
        let m = captures_of("(a)?(?P<tail>b)?c", "c");
        assert!(m.is_match());
        assert_eq!(&m[0], "c");
        assert_eq!(m.get(1), None);
        assert_eq!(m.get(2), None);
        assert_eq!(m.name("tail"), None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.entries(), 1);
    }

    #[test]
    fn test_capture_range() {
        let m = captures_of("文(字)", "abc文字");
        let c = m.get(1).unwrap();
        assert_eq!(c.start(), 6);
        assert_eq!(c.end(), 9);
        assert_eq!(c.len(), 3);
        assert_eq!(c.range(), 6..9);
        assert!(!c.is_empty());
        assert_eq!(c.as_str(), "字");
    }

    #[test]
    #[should_panic(expected = "Cannot find the capture group named \"host\".")]
    fn test_index_by_missing_name() {
        let m = captures_of("(a)", "a");
        let _ = &m["host"];
    }
}
