// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

pub const DEFAULT_DELIMITER: char = '/';

/// Per-builder settings.
///
/// The delimiter wraps the compiled pattern and decides which extra character
/// gets escaped in literal text. The flags are not part of the compiled text,
/// they are forwarded to the engine when the pattern is built.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Options {
    pub delimiter: char,
    pub case_insensitive: bool,
    pub multi_line: bool,          // `^` and `$` match at line boundaries
    pub dot_matches_new_line: bool,
    pub size_limit: Option<usize>, // None for the engine default
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            size_limit: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(self, delimiter: char) -> Self {
        Self { delimiter, ..self }
    }

    pub fn case_insensitive(self, yes: bool) -> Self {
        Self {
            case_insensitive: yes,
            ..self
        }
    }

    pub fn multi_line(self, yes: bool) -> Self {
        Self {
            multi_line: yes,
            ..self
        }
    }

    pub fn dot_matches_new_line(self, yes: bool) -> Self {
        Self {
            dot_matches_new_line: yes,
            ..self
        }
    }

    pub fn size_limit(self, bytes: usize) -> Self {
        Self {
            size_limit: Some(bytes),
            ..self
        }
    }

    /// The flag letters in PCRE order, e.g. `"im"`.
    pub fn modifiers(&self) -> String {
        let mut s = String::new();
        if self.case_insensitive {
            s.push('i');
        }
        if self.multi_line {
            s.push('m');
        }
        if self.dot_matches_new_line {
            s.push('s');
        }
        s
    }

    pub(crate) fn build_regex(&self, pattern: &str) -> Result<regex::Regex, regex::Error> {
        let mut builder = regex::RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line);

        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Options, DEFAULT_DELIMITER};

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.delimiter, DEFAULT_DELIMITER);
        assert_eq!(options.modifiers(), "");
        assert_eq!(options.size_limit, None);
    }

    #[test]
    fn test_modifiers() {
        let options = Options::new()
            .delimiter('#')
            .dot_matches_new_line(true)
            .case_insensitive(true);

        assert_eq!(options.delimiter, '#');
        assert_eq!(options.modifiers(), "is");
        assert_eq!(Options::new().multi_line(true).modifiers(), "m");
    }

    #[test]
    fn test_build_regex_with_flags() {
        let re = Options::new().build_regex("abc").unwrap();
        assert!(!re.is_match("ABC"));

        let re = Options::new()
            .case_insensitive(true)
            .build_regex("abc")
            .unwrap();
        assert!(re.is_match("ABC"));

        let re = Options::new().multi_line(true).build_regex("^b$").unwrap();
        assert!(re.is_match("a\nb\nc"));

        let re = Options::new()
            .dot_matches_new_line(true)
            .build_regex("a.b")
            .unwrap();
        assert!(re.is_match("a\nb"));
    }

    #[test]
    fn test_build_regex_over_size_limit() {
        let err = Options::new()
            .size_limit(10)
            .build_regex(r"\w{100}")
            .unwrap_err();
        assert!(matches!(err, regex::Error::CompiledTooBig(_)));
    }
}
