// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use tracing::{debug, trace, warn};

use crate::{
    error::Error,
    matches::{MatchStatus, Matches},
    options::Options,
    sanitize::{chars_in, chars_not_in, sanitize},
};

/// Assembles a regular expression from chained, readable method calls.
///
/// Every method appends one fragment to the pattern and returns the builder
/// itself, e.g.
///
/// ```
/// use verbal_pattern::PatternBuilder;
///
/// let mut builder = PatternBuilder::new();
/// builder
///     .find("http", None)
///     .maybe("s", None)
///     .then("://", None)
///     .anything_but(" ", Some("domain"));
///
/// let matches = builder.matches("http://example.com").unwrap();
/// assert_eq!(&matches["domain"], "example.com");
/// ```
///
/// Capture groups are numbered by the order of the calls which create them,
/// starting at 1. A named group can be retrieved both by its number and its name.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PatternBuilder {
    buffer: String,
    options: Options,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self::with_options(Options::new().delimiter(delimiter))
    }

    pub fn with_options(options: Options) -> Self {
        PatternBuilder {
            buffer: String::new(),
            options,
        }
    }

    pub fn delimiter(&self) -> char {
        self.options.delimiter
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Alias of [`PatternBuilder::find`].
    pub fn then(&mut self, text: &str, name: Option<&str>) -> &mut Self {
        self.find(text, name)
    }

    /// Find and capture the given literal text.
    pub fn find(&mut self, text: &str, name: Option<&str>) -> &mut Self {
        let text = self.sanitize(text);
        self.capture(&text, name)
    }

    /// Find the given literal text without capturing.
    pub fn search(&mut self, text: &str) -> &mut Self {
        let text = self.sanitize(text);
        self.add(&text)
    }

    /// Capture any characters, zero or more.
    pub fn anything(&mut self, name: Option<&str>) -> &mut Self {
        self.capture(".*", name)
    }

    /// Capture zero or more characters which are not in `chars`.
    /// No `chars` is the same as `anything`.
    pub fn anything_but(&mut self, chars: &str, name: Option<&str>) -> &mut Self {
        if chars.is_empty() {
            return self.anything(name);
        }

        let chars = self.sanitize(chars);
        self.capture(&format!("{}*", chars_not_in(&chars)), name)
    }

    /// Capture any characters, one or more.
    pub fn something(&mut self, name: Option<&str>) -> &mut Self {
        self.capture(".+", name)
    }

    /// Capture one or more characters which are not in `chars`.
    /// No `chars` is the same as `something`.
    pub fn something_but(&mut self, chars: &str, name: Option<&str>) -> &mut Self {
        if chars.is_empty() {
            return self.something(name);
        }

        let chars = self.sanitize(chars);
        self.capture(&format!("{}+", chars_not_in(&chars)), name)
    }

    /// Capture word characters, exactly `count` of them if given,
    /// otherwise one or more. A zero count is the same as no count.
    pub fn words(&mut self, name: Option<&str>, count: Option<usize>) -> &mut Self {
        let fragment = format!("{}{}", chars_in(r"\w"), repetition(count));
        self.capture(&fragment, name)
    }

    /// Capture digits, exactly `count` of them if given, otherwise one or more.
    pub fn decimals(&mut self, name: Option<&str>, count: Option<usize>) -> &mut Self {
        let fragment = format!("{}{}", chars_in(r"\d"), repetition(count));
        self.capture(&fragment, name)
    }

    /// Append the charset `[from-to]`, or `[from]` when `to` is absent or empty.
    ///
    /// Both bounds are inserted as-is, they are expected to be valid
    /// charset syntax.
    pub fn range(&mut self, from: &str, to: Option<&str>) -> &mut Self {
        let body = match to {
            Some(to) if !to.is_empty() => format!("{}-{}", from, to),
            _ => from.to_owned(),
        };
        self.add(&chars_in(&body))
    }

    /// Repeat the preceding fragment exactly `number` times.
    pub fn times(&mut self, number: usize) -> &mut Self {
        self.add(&format!("{{{}}}", number))
    }

    /// Repeat the preceding fragment between `from` and `to` times,
    /// the bounds can be given in either order.
    pub fn between(&mut self, from: usize, to: usize) -> &mut Self {
        let (min, max) = (from.min(to), from.max(to));
        self.add(&format!("{{{},{}}}", min, max))
    }

    /// Optionally find and capture the given literal text.
    pub fn maybe(&mut self, text: &str, name: Option<&str>) -> &mut Self {
        self.find(text, name).add("?")
    }

    /// Alias of [`PatternBuilder::any_of`].
    pub fn any(&mut self, chars: &str) -> &mut Self {
        self.any_of(chars)
    }

    /// Match one of the given characters without capturing.
    /// An empty `chars` is ignored.
    pub fn any_of(&mut self, chars: &str) -> &mut Self {
        if chars.is_empty() {
            return self;
        }

        let chars = self.sanitize(chars);
        self.add(&chars_in(&chars))
    }

    /// Append `^` followed by the raw `text`, which is not escaped.
    pub fn starts_with(&mut self, text: &str) -> &mut Self {
        self.start_of_line().add(text)
    }

    pub fn start_of_line(&mut self) -> &mut Self {
        self.add("^")
    }

    /// Append the raw `text`, which is not escaped, followed by `$`.
    pub fn ends_with(&mut self, text: &str) -> &mut Self {
        self.add(text).end_of_line()
    }

    pub fn end_of_line(&mut self) -> &mut Self {
        self.add("$")
    }

    /// Append a raw fragment verbatim. An empty fragment is ignored.
    ///
    /// The fragment is not checked, a broken one is reported when the
    /// pattern is matched.
    pub fn add(&mut self, fragment: &str) -> &mut Self {
        if !fragment.is_empty() {
            self.buffer.push_str(fragment);
        }
        self
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop all fragments, the options are kept.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// The pattern body without delimiters, as handed to the engine.
    pub fn pattern(&self) -> &str {
        &self.buffer
    }

    /// The pattern wrapped by the delimiter, e.g. `/^test$/`.
    pub fn compile(&self) -> String {
        let delimiter = self.options.delimiter;
        format!("{}{}{}", delimiter, self.buffer, delimiter)
    }

    /// Build the engine regex with the configured flags.
    pub fn to_regex(&self) -> Result<regex::Regex, Error> {
        debug!(
            pattern = %self.compile(),
            modifiers = %self.options.modifiers(),
            "building regex"
        );

        self.options.build_regex(&self.buffer).map_err(|err| {
            let err = Error::from_engine_error(&self.buffer, err);
            warn!(error = %err, "pattern rejected by the regex engine");
            err
        })
    }

    /// Run the pattern against `subject`.
    ///
    /// Returns empty matches with the status [`MatchStatus::NoMatch`] when
    /// nothing matches, and an error when the pattern itself is invalid.
    pub fn matches<'t>(&self, subject: &'t str) -> Result<Matches<'t>, Error> {
        let re = self.to_regex()?;
        let matches = match re.captures(subject) {
            Some(captures) => Matches::from_captures(&re, &captures),
            None => Matches::no_match(),
        };

        trace!(
            status = matches.status().code(),
            groups = matches.len(),
            "match finished"
        );
        Ok(matches)
    }

    pub fn status(&self, subject: &str) -> Result<MatchStatus, Error> {
        if self.is_match(subject)? {
            Ok(MatchStatus::Match)
        } else {
            Ok(MatchStatus::NoMatch)
        }
    }

    pub fn is_match(&self, subject: &str) -> Result<bool, Error> {
        Ok(self.to_regex()?.is_match(subject))
    }

    fn sanitize(&self, text: &str) -> String {
        sanitize(text, self.options.delimiter)
    }

    // wraps the fragment in a (named) capture group, the fragment
    // is not sanitized.
    //
    // a name which is not a valid group name, or which is already taken,
    // is dropped and the group stays numbered only.
    fn capture(&mut self, fragment: &str, name: Option<&str>) -> &mut Self {
        let group = match name {
            Some(name) if !name.is_empty() => {
                if !is_group_name(name) {
                    warn!(name, "invalid capture group name, the group is left unnamed");
                    format!("({})", fragment)
                } else if self.has_group_name(name) {
                    warn!(name, "duplicate capture group name, the group is left unnamed");
                    format!("({})", fragment)
                } else {
                    format!("(?P<{}>{})", name, fragment)
                }
            }
            _ => format!("({})", fragment),
        };
        self.add(&group)
    }

    fn has_group_name(&self, name: &str) -> bool {
        self.buffer.contains(&format!("(?P<{}>", name))
            || self.buffer.contains(&format!("(?<{}>", name))
    }
}

// group name rules of the engine: the first character is `_` or a letter,
// the rest are `_`, `.`, `[`, `]`, letters or digits.
fn is_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => chars
            .all(|c| c == '_' || c == '.' || c == '[' || c == ']' || c.is_alphanumeric()),
        _ => false,
    }
}

fn repetition(count: Option<usize>) -> String {
    match count {
        Some(n) if n > 0 => format!("{{{}}}", n),
        _ => "+".to_owned(),
    }
}

impl Display for PatternBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.compile())
    }
}
