// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Failures raised when a compiled pattern is handed to the regex engine.
///
/// Building a pattern never fails, a "no match" outcome is not an error either.
#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum Error {
    /// The engine rejected the pattern syntax, usually because of a raw
    /// fragment appended through `add`, `range`, `starts_with` or `ends_with`,
    /// or a quantifier with nothing to repeat.
    #[error("Invalid pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The compiled program exceeds the configured size limit.
    #[error("Pattern \"{pattern}\" exceeds the size limit of {limit} bytes.")]
    PatternTooBig { pattern: String, limit: usize },

    #[error("Regex engine error: {0}")]
    Engine(String),
}

impl Error {
    pub(crate) fn from_engine_error(pattern: &str, err: regex::Error) -> Self {
        match err {
            regex::Error::Syntax(message) => Error::InvalidPattern {
                pattern: pattern.to_owned(),
                message,
            },
            regex::Error::CompiledTooBig(limit) => Error::PatternTooBig {
                pattern: pattern.to_owned(),
                limit,
            },
            other => Error::Engine(other.to_string()),
        }
    }
}
