// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// meta characters of the engine dialect:
//
// `\ . + * ? ( ) | [ ] { } ^ $ # & - ~`
//
// all of them are escaped with a leading `\`, both outside and inside
// a charset, so a sanitized text can be placed in either position.
//
// the delimiter is escaped as well when the dialect accepts an escaped form
// of it, i.e. any ASCII character except `0-9`, `A-Z`, `a-z`, `<` and `>`.
// a delimiter without an escaped form is left untouched, the engine never
// sees the delimiter itself so it can not terminate the body.

use regex_syntax::{is_escapeable_character, is_meta_character};

/// Escape `text` so that it matches itself literally when embedded in a
/// pattern wrapped by `delimiter`.
pub fn sanitize(text: &str, delimiter: char) -> String {
    let escape_delimiter = is_escapeable_character(delimiter);

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_meta_character(c) || (escape_delimiter && c == delimiter) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Charset which matches any of the given characters, e.g. `[abc]`.
pub(crate) fn chars_in(body: &str) -> String {
    format!("[{}]", body)
}

/// Negative charset, e.g. `[^abc]`.
pub(crate) fn chars_not_in(body: &str) -> String {
    chars_in(&format!("^{}", body))
}
