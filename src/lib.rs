// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod builder;
mod error;
mod matches;
mod options;
mod sanitize;

pub use builder::PatternBuilder;
pub use error::Error;
pub use matches::{Capture, Key, MatchStatus, Matches};
pub use options::{Options, DEFAULT_DELIMITER};
pub use sanitize::sanitize;
