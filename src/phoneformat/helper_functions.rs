// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use super::helper_constants::NON_PHONE_CHARS;

static NON_PHONE_CHARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_PHONE_CHARS).expect("Invalid constant pattern!"));

/// Removes everything except digits, `+`, `*` and `#`. Borrows the input
/// when there is nothing to remove.
pub(crate) fn strip_non_phone_chars(phone_number: &str) -> Cow<'_, str> {
    NON_PHONE_CHARS_PATTERN.replace_all(phone_number, "")
}

/// Lowercases a two letter country code, `None` if the input is not one.
pub(crate) fn normalize_country_code(country_code: &str) -> Option<String> {
    let trimmed = country_code.trim();
    if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}
