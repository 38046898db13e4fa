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

pub const PLUS_SIGN: &str = "+";

/// Everything that is dropped by unformatting. Digits, the plus sign, star
/// and hash are kept.
pub const NON_PHONE_CHARS: &str = r"[^0-9+*#]";

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Template placeholder for the international prefix.
pub const TEMPLATE_INTL_PREFIX: char = 'c';
/// Template placeholder for the trunk prefix.
pub const TEMPLATE_TRUNK_PREFIX: char = 'n';
/// Template placeholder for a single digit.
pub const TEMPLATE_DIGIT: char = '#';
pub const TEMPLATE_GROUP_OPEN: char = '(';
pub const TEMPLATE_GROUP_CLOSE: char = ')';
