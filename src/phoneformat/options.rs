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

/// Settings of a [`super::PhoneFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormatOptions {
    /// Two letter country code (any case) whose rules apply to numbers
    /// without a leading `+`. When `None`, the host region is used.
    pub default_country: Option<String>,
    /// Whether validation may fall back to rules that ignore a prefix the
    /// number carries, when its rule set has no rule for that prefix.
    pub allow_optional_prefix_matching: bool,
}

impl Default for PhoneFormatOptions {
    fn default() -> Self {
        Self {
            default_country: None,
            allow_optional_prefix_matching: true,
        }
    }
}

impl PhoneFormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_country(mut self, country_code: impl Into<String>) -> Self {
        self.default_country = Some(country_code.into());
        self
    }

    pub fn with_optional_prefix_matching(mut self, allow: bool) -> Self {
        self.allow_optional_prefix_matching = allow;
        self
    }
}
