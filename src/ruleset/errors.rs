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

use thiserror::Error;

/// The rule table can not be used at all. Raised once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    #[error("Ruleset is too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Ruleset directory of {entries} entries needs {required} bytes, got {actual}")]
    TruncatedDirectory {
        entries: usize,
        required: usize,
        actual: usize,
    },
}

/// Errors of [`super::RulesetWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetWriteError {
    #[error("Code {0:?} does not fit into a 4 byte directory field")]
    CodeTooLong(String),

    #[error("{what} of calling code {calling_code} exceeds {limit} bytes")]
    BlockTooLarge {
        calling_code: String,
        what: &'static str,
        limit: usize,
    },
}
