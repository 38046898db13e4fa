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

use crate::ruleset::RulesetError;

/// Failures of [`super::PhoneFormat`] construction. Once built, the
/// formatter never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneFormatError {
    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(#[from] RulesetError),

    #[error("Default country must be a two letter code, got {0:?}")]
    InvalidDefaultCountry(String),
}
