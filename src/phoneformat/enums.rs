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

use strum::EnumIter;

/// The two prefix-aware passes of rule selection, in the order they are
/// tried. The prefix-agnostic fallback is not a pass of its own: it runs
/// per rule set right after that set's [`MatchPass::Relaxed`] attempt.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPass {
    /// A rule without prefix bits only matches a number without prefix.
    Strict,
    /// Any rule matches a number without prefix.
    Relaxed,
}

/// The prefix found in front of a number by its calling code info. A
/// number never carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberPrefix<'a> {
    #[default]
    None,
    /// The number started with a trunk prefix, e.g. "0" or "1".
    Trunk(&'a str),
    /// The number started with the calling code itself.
    International(&'a str),
}

impl<'a> NumberPrefix<'a> {
    pub fn trunk(&self) -> Option<&'a str> {
        match self {
            NumberPrefix::Trunk(prefix) => Some(prefix),
            _ => None,
        }
    }

    pub fn international(&self) -> Option<&'a str> {
        match self {
            NumberPrefix::International(prefix) => Some(prefix),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, NumberPrefix::None)
    }
}

/// How the length of a number is compared with `max_len` of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthCheck {
    /// Formatting: partial numbers are fine.
    AtMost,
    /// Validation: the number must be complete.
    Exact,
}
