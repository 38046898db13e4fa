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

use std::fmt;

use super::PhoneRule;
use crate::{phoneformat::LengthCheck, string_util::leading_value};

/// Rules sharing one discriminator: the value of the first `match_len`
/// digits of a number. Rule order is the priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    match_len: usize,
    rules: Vec<PhoneRule>,
    has_rule_with_intl_prefix: bool,
    has_rule_with_trunk_prefix: bool,
}

impl RuleSet {
    pub fn new(match_len: usize, rules: Vec<PhoneRule>) -> Self {
        let has_rule_with_intl_prefix = rules.iter().any(PhoneRule::uses_intl_prefix);
        let has_rule_with_trunk_prefix = rules.iter().any(PhoneRule::uses_trunk_prefix);
        Self {
            match_len,
            rules,
            has_rule_with_intl_prefix,
            has_rule_with_trunk_prefix,
        }
    }

    pub fn match_len(&self) -> usize {
        self.match_len
    }

    pub fn rules(&self) -> &[PhoneRule] {
        &self.rules
    }

    pub fn has_rule_with_intl_prefix(&self) -> bool {
        self.has_rule_with_intl_prefix
    }

    pub fn has_rule_with_trunk_prefix(&self) -> bool {
        self.has_rule_with_trunk_prefix
    }

    /// Rules, in order, whose range and length limit accept `number`.
    /// Numbers shorter than `match_len` yield nothing.
    pub fn candidates<'s>(
        &'s self,
        number: &str,
        check: LengthCheck,
    ) -> impl Iterator<Item = &'s PhoneRule> + use<'s> {
        let length = number.chars().count();
        let value = leading_value(number, self.match_len);
        self.rules
            .iter()
            .filter(move |rule| value.is_some_and(|value| rule.accepts(value, length, check)))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  match_len={} trunk_rules={} intl_rules={}",
            self.match_len, self.has_rule_with_trunk_prefix, self.has_rule_with_intl_prefix
        )?;
        for rule in &self.rules {
            writeln!(f, "    {}", rule)?;
        }
        Ok(())
    }
}
