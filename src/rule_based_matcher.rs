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

use std::borrow::Cow;

use log::trace;
use strum::IntoEnumIterator;

use crate::{
    interfaces,
    metadata::{CallingCodeInfo, PhoneRule, RuleSet},
    phoneformat::{LengthCheck, MatchPass, NumberPrefix},
};

pub struct RuleBasedMatcher {
    allow_optional_prefix_matching: bool,
}

impl RuleBasedMatcher {
    pub fn new(allow_optional_prefix_matching: bool) -> Self {
        Self { allow_optional_prefix_matching }
    }

    /// Walks the rule sets of `info`: first the strict pass over all of
    /// them, then for each set the relaxed pass followed by the fallback
    /// that ignores the prefix bits.
    fn find_rule<'r>(
        &self,
        info: &'r CallingCodeInfo,
        number: &str,
        prefix: NumberPrefix<'_>,
        check: LengthCheck,
    ) -> Option<&'r PhoneRule> {
        for pass in MatchPass::iter() {
            for rule_set in info.rule_sets() {
                let found = rule_set
                    .candidates(number, check)
                    .find(|rule| accepts_prefix(rule, prefix, pass))
                    .or_else(|| match pass {
                        MatchPass::Strict => None,
                        MatchPass::Relaxed => self.fallback_rule(rule_set, number, prefix, check),
                    });
                if let Some(rule) = found {
                    trace!(
                        "+{}: {:?} pass matched {} for {:?} with {:?}",
                        info.calling_code(),
                        pass,
                        rule,
                        number,
                        prefix
                    );
                    return Some(rule);
                }
            }
        }
        None
    }

    /// First rule of `rule_set` passing the range and length test, whatever
    /// its bit for the prefix `number` was dialed with. Validation only
    /// takes it when no rule of the set mentions that prefix at all.
    fn fallback_rule<'r>(
        &self,
        rule_set: &'r RuleSet,
        number: &str,
        prefix: NumberPrefix<'_>,
        check: LengthCheck,
    ) -> Option<&'r PhoneRule> {
        if check == LengthCheck::Exact {
            let set_covers_prefix = match prefix {
                NumberPrefix::None => return None,
                NumberPrefix::International(_) => rule_set.has_rule_with_intl_prefix(),
                NumberPrefix::Trunk(_) => rule_set.has_rule_with_trunk_prefix(),
            };
            if set_covers_prefix || !self.allow_optional_prefix_matching {
                return None;
            }
        }
        // A number carries at most one prefix, so the bit of the other one
        // never disqualifies a rule here.
        match prefix {
            NumberPrefix::None => None,
            NumberPrefix::International(_) | NumberPrefix::Trunk(_) => {
                rule_set.candidates(number, check).next()
            }
        }
    }
}

fn accepts_prefix(rule: &PhoneRule, prefix: NumberPrefix<'_>, pass: MatchPass) -> bool {
    match prefix {
        NumberPrefix::None => match pass {
            MatchPass::Strict => rule.prefix_flags().is_empty(),
            MatchPass::Relaxed => true,
        },
        NumberPrefix::Trunk(_) => rule.uses_trunk_prefix(),
        NumberPrefix::International(_) => rule.uses_intl_prefix(),
    }
}

impl interfaces::MatcherApi for RuleBasedMatcher {
    fn format_number<'a>(&self, info: &CallingCodeInfo, number: &'a str) -> Cow<'a, str> {
        let (prefix, rest) = info.split_prefix(number);
        if let Some(rule) = self.find_rule(info, rest, prefix, LengthCheck::AtMost) {
            return Cow::Owned(rule.render(rest, prefix));
        }
        match prefix {
            NumberPrefix::International(intl_prefix) if !rest.is_empty() => {
                Cow::Owned(fast_cat::concat_str!(intl_prefix, " ", rest))
            }
            _ => Cow::Borrowed(number),
        }
    }

    fn is_valid_number(&self, info: &CallingCodeInfo, number: &str) -> bool {
        let (prefix, rest) = info.split_prefix(number);
        self.find_rule(info, rest, prefix, LengthCheck::Exact).is_some()
    }
}
