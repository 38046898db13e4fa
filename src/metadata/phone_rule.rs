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

use crate::{
    phoneformat::{
        LengthCheck, NumberPrefix, TEMPLATE_DIGIT, TEMPLATE_GROUP_CLOSE, TEMPLATE_GROUP_OPEN,
        TEMPLATE_INTL_PREFIX, TEMPLATE_TRUNK_PREFIX,
    },
    ruleset::PrefixFlags,
};

/// A numeric range of leading digits, a length limit, the prefixes the rule
/// applies to and the template used to render matching numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRule {
    min_val: u32,
    max_val: u32,
    max_len: u8,
    prefix_flags: PrefixFlags,
    format: String,
}

impl PhoneRule {
    pub fn new(
        min_val: u32,
        max_val: u32,
        max_len: u8,
        prefix_flags: PrefixFlags,
        format: String,
    ) -> Self {
        Self { min_val, max_val, max_len, prefix_flags, format }
    }

    pub fn min_val(&self) -> u32 {
        self.min_val
    }

    pub fn max_val(&self) -> u32 {
        self.max_val
    }

    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    pub fn prefix_flags(&self) -> PrefixFlags {
        self.prefix_flags
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn uses_trunk_prefix(&self) -> bool {
        self.prefix_flags.contains(PrefixFlags::TRUNK)
    }

    pub fn uses_intl_prefix(&self) -> bool {
        self.prefix_flags.contains(PrefixFlags::INTL)
    }

    /// Range and length test shared by every matching pass. `value` is the
    /// discriminator of the owning rule set, `length` the length of the
    /// prefix-stripped number.
    pub fn accepts(&self, value: u32, length: usize, check: LengthCheck) -> bool {
        let max_len = self.max_len as usize;
        let length_ok = match check {
            LengthCheck::AtMost => length <= max_len,
            LengthCheck::Exact => length == max_len,
        };
        length_ok && (self.min_val..=self.max_val).contains(&value)
    }

    /// Renders `number` (already stripped of `prefix`) through the template.
    ///
    /// `c` and `n` stand for the international and trunk prefix, `#` for the
    /// next digit. Punctuation is only kept while digits remain, except for a
    /// `)` closing a group opened earlier; missing digits inside an open
    /// group are padded with spaces. A prefix the template has no place for
    /// is put in front of the result.
    pub fn render(&self, number: &str, prefix: NumberPrefix<'_>) -> String {
        let intl_prefix = prefix.international();
        let trunk_prefix = prefix.trunk();
        let mut rest = number;
        let mut result = String::with_capacity(self.format.len() + 4);
        let mut had_intl = false;
        let mut had_trunk = false;
        let mut group_open = false;
        let mut previous = None;

        for ch in self.format.chars() {
            match ch {
                TEMPLATE_INTL_PREFIX => {
                    had_intl = true;
                    if let Some(intl_prefix) = intl_prefix {
                        result.push_str(intl_prefix);
                    }
                }
                TEMPLATE_TRUNK_PREFIX => {
                    had_trunk = true;
                    if let Some(trunk_prefix) = trunk_prefix {
                        result.push_str(trunk_prefix);
                    }
                }
                TEMPLATE_DIGIT => match rest.chars().next() {
                    Some(digit) => {
                        result.push(digit);
                        rest = &rest[digit.len_utf8()..];
                    }
                    None if group_open => result.push(' '),
                    None => {}
                },
                _ => {
                    if ch == TEMPLATE_GROUP_OPEN && !rest.is_empty() {
                        group_open = true;
                    }
                    // The space after an absent prefix goes with it.
                    let orphan_space = ch == ' '
                        && match previous {
                            Some(TEMPLATE_TRUNK_PREFIX) => trunk_prefix.is_none(),
                            Some(TEMPLATE_INTL_PREFIX) => intl_prefix.is_none(),
                            _ => false,
                        };
                    let closes_group = ch == TEMPLATE_GROUP_CLOSE && group_open;
                    if !orphan_space && (!rest.is_empty() || closes_group) {
                        result.push(ch);
                        if ch == TEMPLATE_GROUP_CLOSE {
                            group_open = false;
                        }
                    }
                }
            }
            previous = Some(ch);
        }
        result.push_str(rest);

        match prefix {
            NumberPrefix::International(intl_prefix) if !had_intl => {
                fast_cat::concat_str!(intl_prefix, " ", &result)
            }
            NumberPrefix::Trunk(trunk_prefix) if !had_trunk => {
                fast_cat::concat_str!(trunk_prefix, &result)
            }
            _ => result,
        }
    }
}

impl fmt::Display for PhoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..={}] len<={} {}{} \"{}\"",
            self.min_val,
            self.max_val,
            self.max_len,
            if self.uses_trunk_prefix() { "n" } else { "-" },
            if self.uses_intl_prefix() { "c" } else { "-" },
            self.format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneRule;
    use crate::{
        phoneformat::{LengthCheck, NumberPrefix},
        ruleset::PrefixFlags,
    };

    fn rule(format: &str) -> PhoneRule {
        PhoneRule::new(200, 999, 10, PrefixFlags::empty(), format.to_owned())
    }

    #[test]
    fn range_and_length() {
        let rule = rule("(###) ###-####");
        assert!(rule.accepts(200, 10, LengthCheck::AtMost));
        assert!(rule.accepts(999, 3, LengthCheck::AtMost));
        assert!(!rule.accepts(199, 10, LengthCheck::AtMost));
        assert!(!rule.accepts(1000, 10, LengthCheck::AtMost));
        assert!(!rule.accepts(202, 11, LengthCheck::AtMost));
        assert!(rule.accepts(202, 10, LengthCheck::Exact));
        assert!(!rule.accepts(202, 9, LengthCheck::Exact));
    }

    #[test]
    fn renders_complete_number() {
        let rule = rule("(###) ###-####");
        assert_eq!(rule.render("2025551234", NumberPrefix::None), "(202) 555-1234");
    }

    #[test]
    fn drops_trailing_punctuation_of_partial_number() {
        let rule = rule("(###) ###-####");
        assert_eq!(rule.render("202555", NumberPrefix::None), "(202) 555");
        assert_eq!(rule.render("2025", NumberPrefix::None), "(202) 5");
    }

    #[test]
    fn pads_open_group() {
        let rule = rule("(###) ###-####");
        assert_eq!(rule.render("20", NumberPrefix::None), "(20 )");
        assert_eq!(rule.render("", NumberPrefix::None), "");
    }

    #[test]
    fn prefix_placeholders() {
        let rule = rule("c (###) ###-####");
        assert_eq!(
            rule.render("2025551234", NumberPrefix::International("1")),
            "1 (202) 555-1234"
        );
        assert_eq!(rule.render("2025551234", NumberPrefix::None), "(202) 555-1234");

        let rule = self::rule("n ## #### ####");
        assert_eq!(rule.render("2079460000", NumberPrefix::Trunk("0")), "0 20 7946 0000");
        assert_eq!(rule.render("2079460000", NumberPrefix::None), "20 7946 0000");
    }

    #[test]
    fn missing_placeholder_prepends_prefix() {
        let rule = rule("(###) ###-####");
        assert_eq!(rule.render("2025551234", NumberPrefix::Trunk("1")), "1(202) 555-1234");
        assert_eq!(
            rule.render("2025551234", NumberPrefix::International("1")),
            "1 (202) 555-1234"
        );
    }

    #[test]
    fn extra_digits_are_kept() {
        let rule = rule("###-####");
        assert_eq!(rule.render("555123456", NumberPrefix::None), "555-123456");
    }
}
