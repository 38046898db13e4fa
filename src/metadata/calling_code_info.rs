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

use super::RuleSet;
use crate::{phoneformat::NumberPrefix, string_util::matching_prefix};

/// Everything the rule table knows about one calling code. Built once and
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingCodeInfo {
    calling_code: String,
    countries: Vec<String>,
    trunk_prefixes: Vec<String>,
    intl_prefixes: Vec<String>,
    rule_sets: Vec<RuleSet>,
}

impl CallingCodeInfo {
    pub fn new(
        calling_code: String,
        countries: Vec<String>,
        trunk_prefixes: Vec<String>,
        intl_prefixes: Vec<String>,
        rule_sets: Vec<RuleSet>,
    ) -> Self {
        Self { calling_code, countries, trunk_prefixes, intl_prefixes, rule_sets }
    }

    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    /// Country codes sharing this calling code, in directory order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn trunk_prefixes(&self) -> &[String] {
        &self.trunk_prefixes
    }

    pub fn intl_prefixes(&self) -> &[String] {
        &self.intl_prefixes
    }

    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// The international access code `number` starts with, if any.
    pub fn matching_access_code(&self, number: &str) -> Option<&str> {
        matching_prefix(number, &self.intl_prefixes)
    }

    /// The trunk prefix `number` starts with, if any.
    pub fn matching_trunk_code(&self, number: &str) -> Option<&str> {
        matching_prefix(number, &self.trunk_prefixes)
    }

    /// Splits the prefix off `number`. A leading calling code counts as the
    /// international prefix, unless the calling code is also one of the
    /// trunk prefixes; then the trunk reading wins.
    ///
    /// For NANP-style data ("1" is both) this means "+1..." numbers are
    /// matched as trunk-prefixed: rules carrying only the international
    /// bit are never picked for them.
    pub fn split_prefix<'a>(&'a self, number: &'a str) -> (NumberPrefix<'a>, &'a str) {
        let calling_code = self.calling_code.as_str();
        let code_is_trunk = self.trunk_prefixes.iter().any(|trunk| trunk == calling_code);
        if !calling_code.is_empty() && !code_is_trunk {
            if let Some(rest) = number.strip_prefix(calling_code) {
                return (NumberPrefix::International(calling_code), rest);
            }
        }
        if let Some(trunk) = self.matching_trunk_code(number) {
            return (NumberPrefix::Trunk(trunk), &number[trunk.len()..]);
        }
        (NumberPrefix::None, number)
    }
}

impl fmt::Display for CallingCodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "+{} countries={:?} trunk={:?} intl={:?}",
            self.calling_code, self.countries, self.trunk_prefixes, self.intl_prefixes
        )?;
        for rule_set in &self.rule_sets {
            write!(f, "{}", rule_set)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CallingCodeInfo;
    use crate::phoneformat::NumberPrefix;

    fn info(calling_code: &str, trunk: &[&str], intl: &[&str]) -> CallingCodeInfo {
        CallingCodeInfo::new(
            calling_code.to_owned(),
            vec![],
            trunk.iter().map(|s| s.to_string()).collect(),
            intl.iter().map(|s| s.to_string()).collect(),
            vec![],
        )
    }

    #[test]
    fn calling_code_is_international_prefix() {
        let info = info("44", &["0"], &["00"]);
        assert_eq!(
            info.split_prefix("442079460000"),
            (NumberPrefix::International("44"), "2079460000")
        );
        assert_eq!(info.split_prefix("02079460000"), (NumberPrefix::Trunk("0"), "2079460000"));
        assert_eq!(info.split_prefix("2079460000"), (NumberPrefix::None, "2079460000"));
    }

    #[test]
    fn trunk_wins_when_it_equals_calling_code() {
        let info = info("1", &["1"], &["011"]);
        assert_eq!(info.split_prefix("12025551234"), (NumberPrefix::Trunk("1"), "2025551234"));
    }

    #[test]
    fn access_and_trunk_codes_in_list_order() {
        let info = info("7", &["8"], &["810", "8"]);
        assert_eq!(info.matching_access_code("81044"), Some("810"));
        assert_eq!(info.matching_access_code("844"), Some("8"));
        assert_eq!(info.matching_trunk_code("8495"), Some("8"));
        assert_eq!(info.matching_trunk_code("495"), None);
    }
}
