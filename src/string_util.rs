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

/// Returns the first entry of `prefixes` that `s` starts with. List order
/// decides between overlapping prefixes.
pub fn matching_prefix<'p>(s: &str, prefixes: &'p [String]) -> Option<&'p str> {
    prefixes
        .iter()
        .map(String::as_str)
        .find(|prefix| !prefix.is_empty() && s.starts_with(prefix))
}

/// Integer value of the leading digits among the first `len` characters of
/// `number`, or `None` if `number` is shorter than `len`.
///
/// Parsing stops at the first non-digit (`*`, `#`), and saturates instead of
/// overflowing.
pub fn leading_value(number: &str, len: usize) -> Option<u32> {
    let mut chars = number.chars();
    let mut value = 0u32;
    let mut in_digits = true;
    for _ in 0..len {
        let c = chars.next()?;
        if !in_digits {
            continue;
        }
        match c.to_digit(10) {
            Some(digit) => value = value.saturating_mul(10).saturating_add(digit),
            None => in_digits = false,
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use crate::string_util::{leading_value, matching_prefix};

    #[test]
    fn first_listed_prefix_wins() {
        let prefixes = vec!["00".to_owned(), "0".to_owned(), "".to_owned()];
        assert_eq!(matching_prefix("0044", &prefixes), Some("00"));
        assert_eq!(matching_prefix("044", &prefixes), Some("0"));
        assert_eq!(matching_prefix("44", &prefixes), None);

        let reversed = vec!["0".to_owned(), "00".to_owned()];
        assert_eq!(matching_prefix("0044", &reversed), Some("0"));
    }

    #[test]
    fn value_of_leading_digits() {
        assert_eq!(leading_value("2025551234", 3), Some(202));
        assert_eq!(leading_value("0201", 3), Some(20));
        assert_eq!(leading_value("12", 3), None);
        assert_eq!(leading_value("12", 0), Some(0));
        assert_eq!(leading_value("1*5", 3), Some(1));
        assert_eq!(leading_value("99999999999", 11), Some(u32::MAX));
    }
}
