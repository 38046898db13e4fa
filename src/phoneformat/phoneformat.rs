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

use std::{borrow::Cow, collections::HashSet, fmt::Write, sync::Arc};

use log::{debug, trace, warn};

use super::{
    errors::PhoneFormatError, normalize_country_code, options::PhoneFormatOptions,
    registry::CallingCodeRegistry, strip_non_phone_chars, MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN,
};
use crate::{
    calling_code_cache::CallingCodeCache,
    i18n,
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::CallingCodeInfo,
    rule_based_matcher::RuleBasedMatcher,
    ruleset::{
        decoder::{decode_calling_code_info, decode_directory},
        diagnostics::decode_block_diagnostics,
    },
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneFormatError>;

/// Formats and validates phone numbers with the rules of a binary rule
/// table.
///
/// Numbers starting with `+` are formatted with the rules of the calling
/// code they start with; all other numbers with the rules of the default
/// country, which also recognises its international access codes.
pub struct PhoneFormat {
    /// An API for rule matching.
    matcher_api: Box<dyn MatcherApi>,

    /// The rule table. Read only.
    data: Box<[u8]>,

    /// Offsets and countries of every calling code in `data`.
    registry: CallingCodeRegistry,

    /// Calling codes decoded so far.
    cache: CallingCodeCache,

    /// Calling code of the default country, if it is in the table.
    default_calling_code: Option<String>,
}

impl PhoneFormat {
    /// Builds a formatter for the host region.
    pub fn new(data: impl Into<Box<[u8]>>) -> Result<Self> {
        Self::with_options(data, PhoneFormatOptions::default())
    }

    pub fn with_options(data: impl Into<Box<[u8]>>, options: PhoneFormatOptions) -> Result<Self> {
        let data = data.into();
        let directory = decode_directory(&data)?;
        let registry = CallingCodeRegistry::from_directory(&directory);

        let default_country = match options.default_country {
            Some(country_code) => Some(
                normalize_country_code(&country_code)
                    .ok_or(PhoneFormatError::InvalidDefaultCountry(country_code))?,
            ),
            None => i18n::RegionCode::current(),
        };
        let default_calling_code = default_country.as_deref().and_then(|country_code| {
            registry
                .calling_code_for_country(country_code)
                .map(str::to_owned)
        });
        if default_calling_code.is_none() {
            warn!("No calling code for default country {:?}", default_country);
        }
        debug!(
            "Loaded ruleset of {} bytes, {} directory entries, default calling code {:?}",
            data.len(),
            directory.len(),
            default_calling_code
        );

        Ok(Self {
            matcher_api: Box::new(RuleBasedMatcher::new(options.allow_optional_prefix_matching)),
            cache: CallingCodeCache::with_capacity(directory.len()),
            data,
            registry,
            default_calling_code,
        })
    }

    /// Removes everything but digits, `+`, `*` and `#`.
    pub fn unformat<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        strip_non_phone_chars(phone_number)
    }

    /// Formats `phone_number` for display. Input that can not be formatted
    /// is returned as is.
    pub fn format<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        let stripped = strip_non_phone_chars(phone_number);

        if let Some(rest) = stripped.strip_prefix(PLUS_SIGN) {
            let Some(info) = self.find_calling_code_info(rest) else {
                trace!("No calling code found for {:?}", phone_number);
                return Cow::Borrowed(phone_number);
            };
            let formatted = self.matcher_api.format_number(&info, rest);
            return Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &formatted));
        }

        let Some(info) = self.default_calling_code_info() else {
            trace!("No default calling code to format {:?} with", phone_number);
            return Cow::Borrowed(phone_number);
        };

        if let Some(access_code) = info.matching_access_code(&stripped) {
            let rest = &stripped[access_code.len()..];
            if rest.is_empty() {
                return Cow::Owned(access_code.to_owned());
            }
            let formatted = match self.find_calling_code_info(rest) {
                Some(other) => owned_from_cow_or!(
                    self.matcher_api.format_number(&other, rest),
                    rest.to_owned()
                ),
                None => rest.to_owned(),
            };
            trace!("Access code {} dialed before {:?}", access_code, rest);
            return Cow::Owned(fast_cat::concat_str!(access_code, " ", &formatted));
        }

        let formatted = match self.matcher_api.format_number(&info, &stripped) {
            Cow::Owned(formatted) => Some(formatted),
            Cow::Borrowed(_) => None,
        };
        formatted.map(Cow::Owned).unwrap_or(stripped)
    }

    /// Returns whether `phone_number` is a complete number under the rules
    /// of the calling code it is dialed with.
    pub fn is_phone_number_valid(&self, phone_number: &str) -> bool {
        let stripped = strip_non_phone_chars(phone_number);

        if let Some(rest) = stripped.strip_prefix(PLUS_SIGN) {
            return self
                .find_calling_code_info(rest)
                .is_some_and(|info| self.matcher_api.is_valid_number(&info, rest));
        }

        let Some(info) = self.default_calling_code_info() else {
            return false;
        };

        if let Some(access_code) = info.matching_access_code(&stripped) {
            let rest = &stripped[access_code.len()..];
            return !rest.is_empty()
                && self
                    .find_calling_code_info(rest)
                    .is_some_and(|other| self.matcher_api.is_valid_number(&other, rest));
        }

        self.matcher_api.is_valid_number(&info, &stripped)
    }

    pub fn default_calling_code(&self) -> Option<&str> {
        self.default_calling_code.as_deref()
    }

    /// Calling code of a two letter country code, in any case.
    pub fn calling_code_for_country_code(&self, country_code: &str) -> Option<&str> {
        self.registry.calling_code_for_country(country_code)
    }

    /// Country codes sharing `calling_code`, which may start with `+`.
    pub fn country_codes_for_calling_code(&self, calling_code: &str) -> HashSet<&str> {
        self.registry
            .countries_for_calling_code(calling_code)
            .map(|countries| countries.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn country_codes_for_calling_code_value(&self, calling_code: u32) -> HashSet<&str> {
        let mut buf = itoa::Buffer::new();
        self.country_codes_for_calling_code(buf.format(calling_code))
    }

    pub fn supported_calling_codes(&self) -> HashSet<&str> {
        self.registry.calling_codes().collect()
    }

    pub fn supported_country_codes(&self) -> HashSet<&str> {
        self.registry.country_codes().collect()
    }

    /// Decoded rules of `calling_code`, `None` if the table has none.
    pub fn calling_code_info(&self, calling_code: &str) -> Option<Arc<CallingCodeInfo>> {
        self.cache.get_or_decode(calling_code, || {
            let block_offset = self.registry.block_offset(calling_code)?;
            let countries = self
                .registry
                .countries_for_calling_code(calling_code)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            Some(decode_calling_code_info(
                &self.data,
                calling_code,
                countries,
                block_offset,
            ))
        })
    }

    /// Finds the calling code `digits` start with. Shorter calling codes
    /// are tried first.
    pub fn find_calling_code_info(&self, digits: &str) -> Option<Arc<CallingCodeInfo>> {
        (1..=MAX_LENGTH_COUNTRY_CODE)
            .map_while(|len| digits.get(..len))
            .find_map(|candidate| self.calling_code_info(candidate))
    }

    fn default_calling_code_info(&self) -> Option<Arc<CallingCodeInfo>> {
        self.calling_code_info(self.default_calling_code.as_deref()?)
    }

    /// Human readable listing of the whole table, diagnostics-only fields
    /// included.
    pub fn dump(&self) -> String {
        let mut calling_codes: Vec<_> = self.registry.calling_codes().collect();
        calling_codes.sort_by_key(|calling_code| (calling_code.len(), *calling_code));

        let mut out = String::new();
        for calling_code in calling_codes {
            let (Some(info), Some(offset)) = (
                self.calling_code_info(calling_code),
                self.registry.block_offset(calling_code),
            ) else {
                continue;
            };
            let diagnostics = decode_block_diagnostics(&self.data, offset);
            // Writing into a String can not fail.
            let _ = write!(out, "{}{}", info, diagnostics);
        }
        out
    }
}
