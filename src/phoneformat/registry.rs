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

use std::collections::HashMap;

use log::{trace, warn};

use super::{normalize_country_code, PLUS_SIGN};
use crate::ruleset::DirectoryEntry;

/// Lookup tables built from the directory of the rule table.
#[derive(Debug, Default, Clone)]
pub struct CallingCodeRegistry {
    /// Calling code to absolute block offset. A later directory entry for
    /// the same calling code replaces the offset of an earlier one.
    block_offsets: HashMap<String, usize>,
    /// Calling code to its countries, in directory order, as spelled in the
    /// data.
    countries: HashMap<String, Vec<String>>,
    /// Lowercased country code to calling code.
    calling_codes: HashMap<String, String>,
}

impl CallingCodeRegistry {
    pub fn from_directory(directory: &[DirectoryEntry]) -> Self {
        let mut registry = Self::default();
        for entry in directory {
            if entry.calling_code.is_empty() || entry.country_code.is_empty() {
                warn!("Skipping incomplete directory entry {:?}", entry);
                continue;
            }
            registry
                .block_offsets
                .insert(entry.calling_code.clone(), entry.block_offset);
            let countries = registry
                .countries
                .entry(entry.calling_code.clone())
                .or_default();
            if !countries.contains(&entry.country_code) {
                countries.push(entry.country_code.clone());
            }
            registry.calling_codes.insert(
                entry.country_code.to_ascii_lowercase(),
                entry.calling_code.clone(),
            );
        }
        trace!(
            "Registry holds {} calling codes for {} countries",
            registry.block_offsets.len(),
            registry.calling_codes.len()
        );
        registry
    }

    pub fn block_offset(&self, calling_code: &str) -> Option<usize> {
        self.block_offsets.get(calling_code).copied()
    }

    /// Countries of `calling_code`; a leading `+` is ignored.
    pub fn countries_for_calling_code(&self, calling_code: &str) -> Option<&[String]> {
        let calling_code = calling_code.strip_prefix(PLUS_SIGN).unwrap_or(calling_code);
        self.countries.get(calling_code).map(Vec::as_slice)
    }

    /// Calling code of a country, compared case-insensitively.
    pub fn calling_code_for_country(&self, country_code: &str) -> Option<&str> {
        let Some(country_code) = normalize_country_code(country_code) else {
            warn!("Invalid country code provided: {:?}", country_code);
            return None;
        };
        self.calling_codes.get(&country_code).map(String::as_str)
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = &str> {
        self.block_offsets.keys().map(String::as_str)
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.countries.values().flatten().map(String::as_str)
    }
}
