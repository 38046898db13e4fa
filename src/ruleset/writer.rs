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

//! Encoder for the rule table layout read by [`super::decoder`].

use std::collections::HashMap;

use log::debug;

use super::{
    errors::RulesetWriteError,
    format::{blocks_base, PrefixFlags, BLOCK_HEADER_SIZE, DIRECTORY_CODE_WIDTH},
};

/// One rule record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub min_val: u32,
    pub max_val: u32,
    pub max_len: u8,
    pub prefix_flags: PrefixFlags,
    pub format: String,
    /// The four bytes of the record that the engine never looks at.
    pub reserved: [u8; 4],
}

impl RuleEntry {
    pub fn new(min_val: u32, max_val: u32, max_len: u8, format: impl Into<String>) -> Self {
        Self {
            min_val,
            max_val,
            max_len,
            prefix_flags: PrefixFlags::empty(),
            format: format.into(),
            reserved: [0; 4],
        }
    }

    pub fn with_prefix_flags(mut self, prefix_flags: PrefixFlags) -> Self {
        self.prefix_flags = prefix_flags;
        self
    }

    pub fn with_reserved(mut self, reserved: [u8; 4]) -> Self {
        self.reserved = reserved;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetEntry {
    pub match_len: u16,
    pub rules: Vec<RuleEntry>,
}

impl RuleSetEntry {
    pub fn new(match_len: u16, rules: Vec<RuleEntry>) -> Self {
        Self { match_len, rules }
    }
}

/// Contents of the block shared by all countries of a calling code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCodeBlock {
    pub trunk_prefixes: Vec<String>,
    pub intl_prefixes: Vec<String>,
    pub rule_sets: Vec<RuleSetEntry>,
    /// Values written next to the three block lengths.
    pub extras: [u16; 3],
}

impl CallingCodeBlock {
    pub fn new<S: Into<String>>(
        trunk_prefixes: impl IntoIterator<Item = S>,
        intl_prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            trunk_prefixes: trunk_prefixes.into_iter().map(Into::into).collect(),
            intl_prefixes: intl_prefixes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_rule_set(mut self, rule_set: RuleSetEntry) -> Self {
        self.rule_sets.push(rule_set);
        self
    }

    pub fn with_extras(mut self, extras: [u16; 3]) -> Self {
        self.extras = extras;
        self
    }
}

struct PendingCallingCode {
    calling_code: String,
    countries: Vec<String>,
    block: CallingCodeBlock,
}

/// Builds a rule table.
///
/// Every country listed for a calling code gets its own directory tuple; all
/// of them point at the single block of that calling code.
#[derive(Default)]
pub struct RulesetWriter {
    calling_codes: Vec<PendingCallingCode>,
}

impl RulesetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_calling_code(
        &mut self,
        calling_code: &str,
        countries: &[&str],
        block: CallingCodeBlock,
    ) -> &mut Self {
        self.calling_codes.push(PendingCallingCode {
            calling_code: calling_code.to_owned(),
            countries: countries.iter().map(|c| c.to_string()).collect(),
            block,
        });
        self
    }

    pub fn write(&self) -> Result<Vec<u8>, RulesetWriteError> {
        let entries = self
            .calling_codes
            .iter()
            .map(|pending| pending.countries.len())
            .sum::<usize>();

        let mut blocks = Vec::new();
        let mut directory = Vec::with_capacity(blocks_base(entries));
        directory.extend_from_slice(&(entries as u32).to_le_bytes());

        for pending in &self.calling_codes {
            let relative = blocks.len() as u32;
            encode_block(&pending.calling_code, &pending.block, &mut blocks)?;
            for country in &pending.countries {
                push_code(&mut directory, &pending.calling_code)?;
                push_code(&mut directory, country)?;
                directory.extend_from_slice(&relative.to_le_bytes());
            }
        }
        directory.extend_from_slice(&blocks);
        debug!(
            "Encoded ruleset with {} calling codes, {} directory entries, {} bytes",
            self.calling_codes.len(),
            entries,
            directory.len()
        );
        Ok(directory)
    }
}

fn push_code(buffer: &mut Vec<u8>, code: &str) -> Result<(), RulesetWriteError> {
    if code.len() > DIRECTORY_CODE_WIDTH {
        return Err(RulesetWriteError::CodeTooLong(code.to_owned()));
    }
    let mut field = [0u8; DIRECTORY_CODE_WIDTH];
    field[..code.len()].copy_from_slice(code.as_bytes());
    buffer.extend_from_slice(&field);
    Ok(())
}

fn push_c_str(buffer: &mut Vec<u8>, s: &str) {
    buffer.extend_from_slice(s.as_bytes());
    buffer.push(0);
}

fn to_u16(
    value: usize,
    calling_code: &str,
    what: &'static str,
) -> Result<u16, RulesetWriteError> {
    u16::try_from(value).map_err(|_| RulesetWriteError::BlockTooLarge {
        calling_code: calling_code.to_owned(),
        what,
        limit: u16::MAX as usize,
    })
}

fn encode_block(
    calling_code: &str,
    block: &CallingCodeBlock,
    out: &mut Vec<u8>,
) -> Result<(), RulesetWriteError> {
    let mut prefixes = Vec::new();
    for trunk in &block.trunk_prefixes {
        push_c_str(&mut prefixes, trunk);
    }
    prefixes.push(0);
    for intl in &block.intl_prefixes {
        push_c_str(&mut prefixes, intl);
    }
    prefixes.push(0);

    let mut templates = Vec::new();
    let mut template_offsets = HashMap::<&str, u16>::new();
    let mut rule_sets = Vec::new();
    for rule_set in &block.rule_sets {
        rule_sets.extend_from_slice(&rule_set.match_len.to_le_bytes());
        let rule_count = to_u16(rule_set.rules.len(), calling_code, "Rule count")?;
        rule_sets.extend_from_slice(&rule_count.to_le_bytes());
        for rule in &rule_set.rules {
            let format_offset = match template_offsets.get(rule.format.as_str()) {
                Some(offset) => *offset,
                None => {
                    let offset = to_u16(templates.len(), calling_code, "Template area")?;
                    push_c_str(&mut templates, &rule.format);
                    template_offsets.insert(&rule.format, offset);
                    offset
                }
            };
            rule_sets.extend_from_slice(&rule.min_val.to_le_bytes());
            rule_sets.extend_from_slice(&rule.max_val.to_le_bytes());
            rule_sets.push(rule.reserved[0]);
            rule_sets.push(rule.max_len);
            rule_sets.push(rule.reserved[1]);
            rule_sets.push(rule.reserved[2]);
            rule_sets.push(rule.prefix_flags.bits());
            rule_sets.push(rule.reserved[3]);
            rule_sets.extend_from_slice(&format_offset.to_le_bytes());
        }
    }

    let block1_len = to_u16(BLOCK_HEADER_SIZE + prefixes.len(), calling_code, "Prefix area")?;
    let block2_len = to_u16(rule_sets.len(), calling_code, "Rule set area")?;
    let rule_set_count = to_u16(block.rule_sets.len(), calling_code, "Rule set count")?;
    for (len, extra) in [block1_len, block2_len, rule_set_count]
        .into_iter()
        .zip(block.extras)
    {
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&extra.to_le_bytes());
    }
    out.extend_from_slice(&prefixes);
    out.extend_from_slice(&rule_sets);
    out.extend_from_slice(&templates);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CallingCodeBlock, RuleEntry, RuleSetEntry, RulesetWriter};
    use crate::ruleset::{
        decoder::{decode_calling_code_info, decode_directory},
        errors::RulesetWriteError,
        format::PrefixFlags,
    };

    #[test]
    fn written_block_decodes_back() {
        let block = CallingCodeBlock::new(["0"], ["00", "000"]).with_rule_set(RuleSetEntry::new(
            2,
            vec![
                RuleEntry::new(20, 29, 10, "c ## #### ####").with_prefix_flags(PrefixFlags::INTL),
                RuleEntry::new(20, 29, 11, "n## #### ####").with_prefix_flags(PrefixFlags::TRUNK),
                RuleEntry::new(70, 79, 10, "[[7]]#### ######"),
            ],
        ));
        let data = RulesetWriter::new()
            .add_calling_code("44", &["gb", "gg"], block)
            .write()
            .unwrap();

        let directory = decode_directory(&data).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory[0].calling_code, "44");
        assert_eq!(directory[1].country_code, "gg");
        assert_eq!(directory[0].block_offset, directory[1].block_offset);

        let info = decode_calling_code_info(
            &data,
            "44",
            vec!["gb".to_owned(), "gg".to_owned()],
            directory[0].block_offset,
        );
        assert_eq!(info.trunk_prefixes(), ["0"]);
        assert_eq!(info.intl_prefixes(), ["00", "000"]);
        let rule_set = &info.rule_sets()[0];
        assert_eq!(rule_set.match_len(), 2);
        assert!(rule_set.has_rule_with_intl_prefix());
        assert!(rule_set.has_rule_with_trunk_prefix());
        let templates: Vec<_> = rule_set.rules().iter().map(|r| r.format()).collect();
        assert_eq!(templates, ["c ## #### ####", "n## #### ####", "#### ######"]);
        assert_eq!(rule_set.rules()[2].max_len(), 10);
    }

    #[test]
    fn long_codes_are_rejected() {
        let result = RulesetWriter::new()
            .add_calling_code("12345", &["us"], CallingCodeBlock::default())
            .write();
        assert_eq!(result, Err(RulesetWriteError::CodeTooLong("12345".to_owned())));
    }
}
