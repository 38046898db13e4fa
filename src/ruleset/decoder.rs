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

use log::{trace, warn};

use super::{
    errors::RulesetError,
    format::{
        blocks_base, rule_record, PrefixFlags, BLOCK_HEADER_SIZE, DIRECTORY_CODE_WIDTH,
        DIRECTORY_ENTRY_SIZE, DIRECTORY_HEADER_SIZE, RULE_RECORD_SIZE, RULE_SET_HEADER_SIZE,
        TEMPLATE_MARKER_CLOSE, TEMPLATE_MARKER_OPEN,
    },
};
use crate::metadata::{CallingCodeInfo, PhoneRule, RuleSet};

/// Bounds-checked little-endian view over the rule table.
///
/// Every accessor returns a zero/empty value when the requested range is
/// not fully inside the buffer, so a truncated block never traps.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn window<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.data.get(offset..end)?.try_into().ok()
    }

    pub fn u8_at(&self, offset: usize) -> u8 {
        self.data.get(offset).copied().unwrap_or(0)
    }

    pub fn u16_at(&self, offset: usize) -> u16 {
        self.window::<2>(offset).map(u16::from_le_bytes).unwrap_or(0)
    }

    pub fn u32_at(&self, offset: usize) -> u32 {
        self.window::<4>(offset).map(u32::from_le_bytes).unwrap_or(0)
    }

    /// Raw bytes of the NUL-terminated string at `offset`, terminator
    /// excluded. Reading stops at the end of the buffer if no terminator is
    /// found.
    pub fn c_bytes_at(&self, offset: usize) -> &'a [u8] {
        let Some(tail) = self.data.get(offset..) else {
            return &[];
        };
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        &tail[..end]
    }

    pub fn c_str_at(&self, offset: usize) -> Cow<'a, str> {
        String::from_utf8_lossy(self.c_bytes_at(offset))
    }

    /// Reads a fixed-width NUL-padded ASCII field.
    pub fn padded_str_at(&self, offset: usize, width: usize) -> Cow<'a, str> {
        let Some(field) = offset
            .checked_add(width)
            .and_then(|end| self.data.get(offset..end))
        else {
            return Cow::Borrowed("");
        };
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        String::from_utf8_lossy(&field[..end])
    }
}

/// One tuple of the directory that opens the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub calling_code: String,
    pub country_code: String,
    /// Absolute offset of the calling code block.
    pub block_offset: usize,
}

/// Decodes the directory. This is the only place where malformed input is
/// reported as an error: without a directory there is nothing to format with.
pub fn decode_directory(data: &[u8]) -> Result<Vec<DirectoryEntry>, RulesetError> {
    if data.len() < DIRECTORY_HEADER_SIZE {
        return Err(RulesetError::TooShort {
            expected: DIRECTORY_HEADER_SIZE,
            actual: data.len(),
        });
    }
    let reader = ByteReader::new(data);
    let entries = reader.u32_at(0) as usize;
    let base = blocks_base(entries);
    if base > data.len() {
        return Err(RulesetError::TruncatedDirectory {
            entries,
            required: base,
            actual: data.len(),
        });
    }

    let mut directory = Vec::with_capacity(entries);
    let mut spot = DIRECTORY_HEADER_SIZE;
    for _ in 0..entries {
        let calling_code = reader.padded_str_at(spot, DIRECTORY_CODE_WIDTH);
        let country_code = reader.padded_str_at(spot + DIRECTORY_CODE_WIDTH, DIRECTORY_CODE_WIDTH);
        let relative = reader.u32_at(spot + 2 * DIRECTORY_CODE_WIDTH) as usize;
        directory.push(DirectoryEntry {
            calling_code: calling_code.into_owned(),
            country_code: country_code.into_owned(),
            block_offset: base.saturating_add(relative),
        });
        spot += DIRECTORY_ENTRY_SIZE;
    }
    trace!("Decoded directory with {} entries", directory.len());
    Ok(directory)
}

/// Reads a list of NUL-terminated strings ending with an empty one. Returns
/// the list and the offset of the terminating NUL.
fn read_string_list(reader: &ByteReader<'_>, mut offset: usize) -> (Vec<String>, usize) {
    let mut list = Vec::new();
    loop {
        let raw = reader.c_bytes_at(offset);
        if raw.is_empty() {
            return (list, offset);
        }
        offset = offset.saturating_add(raw.len() + 1);
        list.push(String::from_utf8_lossy(raw).into_owned());
    }
}

/// Removes every complete `[[...]]` run from a template.
pub(crate) fn strip_template_markers(template: &str) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(template);
    while let Some(open) = result.find(TEMPLATE_MARKER_OPEN) {
        let Some(close) = result[open..].find(TEMPLATE_MARKER_CLOSE) else {
            warn!("Unterminated {} in format template {:?}", TEMPLATE_MARKER_OPEN, template);
            break;
        };
        let close = open + close + TEMPLATE_MARKER_CLOSE.len();
        result = Cow::Owned(fast_cat::concat_str!(&result[..open], &result[close..]));
    }
    result
}

/// Decodes the block of one calling code. `countries` is copied into the
/// result as is; it comes from the directory, not from the block.
pub fn decode_calling_code_info(
    data: &[u8],
    calling_code: &str,
    countries: Vec<String>,
    block_start: usize,
) -> CallingCodeInfo {
    let reader = ByteReader::new(data);
    let block1_len = reader.u16_at(block_start) as usize;
    let block2_len = reader.u16_at(block_start.saturating_add(4)) as usize;
    let rule_set_count = reader.u16_at(block_start.saturating_add(8)) as usize;

    let (trunk_prefixes, offset) =
        read_string_list(&reader, block_start.saturating_add(BLOCK_HEADER_SIZE));
    // Skip the terminator of the trunk list.
    let (intl_prefixes, _) = read_string_list(&reader, offset.saturating_add(1));

    let rule_sets_start = block_start.saturating_add(block1_len);
    let templates_start = rule_sets_start.saturating_add(block2_len);
    let mut rule_sets = Vec::with_capacity(rule_set_count.min(64));
    let mut offset = rule_sets_start;
    for _ in 0..rule_set_count {
        if offset.saturating_add(RULE_SET_HEADER_SIZE) > reader.len() {
            warn!(
                "Rule sets of calling code {} run past the end of the data ({} of {} decoded)",
                calling_code,
                rule_sets.len(),
                rule_set_count
            );
            break;
        }
        let match_len = reader.u16_at(offset) as usize;
        let rule_count = reader.u16_at(offset + 2) as usize;
        offset += RULE_SET_HEADER_SIZE;

        let mut rules = Vec::with_capacity(rule_count.min(64));
        for _ in 0..rule_count {
            if offset.saturating_add(RULE_RECORD_SIZE) > reader.len() {
                warn!("Rule records of calling code {} are truncated", calling_code);
                break;
            }
            rules.push(decode_rule(&reader, offset, templates_start));
            offset += RULE_RECORD_SIZE;
        }
        rule_sets.push(RuleSet::new(match_len, rules));
    }

    CallingCodeInfo::new(
        calling_code.to_owned(),
        countries,
        trunk_prefixes,
        intl_prefixes,
        rule_sets,
    )
}

fn decode_rule(reader: &ByteReader<'_>, record: usize, templates_start: usize) -> PhoneRule {
    let format_offset = reader.u16_at(record + rule_record::FORMAT_OFFSET) as usize;
    let template = reader.c_str_at(templates_start.saturating_add(format_offset));
    let template = strip_template_markers(&template).into_owned();
    PhoneRule::new(
        reader.u32_at(record + rule_record::MIN_VAL),
        reader.u32_at(record + rule_record::MAX_VAL),
        reader.u8_at(record + rule_record::MAX_LEN),
        PrefixFlags::from_bits_truncate(reader.u8_at(record + rule_record::PREFIX_FLAGS)),
        template,
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use std::borrow::Cow;

    use super::{decode_calling_code_info, decode_directory, strip_template_markers, ByteReader};
    use crate::ruleset::{
        errors::RulesetError,
        format::{PrefixFlags, RULE_RECORD_SIZE, RULE_SET_HEADER_SIZE},
        writer::{CallingCodeBlock, RuleEntry, RuleSetEntry, RulesetWriter},
    };

    /// A one-block table and the absolute offsets of its block and of its
    /// first rule set.
    pub(crate) fn two_rule_table() -> (Vec<u8>, usize, usize) {
        let block = CallingCodeBlock::new(["0"], ["00"]).with_rule_set(RuleSetEntry::new(
            2,
            vec![
                RuleEntry::new(20, 29, 10, "n## #### ####").with_prefix_flags(PrefixFlags::TRUNK),
                RuleEntry::new(70, 79, 10, "#### ######"),
            ],
        ));
        let data = RulesetWriter::new()
            .add_calling_code("44", &["gb"], block)
            .write()
            .unwrap();
        let block_start = decode_directory(&data).unwrap()[0].block_offset;
        let rule_sets_start = block_start + ByteReader::new(&data).u16_at(block_start) as usize;
        (data, block_start, rule_sets_start)
    }

    #[test]
    fn out_of_bounds_reads_are_zero() {
        let reader = ByteReader::new(&[1, 2, 3]);
        assert_eq!(reader.u8_at(2), 3);
        assert_eq!(reader.u8_at(3), 0);
        assert_eq!(reader.u16_at(0), 0x0201);
        assert_eq!(reader.u16_at(2), 0);
        assert_eq!(reader.u32_at(0), 0);
        assert_eq!(reader.u32_at(usize::MAX - 1), 0);
        assert_eq!(reader.c_str_at(10), "");
        assert_eq!(reader.padded_str_at(2, 4), "");
    }

    #[test]
    fn strings_stop_at_nul_or_end() {
        let reader = ByteReader::new(b"44\0\0us\0\0abc");
        assert_eq!(reader.padded_str_at(0, 4), "44");
        assert_eq!(reader.padded_str_at(4, 4), "us");
        assert_eq!(reader.c_str_at(0), "44");
        assert_eq!(reader.c_str_at(8), "abc");
    }

    #[test]
    fn directory_needs_a_header() {
        assert_eq!(
            decode_directory(&[1, 0]),
            Err(RulesetError::TooShort { expected: 4, actual: 2 })
        );
        assert_eq!(
            decode_directory(&[2, 0, 0, 0, 0]),
            Err(RulesetError::TruncatedDirectory { entries: 2, required: 28, actual: 5 })
        );
        assert_eq!(decode_directory(&[0, 0, 0, 0]), Ok(vec![]));
    }

    #[test]
    fn template_markers_are_removed() {
        assert!(matches!(strip_template_markers("###-####"), Cow::Borrowed(_)));
        assert_eq!(strip_template_markers("[[9]]### ####"), "### ####");
        assert_eq!(strip_template_markers("n[[8]] ## [[9]]###"), "n ## ###");
        assert_eq!(strip_template_markers("## [[9"), "## [[9");
    }

    #[test]
    fn cut_inside_second_rule_keeps_first_rule() {
        let (data, block_start, rule_sets_start) = two_rule_table();
        let cut = rule_sets_start + RULE_SET_HEADER_SIZE + RULE_RECORD_SIZE + RULE_RECORD_SIZE / 2;

        let info = decode_calling_code_info(&data[..cut], "44", vec![], block_start);
        assert_eq!(info.trunk_prefixes(), ["0"]);
        assert_eq!(info.intl_prefixes(), ["00"]);
        assert_eq!(info.rule_sets().len(), 1);
        let rules = info.rule_sets()[0].rules();
        assert_eq!(rules.len(), 1);
        assert_eq!((rules[0].min_val(), rules[0].max_val()), (20, 29));
        assert!(rules[0].uses_trunk_prefix());
        // The template area was cut off too.
        assert_eq!(rules[0].format(), "");
    }

    #[test]
    fn cut_inside_rule_set_header_gives_no_rule_sets() {
        let (data, block_start, rule_sets_start) = two_rule_table();
        let cut = rule_sets_start + RULE_SET_HEADER_SIZE / 2;

        let countries = vec!["gb".to_owned()];
        let info = decode_calling_code_info(&data[..cut], "44", countries, block_start);
        assert_eq!(info.trunk_prefixes(), ["0"]);
        assert_eq!(info.intl_prefixes(), ["00"]);
        assert!(info.rule_sets().is_empty());
        assert_eq!(info.countries(), ["gb"]);
    }

    #[test]
    fn block_offset_at_end_of_address_space() {
        let (data, _, _) = two_rule_table();
        let info = decode_calling_code_info(&data, "44", vec![], usize::MAX);
        assert!(info.trunk_prefixes().is_empty());
        assert!(info.intl_prefixes().is_empty());
        assert!(info.rule_sets().is_empty());
    }
}
