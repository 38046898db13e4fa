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

//! Fields of the rule table that have no effect on matching. They are only
//! decoded here, for dumps.

use std::fmt;

use super::{
    decoder::ByteReader,
    format::{rule_record, RULE_RECORD_SIZE, RULE_SET_HEADER_SIZE},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDiagnostics {
    pub block1_len: u16,
    pub block2_len: u16,
    pub rule_set_count: u16,
    pub extras: [u16; 3],
    /// Reserved bytes of each rule, grouped by rule set.
    pub reserved: Vec<Vec<[u8; 4]>>,
}

pub fn decode_block_diagnostics(data: &[u8], block_start: usize) -> BlockDiagnostics {
    let reader = ByteReader::new(data);
    let block1_len = reader.u16_at(block_start);
    let block2_len = reader.u16_at(block_start.saturating_add(4));
    let rule_set_count = reader.u16_at(block_start.saturating_add(8));
    let extras = [
        reader.u16_at(block_start.saturating_add(2)),
        reader.u16_at(block_start.saturating_add(6)),
        reader.u16_at(block_start.saturating_add(10)),
    ];

    let mut reserved = Vec::new();
    let mut offset = block_start.saturating_add(block1_len as usize);
    for _ in 0..rule_set_count {
        if offset.saturating_add(RULE_SET_HEADER_SIZE) > reader.len() {
            break;
        }
        let rule_count = reader.u16_at(offset + 2) as usize;
        offset += RULE_SET_HEADER_SIZE;
        let mut rules = Vec::new();
        for _ in 0..rule_count {
            if offset.saturating_add(RULE_RECORD_SIZE) > reader.len() {
                break;
            }
            rules.push([
                reader.u8_at(offset + rule_record::RESERVED_0),
                reader.u8_at(offset + rule_record::RESERVED_1),
                reader.u8_at(offset + rule_record::RESERVED_2),
                reader.u8_at(offset + rule_record::RESERVED_3),
            ]);
            offset += RULE_RECORD_SIZE;
        }
        reserved.push(rules);
    }

    BlockDiagnostics {
        block1_len,
        block2_len,
        rule_set_count,
        extras,
        reserved,
    }
}

impl fmt::Display for BlockDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "block1={} ({}), block2={} ({}), sets={} ({})",
            self.block1_len,
            self.extras[0],
            self.block2_len,
            self.extras[1],
            self.rule_set_count,
            self.extras[2]
        )?;
        for (index, rules) in self.reserved.iter().enumerate() {
            write!(f, "  set {}:", index)?;
            for bytes in rules {
                write!(f, " {:02x}{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2], bytes[3])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
