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

//! Binary layout of the rule table.
//!
//! ```text
//! u32 N
//! N x { calling_code: [u8; 4], country_code: [u8; 4], relative_offset: u32 }
//! blocks...
//! ```
//!
//! All integers are little-endian. A block starts at
//! `N * DIRECTORY_ENTRY_SIZE + DIRECTORY_HEADER_SIZE + relative_offset`.

use bitflags::bitflags;

/// Size of the entry count that opens the directory.
pub const DIRECTORY_HEADER_SIZE: usize = 4;

/// Size of one directory tuple.
pub const DIRECTORY_ENTRY_SIZE: usize = 12;

/// Width of the NUL-padded ASCII fields in a directory tuple.
pub const DIRECTORY_CODE_WIDTH: usize = 4;

/// Three `(length, extra)` pairs of u16 open every calling-code block.
pub const BLOCK_HEADER_SIZE: usize = 12;

/// `match_len: u16` + `rule_count: u16`.
pub const RULE_SET_HEADER_SIZE: usize = 4;

/// `min: u32, max: u32, 6 x u8, format_offset: u16`.
pub const RULE_RECORD_SIZE: usize = 16;

/// Opening marker of the bracketed runs removed from format templates.
pub const TEMPLATE_MARKER_OPEN: &str = "[[";
/// Closing marker of the bracketed runs removed from format templates.
pub const TEMPLATE_MARKER_CLOSE: &str = "]]";

bitflags! {
    /// Prefix applicability bits of a rule record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrefixFlags: u8 {
        /// The rule describes a number dialed with the trunk prefix.
        const TRUNK = 0b0000_0001;
        /// The rule describes a number dialed with the international prefix.
        const INTL = 0b0000_0010;
    }
}

/// Returns the absolute offset at which per-calling-code blocks start.
pub fn blocks_base(entry_count: usize) -> usize {
    entry_count
        .saturating_mul(DIRECTORY_ENTRY_SIZE)
        .saturating_add(DIRECTORY_HEADER_SIZE)
}

/// Offsets of the fields inside a rule record.
pub(crate) mod rule_record {
    pub const MIN_VAL: usize = 0;
    pub const MAX_VAL: usize = 4;
    pub const RESERVED_0: usize = 8;
    pub const MAX_LEN: usize = 9;
    pub const RESERVED_1: usize = 10;
    pub const RESERVED_2: usize = 11;
    pub const PREFIX_FLAGS: usize = 12;
    pub const RESERVED_3: usize = 13;
    pub const FORMAT_OFFSET: usize = 14;
}
