mod calling_code_cache;
mod interfaces;
mod rule_based_matcher;
pub mod i18n;
pub mod metadata;
pub mod phoneformat;
pub mod ruleset;
pub(crate) mod string_util;

/// Small helpers for places where the same few lines of `Cow` handling
/// would otherwise repeat.
mod macros;

#[cfg(test)]
mod tests;

pub use metadata::{CallingCodeInfo, PhoneRule, RuleSet};
pub use phoneformat::{PhoneFormat, PhoneFormatError, PhoneFormatOptions};
pub use ruleset::{RulesetError, RulesetWriter};
