use std::borrow::Cow;

use crate::metadata::CallingCodeInfo;

/// Internal rule matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Formats a string of phone characters with the rules of `info`. When
    /// no rule fits and there is nothing else to add, `number` is returned
    /// borrowed.
    fn format_number<'a>(&self, info: &CallingCodeInfo, number: &'a str) -> Cow<'a, str>;

    /// Returns whether `number` is a complete number under the rules of
    /// `info`.
    fn is_valid_number(&self, info: &CallingCodeInfo, number: &str) -> bool;
}
