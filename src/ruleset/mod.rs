//! Reading and writing of the binary rule table.

pub mod decoder;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub mod writer;

pub use decoder::{ByteReader, DirectoryEntry};
pub use errors::{RulesetError, RulesetWriteError};
pub use format::PrefixFlags;
pub use writer::{CallingCodeBlock, RuleEntry, RuleSetEntry, RulesetWriter};
