mod helper_constants;
mod helper_functions;
pub mod enums;
pub mod errors;
pub mod options;
pub mod phoneformat;
pub mod registry;

pub use enums::{LengthCheck, MatchPass, NumberPrefix};
pub use errors::PhoneFormatError;
pub use options::PhoneFormatOptions;
pub use phoneformat::{PhoneFormat, Result};
pub use registry::CallingCodeRegistry;

pub(crate) use helper_constants::{
    MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN, TEMPLATE_DIGIT, TEMPLATE_GROUP_CLOSE, TEMPLATE_GROUP_OPEN,
    TEMPLATE_INTL_PREFIX, TEMPLATE_TRUNK_PREFIX,
};
pub(crate) use helper_functions::{normalize_country_code, strip_non_phone_chars};
