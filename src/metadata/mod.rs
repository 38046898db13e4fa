//! In-memory form of one calling code of the rule table.

mod calling_code_info;
mod phone_rule;
mod rule_set;

pub use calling_code_info::CallingCodeInfo;
pub use phone_rule::PhoneRule;
pub use rule_set::RuleSet;
