/// Takes the `String` out of a `Cow::Owned`, or evaluates `$default` when
/// the cow is borrowed.
///
/// Matchers return `Cow::Borrowed` for "nothing changed"; callers that need
/// an owned string anyway use this to avoid a second copy of owned results.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
