use std::{env, sync::LazyLock};

use log::trace;
use regex::Regex;

/// POSIX locale names: `language[_territory][.codeset][@modifier]`. A `-`
/// separator is accepted as well.
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[_-]([A-Za-z]{2}))?(?:[.@].*)?$")
        .expect("Invalid constant pattern!")
});

/// Environment variables consulted for the host locale, most specific first.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region of the host, taken from the locale environment. `None` when
    /// no locale is set or it names no territory.
    pub fn current() -> Option<String> {
        let locale = LOCALE_VARIABLES
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty())?;
        let region = Self::from_locale(&locale);
        trace!("Host locale {:?} gives region {:?}", locale, region);
        region
    }

    /// Territory part of a locale name, uppercased. "C", "POSIX" and
    /// language-only locales have none.
    pub fn from_locale(locale: &str) -> Option<String> {
        let territory = LOCALE_PATTERN.captures(locale)?.get(1)?;
        let territory = territory.as_str().to_ascii_uppercase();
        (territory != Self::get_unknown()).then_some(territory)
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn territory_from_locale() {
        assert_eq!(RegionCode::from_locale("en_US.UTF-8"), Some("US".to_owned()));
        assert_eq!(RegionCode::from_locale("de_at"), Some("AT".to_owned()));
        assert_eq!(RegionCode::from_locale("pt-BR"), Some("BR".to_owned()));
        assert_eq!(RegionCode::from_locale("sr_RS@latin"), Some("RS".to_owned()));
        assert_eq!(RegionCode::from_locale("fr"), None);
        assert_eq!(RegionCode::from_locale("C"), None);
        assert_eq!(RegionCode::from_locale("POSIX"), None);
        assert_eq!(RegionCode::from_locale("en_ZZ"), None);
    }
}
