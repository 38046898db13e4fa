pub struct CountryCode {}

#[allow(unused)]
impl CountryCode {
    pub fn ca() -> &'static str {
        "ca"
    }

    pub fn gb() -> &'static str {
        "gb"
    }

    pub fn gg() -> &'static str {
        "gg"
    }

    pub fn kz() -> &'static str {
        "kz"
    }

    pub fn ru() -> &'static str {
        "ru"
    }

    pub fn us() -> &'static str {
        "us"
    }

    /// Listed nowhere in the fixtures.
    pub fn fr() -> &'static str {
        "fr"
    }
}
