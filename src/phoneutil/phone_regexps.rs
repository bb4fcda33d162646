use regex::Regex;

/// Compiled shape patterns, built once per [`PhoneUtil`].
///
/// Both patterns accept an optional `+98`/`98`/`0098` country prefix and an
/// optional national leading zero; group 2 captures the trimmed ten-digit
/// national number.
///
/// [`PhoneUtil`]: super::phoneutil::PhoneUtil
pub(super) struct PhoneRegExps {
    /// Ten digits starting with `9`.
    pub mobile_pattern: Regex,
    /// Any ten digits. Every mobile number satisfies this too, so the mobile
    /// pattern must always be consulted first.
    pub landline_pattern: Regex,
}

impl PhoneRegExps {
    pub fn new() -> Self {
        Self {
            mobile_pattern: Regex::new(r"^(\+98|98|0098)?0?(9\d{9})$").unwrap(),
            landline_pattern: Regex::new(r"^(\+98|98|0098)?0?(\d{10})$").unwrap(),
        }
    }
}
