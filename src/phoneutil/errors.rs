use thiserror::Error;

/// Failures of the general entry point [`parse`](crate::PhoneUtil::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PhoneParseError {
    /// The input matches neither the mobile nor the landline shape.
    #[error("phone number not valid")]
    NotValid,
    /// A shape pattern matched but did not capture the national number.
    /// Unreachable with the compiled patterns; kept as a defensive contract.
    #[error("malformed phone number")]
    Malformed,
    /// A well-formed ten-digit landline number whose three-digit area code is
    /// not a known Iranian area code. Area codes are an exhaustive set, so
    /// this rejects the number outright.
    #[error("invalid city code")]
    InvalidCityCode,
}

/// Failures of the mobile-only entry point
/// [`parse_mobile`](crate::PhoneUtil::parse_mobile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MobileParseError {
    /// The input does not match the mobile shape. Landline-shaped input
    /// lands here too; the mobile entry point does not fall back.
    #[error("mobile number not valid")]
    NotValid,
    /// See [`PhoneParseError::Malformed`].
    #[error("malformed mobile number")]
    Malformed,
}

impl From<MobileParseError> for PhoneParseError {
    fn from(value: MobileParseError) -> Self {
        match value {
            MobileParseError::NotValid => PhoneParseError::NotValid,
            MobileParseError::Malformed => PhoneParseError::Malformed,
        }
    }
}
