//! Classification of Iranian telephone numbers.
//!
//! Given a raw number string, the crate normalizes it, decides whether it is
//! a mobile or a landline number, and resolves the numeric prefix against a
//! compiled-in dataset of operator blocks and landline area codes. The result
//! is a [`PhoneRecord`] carrying the operator, the subscription type and the
//! serving province(s), or a typed error.
//!
//! The dataset is a static snapshot; number portability is not taken into
//! account.

mod phoneutil;
pub(crate) mod regex_util;


use std::sync::LazyLock;

pub use phoneutil::enums::{Operator, Province, SubscriptionType};
pub use phoneutil::errors::{MobileParseError, PhoneParseError};
pub use phoneutil::phoneutil::{PhoneRecord, PhoneUtil};

/// Process-wide classifier instance. The shape patterns and the prefix
/// tables are built exactly once, on first access.
pub static PHONE_UTIL: LazyLock<PhoneUtil> = LazyLock::new(|| {
    PhoneUtil::new()
});
