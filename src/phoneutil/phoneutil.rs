use log::{trace, warn};

use crate::regex_util::RegexFullMatch;

use super::enums::{Operator, Province, SubscriptionType};
use super::errors::{MobileParseError, PhoneParseError};
use super::phone_regexps::PhoneRegExps;
use super::prefix_mappings::PrefixMappings;

/// Length of the primary mobile prefix, counting the leading zero.
const MOBILE_PREFIX_LEN: usize = 4;
/// Length of the secondary prefix used for the virtual-operator blocks.
const MVNO_PREFIX_LEN: usize = 6;
/// Length of a landline area code, counting the leading zero.
const AREA_CODE_LEN: usize = 3;

/// The classification result for one number.
///
/// A record is a plain value built fresh per call; it carries no identity
/// beyond its fields and is never mutated after construction.
///
/// Invariants: `full_number` is `"0"` followed by `trimmed_number`, and
/// `code` followed by `base` is exactly `full_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRecord {
    /// Canonical national form, eleven digits with the leading zero.
    pub full_number: String,
    /// The ten matched digits without the leading zero.
    pub trimmed_number: String,
    /// The prefix the classification was keyed on: four or six digits for
    /// mobile, three for landline, leading zero included.
    pub code: String,
    /// The digits of `full_number` after `code`.
    pub base: String,
    /// `None` when the mobile prefix is not in the dataset.
    pub operator: Option<Operator>,
    /// `None` when the mobile prefix is not in the dataset. Note that
    /// [`SubscriptionType::Unknown`] is a real dataset value, distinct from
    /// an unrecognized prefix.
    pub subscription_type: Option<SubscriptionType>,
    /// Serving provinces; `[Province::AllProvinces]` for nationwide blocks,
    /// always a single province for landlines, empty only for an
    /// unrecognized mobile prefix.
    pub provinces: Vec<Province>,
}

impl PhoneRecord {
    /// False when the number was well-shaped but its mobile prefix is not in
    /// the dataset. Such records keep the six-digit code/base split and carry
    /// no operator, no subscription type and no provinces; they are returned
    /// as `Ok` so that callers can still use the normalized digits.
    pub fn is_classified(&self) -> bool {
        self.operator.is_some()
    }
}

/// The classifier: two compiled shape patterns plus the static prefix
/// dataset.
///
/// Immutable after construction, so a single instance is safe to share
/// between threads; [`PHONE_UTIL`](crate::PHONE_UTIL) is the process-wide
/// one.
pub struct PhoneUtil {
    /// Helper struct holding the compiled shape regular expressions.
    reg_exps: PhoneRegExps,
    /// The prefix lookup tables, a compiled-in snapshot of the numbering
    /// plan.
    mappings: PrefixMappings,
}

impl PhoneUtil {
    pub fn new() -> Self {
        Self {
            reg_exps: PhoneRegExps::new(),
            mappings: PrefixMappings::new(),
        }
    }

    /// Reports whether `raw` matches the Iranian mobile shape: an optional
    /// `+98`/`98`/`0098` country prefix, an optional leading zero, then ten
    /// digits starting with `9`.
    pub fn is_mobile(&self, raw: &str) -> bool {
        self.reg_exps.mobile_pattern.full_match(raw)
    }

    /// Reports whether `raw` matches the landline shape: the same optional
    /// prefixes, then any ten digits. Mobile numbers satisfy this too; the
    /// entry points always try the mobile shape first.
    pub fn is_landline(&self, raw: &str) -> bool {
        self.reg_exps.landline_pattern.full_match(raw)
    }

    /// Pure validity predicate for mobile numbers, no classification.
    pub fn is_valid_mobile(&self, raw: &str) -> bool {
        self.is_mobile(raw)
    }

    /// General entry point: normalizes `raw` and classifies it as a mobile
    /// or a landline number.
    pub fn parse(&self, raw: &str) -> Result<PhoneRecord, PhoneParseError> {
        if self.is_mobile(raw) {
            trace!("input {} matched the mobile shape", raw);
            return self.parse_mobile(raw).map_err(PhoneParseError::from);
        }
        if self.is_landline(raw) {
            trace!("input {} matched the landline shape", raw);
            return self.parse_landline(raw);
        }
        Err(PhoneParseError::NotValid)
    }

    /// Mobile-only entry point. Input that is merely landline-shaped is
    /// rejected with [`MobileParseError::NotValid`].
    pub fn parse_mobile(&self, raw: &str) -> Result<PhoneRecord, MobileParseError> {
        let captures = self
            .reg_exps
            .mobile_pattern
            .full_captures(raw)
            .ok_or(MobileParseError::NotValid)?;
        let trimmed = captures
            .get(2)
            .ok_or(MobileParseError::Malformed)?
            .as_str();
        Ok(self.classify_mobile(trimmed))
    }

    /// The one shared mobile lookup, keyed on the canonical `0`-prefixed
    /// form: the four-digit prefix first, then the six-digit table for the
    /// shared virtual-operator blocks.
    fn classify_mobile(&self, trimmed: &str) -> PhoneRecord {
        let full_number = format!("0{}", trimmed);

        let primary = &full_number[..MOBILE_PREFIX_LEN];
        let (split, entry) = match self.mappings.mobile_prefix_map.get(primary) {
            Some(entry) => (MOBILE_PREFIX_LEN, Some(*entry)),
            None => (
                MVNO_PREFIX_LEN,
                self.mappings
                    .mvno_prefix_map
                    .get(&full_number[..MVNO_PREFIX_LEN])
                    .copied(),
            ),
        };

        let code = full_number[..split].to_owned();
        let base = full_number[split..].to_owned();
        if entry.is_none() {
            warn!(
                "no operator is known for mobile prefix {}; returning an unclassified record",
                code
            );
        }
        PhoneRecord {
            trimmed_number: trimmed.to_owned(),
            full_number,
            code,
            base,
            operator: entry.map(|e| e.operator),
            subscription_type: entry.map(|e| e.subscription_type),
            provinces: entry.map_or_else(Vec::new, |e| e.provinces.to_vec()),
        }
    }

    fn parse_landline(&self, raw: &str) -> Result<PhoneRecord, PhoneParseError> {
        let captures = self
            .reg_exps
            .landline_pattern
            .full_captures(raw)
            .ok_or(PhoneParseError::NotValid)?;
        let trimmed = captures
            .get(2)
            .ok_or(PhoneParseError::Malformed)?
            .as_str();

        let full_number = format!("0{}", trimmed);
        let code = &full_number[..AREA_CODE_LEN];
        let province = *self
            .mappings
            .area_code_map
            .get(code)
            .ok_or(PhoneParseError::InvalidCityCode)?;

        Ok(PhoneRecord {
            code: code.to_owned(),
            base: full_number[AREA_CODE_LEN..].to_owned(),
            trimmed_number: trimmed.to_owned(),
            full_number,
            operator: Some(Operator::Tci),
            subscription_type: Some(SubscriptionType::Landline),
            provinces: vec![province],
        })
    }
}

impl Default for PhoneUtil {
    fn default() -> Self {
        Self::new()
    }
}
