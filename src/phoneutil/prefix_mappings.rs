use std::collections::HashMap;

use super::enums::{Operator, Province, SubscriptionType};

/// The one-element province list standing for nationwide coverage.
const NATIONWIDE: &[Province] = &[Province::AllProvinces];

/// Classification facts attached to one mobile prefix block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PrefixEntry {
    pub operator: Operator,
    pub subscription_type: SubscriptionType,
    pub provinces: &'static [Province],
}

impl PrefixEntry {
    const fn new(
        operator: Operator,
        subscription_type: SubscriptionType,
        provinces: &'static [Province],
    ) -> Self {
        Self {
            operator,
            subscription_type,
            provinces,
        }
    }
}

/// The static prefix dataset: a snapshot of the Iranian numbering plan.
///
/// Built once per [`PhoneUtil`] and never mutated afterwards. Keys always
/// include the reinstated leading zero, so they can be matched directly
/// against a slice of the canonical `0`-prefixed number.
///
/// [`PhoneUtil`]: super::phoneutil::PhoneUtil
pub(super) struct PrefixMappings {
    /// Four-digit mobile prefix to its classification facts.
    pub mobile_prefix_map: HashMap<&'static str, PrefixEntry>,
    /// Six-digit prefixes of the virtual operators sharing the `0999` and
    /// `0998` blocks, which a four-digit prefix cannot tell apart.
    pub mvno_prefix_map: HashMap<&'static str, PrefixEntry>,
    /// Three-digit landline area code to its single province.
    pub area_code_map: HashMap<&'static str, Province>,
}

impl PrefixMappings {
    pub fn new() -> Self {
        let mut instance = Self {
            mobile_prefix_map: HashMap::with_capacity(36),
            mvno_prefix_map: HashMap::with_capacity(16),
            area_code_map: HashMap::with_capacity(32),
        };
        instance.initialize_mobile_prefixes();
        instance.initialize_mvno_prefixes();
        instance.initialize_area_codes();
        instance
    }

    fn initialize_mobile_prefixes(&mut self) {
        use Operator::*;
        use Province::*;
        use SubscriptionType::*;

        let map = &mut self.mobile_prefix_map;

        // IranCell sells most of its blocks under several plans at once.
        for code in [
            "0930", "0933", "0935", "0936", "0937", "0938", "0939", "0900", "0903", "0905",
        ] {
            map.insert(code, PrefixEntry::new(IranCell, Unknown, NATIONWIDE));
        }
        map.insert("0901", PrefixEntry::new(IranCell, Prepaid, NATIONWIDE));
        map.insert("0902", PrefixEntry::new(IranCell, Postpaid, NATIONWIDE));
        map.insert("0904", PrefixEntry::new(IranCell, Child, NATIONWIDE));
        map.insert("0941", PrefixEntry::new(IranCell, TdLte, NATIONWIDE));

        map.insert("0920", PrefixEntry::new(Rightel, Postpaid, NATIONWIDE));
        map.insert("0921", PrefixEntry::new(Rightel, Prepaid, NATIONWIDE));
        map.insert("0922", PrefixEntry::new(Rightel, Prepaid, NATIONWIDE));

        // The 091X range predates nationwide assignment; its blocks are still
        // tied to the regions they were first rolled out in.
        map.insert("0910", PrefixEntry::new(Mci, Unknown, NATIONWIDE));
        map.insert(
            "0911",
            PrefixEntry::new(Mci, Unknown, &[Mazandaran, Golestan, Gilan]),
        );
        map.insert(
            "0912",
            PrefixEntry::new(
                Mci,
                Postpaid,
                &[Tehran, Alborz, Zanjan, Semnan, Qazvin, Qom, Markazi],
            ),
        );
        map.insert(
            "0913",
            PrefixEntry::new(Mci, Unknown, &[Isfahan, Yazd, ChaharmahalBakhtiari, Kerman]),
        );
        map.insert(
            "0914",
            PrefixEntry::new(
                Mci,
                Unknown,
                &[EastAzerbaijan, WestAzerbaijan, Ardabil, Isfahan],
            ),
        );
        map.insert(
            "0915",
            PrefixEntry::new(
                Mci,
                Unknown,
                &[RazaviKhorasan, SouthKhorasan, NorthKhorasan, SistanBaluchestan],
            ),
        );
        map.insert(
            "0916",
            PrefixEntry::new(Mci, Unknown, &[Khuzestan, Lorestan, Fars, Isfahan]),
        );
        map.insert(
            "0917",
            PrefixEntry::new(
                Mci,
                Prepaid,
                &[Fars, Bushehr, KohgiluyehBoyerAhmad, Hormozgan],
            ),
        );
        map.insert(
            "0918",
            PrefixEntry::new(Mci, Prepaid, &[Kermanshah, Kurdistan, Ilam, Hamadan]),
        );
        map.insert("0919", PrefixEntry::new(Mci, Prepaid, NATIONWIDE));
        map.insert("0990", PrefixEntry::new(Mci, Prepaid, NATIONWIDE));
        map.insert("0991", PrefixEntry::new(Mci, Unknown, NATIONWIDE));
        map.insert("0992", PrefixEntry::new(Mci, Prepaid, NATIONWIDE));
        map.insert("0993", PrefixEntry::new(Mci, Prepaid, NATIONWIDE));
        map.insert("0994", PrefixEntry::new(Mci, Prepaid, NATIONWIDE));

        map.insert("0932", PrefixEntry::new(Talya, Prepaid, NATIONWIDE));

        map.insert("0931", PrefixEntry::new(Mtce, Prepaid, NATIONWIDE));

        map.insert("0934", PrefixEntry::new(TeleKish, Postpaid, &[Hormozgan]));
    }

    fn initialize_mvno_prefixes(&mut self) {
        use Operator::*;
        use SubscriptionType::*;

        let map = &mut self.mvno_prefix_map;

        map.insert("099910", PrefixEntry::new(ApTel, Postpaid, NATIONWIDE));
        map.insert("099911", PrefixEntry::new(ApTel, Postpaid, NATIONWIDE));
        map.insert("099913", PrefixEntry::new(ApTel, Postpaid, NATIONWIDE));

        map.insert("099914", PrefixEntry::new(Azartel, Prepaid, NATIONWIDE));

        map.insert("099999", PrefixEntry::new(SamanTel, Postpaid, NATIONWIDE));
        map.insert("099998", PrefixEntry::new(SamanTel, Prepaid, NATIONWIDE));
        map.insert("099997", PrefixEntry::new(SamanTel, Prepaid, NATIONWIDE));
        map.insert("099996", PrefixEntry::new(SamanTel, Postpaid, NATIONWIDE));

        map.insert("099810", PrefixEntry::new(ShatelMobile, Prepaid, NATIONWIDE));
        map.insert("099811", PrefixEntry::new(ShatelMobile, Prepaid, NATIONWIDE));
        map.insert("099812", PrefixEntry::new(ShatelMobile, Prepaid, NATIONWIDE));
        map.insert("099814", PrefixEntry::new(ShatelMobile, Prepaid, NATIONWIDE));
        map.insert("099815", PrefixEntry::new(ShatelMobile, Prepaid, NATIONWIDE));
    }

    fn initialize_area_codes(&mut self) {
        use Province::*;

        let map = &mut self.area_code_map;

        map.insert("041", EastAzerbaijan);
        map.insert("044", WestAzerbaijan);
        map.insert("045", Ardabil);
        map.insert("031", Isfahan);
        map.insert("026", Alborz);
        map.insert("084", Ilam);
        map.insert("077", Bushehr);
        map.insert("021", Tehran);
        map.insert("038", ChaharmahalBakhtiari);
        map.insert("056", SouthKhorasan);
        map.insert("051", RazaviKhorasan);
        map.insert("058", NorthKhorasan);
        map.insert("061", Khuzestan);
        map.insert("024", Zanjan);
        map.insert("023", Semnan);
        map.insert("054", SistanBaluchestan);
        map.insert("071", Fars);
        map.insert("028", Qazvin);
        map.insert("025", Qom);
        map.insert("087", Kurdistan);
        map.insert("034", Kerman);
        map.insert("083", Kermanshah);
        map.insert("074", KohgiluyehBoyerAhmad);
        map.insert("017", Golestan);
        map.insert("013", Gilan);
        map.insert("066", Lorestan);
        map.insert("011", Mazandaran);
        map.insert("086", Markazi);
        map.insert("076", Hormozgan);
        map.insert("081", Hamadan);
        map.insert("035", Yazd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_match_the_dataset() {
        let mappings = PrefixMappings::new();
        assert_eq!(35, mappings.mobile_prefix_map.len());
        assert_eq!(13, mappings.mvno_prefix_map.len());
        assert_eq!(31, mappings.area_code_map.len());
    }

    #[test]
    fn every_mobile_entry_has_provinces() {
        let mappings = PrefixMappings::new();
        for (code, entry) in mappings
            .mobile_prefix_map
            .iter()
            .chain(mappings.mvno_prefix_map.iter())
        {
            assert!(
                !entry.provinces.is_empty(),
                "prefix {} has no provinces",
                code
            );
        }
    }

    #[test]
    fn prefix_keys_carry_the_leading_zero() {
        let mappings = PrefixMappings::new();
        for code in mappings.mobile_prefix_map.keys() {
            assert_eq!(4, code.len());
            assert!(code.starts_with("09"));
        }
        for code in mappings.mvno_prefix_map.keys() {
            assert_eq!(6, code.len());
            assert!(code.starts_with("099"));
        }
        for code in mappings.area_code_map.keys() {
            assert_eq!(3, code.len());
            assert!(code.starts_with('0'));
        }
    }

    #[test]
    fn nationwide_entries_use_the_sentinel() {
        let mappings = PrefixMappings::new();
        let entry = mappings.mobile_prefix_map["0990"];
        assert_eq!(&[Province::AllProvinces], entry.provinces);
    }

    #[test]
    fn mvno_prefixes_are_not_in_the_primary_table() {
        let mappings = PrefixMappings::new();
        for code in mappings.mvno_prefix_map.keys() {
            assert!(!mappings.mobile_prefix_map.contains_key(&code[..4]));
        }
    }
}
