use strum::{Display, EnumIter};

/// Iranian carriers known to the prefix tables.
///
/// `Display` yields the Persian carrier name, exactly as published by the
/// upstream numbering-plan sources.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// MTN IranCell.
    #[strum(serialize = "ایرانسل")]
    IranCell,
    /// Hamrah-e Avval, the Mobile Communications Company of Iran.
    #[strum(serialize = "همراه اول")]
    Mci,
    /// Telecommunication Company of Iran, the national fixed-line operator.
    #[strum(serialize = "مخابرات ایران")]
    Tci,
    #[strum(serialize = "رایتل")]
    Rightel,
    #[strum(serialize = "تالیا")]
    Talya,
    /// Espadan (MTCE), the Isfahan regional operator.
    #[strum(serialize = "اسپادان")]
    Mtce,
    /// TeleKish, serving the Kish free zone.
    #[strum(serialize = "تله‌کیش")]
    TeleKish,
    #[strum(serialize = "آپ‌تل")]
    ApTel,
    #[strum(serialize = "آذرتل")]
    Azartel,
    #[strum(serialize = "سامانتل")]
    SamanTel,
    /// Licensed virtual operator with no live prefix block in the current
    /// dataset.
    #[strum(serialize = "لوتوس‌تل")]
    LotusTel,
    #[strum(serialize = "شاتل موبایل")]
    ShatelMobile,
}

/// Subscription plan attached to a prefix block.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionType {
    /// Credit-based SIM plans.
    #[strum(serialize = "اعتباری")]
    Prepaid,
    /// Contract SIM plans.
    #[strum(serialize = "دائمی")]
    Postpaid,
    /// Supervised child SIM plans.
    #[strum(serialize = "سیمکارت کودک")]
    Child,
    /// Fixed-wireless TD-LTE data plans.
    #[strum(serialize = "TD-Lte")]
    TdLte,
    /// Fixed-line subscription; assigned to every landline record.
    #[strum(serialize = "ثابت")]
    Landline,
    /// The block is sold under several plans and cannot be narrowed further.
    #[strum(serialize = "نامشخص")]
    Unknown,
}

/// The 31 Iranian provinces, plus the [`Province::AllProvinces`] sentinel.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Province {
    /// Nationwide coverage. This is a table value in its own right, never an
    /// aggregate computed from the individual provinces.
    #[strum(serialize = "همه استان‌ها")]
    AllProvinces,
    #[strum(serialize = "آذربایجان شرقی")]
    EastAzerbaijan,
    #[strum(serialize = "آذربایجان غربی")]
    WestAzerbaijan,
    #[strum(serialize = "اردبیل")]
    Ardabil,
    #[strum(serialize = "اصفهان")]
    Isfahan,
    #[strum(serialize = "البرز")]
    Alborz,
    #[strum(serialize = "ایلام")]
    Ilam,
    #[strum(serialize = "بوشهر")]
    Bushehr,
    #[strum(serialize = "تهران")]
    Tehran,
    #[strum(serialize = "چهارمحال و بختیاری")]
    ChaharmahalBakhtiari,
    #[strum(serialize = "خراسان شمالی")]
    NorthKhorasan,
    #[strum(serialize = "خراسان رضوی")]
    RazaviKhorasan,
    #[strum(serialize = "خراسان جنوبی")]
    SouthKhorasan,
    #[strum(serialize = "خوزستان")]
    Khuzestan,
    #[strum(serialize = "زنجان")]
    Zanjan,
    #[strum(serialize = "سمنان")]
    Semnan,
    #[strum(serialize = "سیستان و بلوچستان")]
    SistanBaluchestan,
    #[strum(serialize = "فارس")]
    Fars,
    #[strum(serialize = "قزوین")]
    Qazvin,
    #[strum(serialize = "قم")]
    Qom,
    #[strum(serialize = "کردستان")]
    Kurdistan,
    #[strum(serialize = "کرمان")]
    Kerman,
    #[strum(serialize = "کرمانشاه")]
    Kermanshah,
    #[strum(serialize = "کهکیلویه و بویراحمد")]
    KohgiluyehBoyerAhmad,
    #[strum(serialize = "گلستان")]
    Golestan,
    #[strum(serialize = "گیلان")]
    Gilan,
    #[strum(serialize = "لرستان")]
    Lorestan,
    #[strum(serialize = "مازندران")]
    Mazandaran,
    #[strum(serialize = "مرکزی")]
    Markazi,
    #[strum(serialize = "هرمزگان")]
    Hormozgan,
    #[strum(serialize = "همدان")]
    Hamadan,
    #[strum(serialize = "یزد")]
    Yazd,
}
