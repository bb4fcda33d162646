pub mod enums;
pub mod errors;
pub mod phoneutil;
mod phone_regexps;
mod prefix_mappings;
