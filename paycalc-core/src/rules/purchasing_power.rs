//! Purchasing power parity factors and city cost-of-living indices.
//!
//! PPP factors are local currency units per international dollar. The
//! cost-of-living index is relative to New York = 100. Every country has an
//! `Other` entry used for cities that are not listed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::CountryCode;

pub const OTHER_CITY: &str = "Other";

pub const PPP_PER_INTERNATIONAL_DOLLAR: [(&str, Decimal); 9] = [
    ("USD", dec!(1.00)),
    ("INR", dec!(22.40)),
    ("GBP", dec!(0.67)),
    ("EUR", dec!(0.73)),
    ("CAD", dec!(1.17)),
    ("AUD", dec!(1.44)),
    ("SGD", dec!(0.83)),
    ("JPY", dec!(94.50)),
    ("AED", dec!(2.25)),
];

pub static INDIA_CITIES: [(&str, Decimal); 7] = [
    ("Mumbai", dec!(31)),
    ("Delhi", dec!(28)),
    ("Bangalore", dec!(29)),
    ("Hyderabad", dec!(26)),
    ("Chennai", dec!(26)),
    ("Pune", dec!(27)),
    (OTHER_CITY, dec!(24)),
];

pub static UNITED_STATES_CITIES: [(&str, Decimal); 8] = [
    ("New York", dec!(100)),
    ("San Francisco", dec!(97)),
    ("Seattle", dec!(86)),
    ("Boston", dec!(88)),
    ("Los Angeles", dec!(80)),
    ("Chicago", dec!(77)),
    ("Austin", dec!(72)),
    (OTHER_CITY, dec!(70)),
];

pub static UNITED_KINGDOM_CITIES: [(&str, Decimal); 4] = [
    ("London", dec!(85)),
    ("Manchester", dec!(66)),
    ("Edinburgh", dec!(67)),
    (OTHER_CITY, dec!(62)),
];

pub static CANADA_CITIES: [(&str, Decimal); 4] = [
    ("Toronto", dec!(72)),
    ("Vancouver", dec!(73)),
    ("Montreal", dec!(65)),
    (OTHER_CITY, dec!(63)),
];

pub static AUSTRALIA_CITIES: [(&str, Decimal); 4] = [
    ("Sydney", dec!(80)),
    ("Melbourne", dec!(76)),
    ("Brisbane", dec!(73)),
    (OTHER_CITY, dec!(70)),
];

pub static SINGAPORE_CITIES: [(&str, Decimal); 2] = [
    ("Singapore", dec!(88)),
    (OTHER_CITY, dec!(88)),
];

pub static GERMANY_CITIES: [(&str, Decimal); 4] = [
    ("Munich", dec!(75)),
    ("Berlin", dec!(68)),
    ("Frankfurt", dec!(72)),
    (OTHER_CITY, dec!(64)),
];

pub static JAPAN_CITIES: [(&str, Decimal); 3] = [
    ("Tokyo", dec!(72)),
    ("Osaka", dec!(62)),
    (OTHER_CITY, dec!(58)),
];

pub static UNITED_ARAB_EMIRATES_CITIES: [(&str, Decimal); 3] = [
    ("Dubai", dec!(73)),
    ("Abu Dhabi", dec!(66)),
    (OTHER_CITY, dec!(60)),
];

pub static FRANCE_CITIES: [(&str, Decimal); 3] = [
    ("Paris", dec!(80)),
    ("Lyon", dec!(66)),
    (OTHER_CITY, dec!(62)),
];

pub static NETHERLANDS_CITIES: [(&str, Decimal); 3] = [
    ("Amsterdam", dec!(80)),
    ("Rotterdam", dec!(68)),
    (OTHER_CITY, dec!(66)),
];

/// Cost-of-living index per city, ending with the country-wide `Other` entry.
pub fn cost_of_living(country: CountryCode) -> &'static [(&'static str, Decimal)] {
    match country {
        CountryCode::India => &INDIA_CITIES,
        CountryCode::UnitedStates => &UNITED_STATES_CITIES,
        CountryCode::UnitedKingdom => &UNITED_KINGDOM_CITIES,
        CountryCode::Canada => &CANADA_CITIES,
        CountryCode::Australia => &AUSTRALIA_CITIES,
        CountryCode::Singapore => &SINGAPORE_CITIES,
        CountryCode::Germany => &GERMANY_CITIES,
        CountryCode::Japan => &JAPAN_CITIES,
        CountryCode::UnitedArabEmirates => &UNITED_ARAB_EMIRATES_CITIES,
        CountryCode::France => &FRANCE_CITIES,
        CountryCode::Netherlands => &NETHERLANDS_CITIES,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_country_ends_with_other_entry() {
        for country in CountryCode::ALL {
            let table = cost_of_living(country);

            assert_eq!(table.last().map(|(city, _)| *city), Some(OTHER_CITY), "{country}");
            assert!(table.iter().all(|(_, index)| *index > Decimal::ZERO), "{country}");
        }
    }

    #[test]
    fn lookup_returns_the_static_table() {
        assert_eq!(cost_of_living(CountryCode::India), &INDIA_CITIES[..]);
        assert_eq!(cost_of_living(CountryCode::Japan)[0], ("Tokyo", dec!(72)));
    }
}
