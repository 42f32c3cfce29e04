//! Infers the user's country from a geolocation payload or a language tag.

use paycalc_core::CountryCode;
use serde::Deserialize;

use crate::RateError;

/// The fields of an IP geolocation response that identify a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoPayload {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeoPayload {
    pub fn from_json(json: &str) -> Result<Self, RateError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn country_from_name_or_code(value: &str) -> Option<CountryCode> {
    CountryCode::parse(value).or_else(|| {
        CountryCode::ALL
            .into_iter()
            .find(|code| code.profile().display_name.eq_ignore_ascii_case(value.trim()))
    })
}

/// Region subtag of a BCP 47 tag such as `en-IN` or `zh-Hant-SG`.
fn region_subtag(language_tag: &str) -> Option<&str> {
    language_tag
        .split(['-', '_'])
        .skip(1)
        .find(|subtag| subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Picks a supported country, trying `country_code`, then `country`, then
/// the region of `language_tag`.
///
/// ```
/// use paycalc_core::CountryCode;
/// use paycalc_rates::resolve_country;
///
/// assert_eq!(resolve_country(None, Some("en-IN")), Some(CountryCode::India));
/// ```
pub fn resolve_country(
    geo: Option<&GeoPayload>,
    language_tag: Option<&str>,
) -> Option<CountryCode> {
    let from_geo = geo.and_then(|payload| {
        payload
            .country_code
            .as_deref()
            .and_then(country_from_name_or_code)
            .or_else(|| payload.country.as_deref().and_then(country_from_name_or_code))
    });

    from_geo.or_else(|| {
        language_tag
            .and_then(region_subtag)
            .and_then(CountryCode::parse)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn country_code_wins_over_country_name() {
        let geo = GeoPayload {
            country_code: Some("SG".to_string()),
            country: Some("Germany".to_string()),
        };

        assert_eq!(resolve_country(Some(&geo), Some("en-US")), Some(CountryCode::Singapore));
    }

    #[test]
    fn falls_back_to_country_name() {
        let geo = GeoPayload::from_json(r#"{"country":"canada"}"#).unwrap();

        assert_eq!(resolve_country(Some(&geo), None), Some(CountryCode::Canada));
    }

    #[test]
    fn falls_back_to_language_region() {
        let geo = GeoPayload {
            country_code: Some("BR".to_string()),
            country: None,
        };

        assert_eq!(resolve_country(Some(&geo), Some("en-GB")), Some(CountryCode::UnitedKingdom));
        assert_eq!(resolve_country(None, Some("zh_Hant_SG")), Some(CountryCode::Singapore));
    }

    #[test]
    fn language_without_region_resolves_nothing() {
        assert_eq!(resolve_country(None, Some("en")), None);
        assert_eq!(resolve_country(None, None), None);
    }
}
