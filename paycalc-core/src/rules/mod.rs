//! Statutory rates, caps and slab schedules per country.
//!
//! Figures are the published values for the 2024-25 / 2025 tax years. The
//! "assumed" contribution percentages are defaults for voluntary schemes the
//! calculators treat as if the employee had enrolled.

pub mod australia;
pub mod canada;
pub mod germany;
pub mod india;
pub mod purchasing_power;
pub mod singapore;
pub mod united_kingdom;
pub mod united_states;

use rust_decimal::Decimal;

/// Looks up a flat regional rate by name, ignoring case and surrounding
/// whitespace. Falls back to `baseline` for a missing or unknown region.
pub(crate) fn regional_rate(
    table: &[(&str, Decimal)],
    region: Option<&str>,
    baseline: Decimal,
) -> Decimal {
    region
        .map(str::trim)
        .and_then(|name| {
            table
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
        })
        .map(|(_, rate)| *rate)
        .unwrap_or(baseline)
}
