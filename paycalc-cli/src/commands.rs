use anyhow::{Context, Result};
use paycalc_core::calculations::{
    amortization_schedule, amortize, annual_from_hourly, car_loan, cities, compute_income_tax,
    convert_by_ppp, convert_currency, decompose_salary, fixed_deposit, lumpsum, pay_rates,
    salary_hike, salary_hike_between, sip, systematic_withdrawal, take_home,
};
use paycalc_core::{CountryCode, RateTable, TaxCalculationRequest};
use paycalc_rates::{
    CsvFileRateSource, JsonFileRateSource, RateService, StaticRateSource, SystemClock,
    resolve_country,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::cli::{Command, Location, TaxElections};
use crate::config::Config;
use crate::render::{self, CountryListing, TaxSummary};

/// Base currency of the configured rate file.
const RATES_BASE: &str = "USD";

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(value).context("serializing output")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}

/// Country flag, then `default_country`, then the region of `LANG`.
///
/// An empty code is passed through; the calculators treat it as an unknown
/// country.
fn country_code(
    location: &Location,
    config: &Config,
) -> String {
    location
        .country
        .clone()
        .or_else(|| config.default_country.clone())
        .or_else(|| {
            let lang = std::env::var("LANG").ok()?;
            let tag = lang.split(['.', '@']).next()?;
            resolve_country(None, Some(tag)).map(|code| code.as_str().to_string())
        })
        .unwrap_or_default()
}

fn tax_request(
    income: Decimal,
    location: &Location,
    elections: &TaxElections,
    config: &Config,
) -> TaxCalculationRequest {
    let mut request = TaxCalculationRequest::new(income, country_code(location, config));
    if let Some(region) = &location.region {
        request = request.with_region(region.clone());
    }
    if let Some(regime) = elections.regime {
        request = request.with_regime(regime);
    }
    for (category, amount) in &elections.deductions {
        request = request.with_deduction(*category, *amount);
    }
    request
}

async fn rate_table(config: &Config) -> Result<RateTable> {
    let ttl = config.cache_ttl().context("reading rate cache settings")?;
    let table = match &config.rates_file {
        Some(path) if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) => {
            let source = CsvFileRateSource::new(path, RATES_BASE);
            RateService::with_clock(source, SystemClock, ttl).rates(RATES_BASE).await
        }
        Some(path) => {
            let source = JsonFileRateSource::new(path);
            RateService::with_clock(source, SystemClock, ttl).rates(RATES_BASE).await
        }
        None => {
            RateService::with_clock(StaticRateSource::default(), SystemClock, ttl)
                .rates(RATES_BASE)
                .await
        }
    };
    Ok(table)
}

/// Runs one subcommand and returns its printable output.
pub async fn run(
    command: Command,
    json: bool,
    config: &Config,
) -> Result<String> {
    debug!(?command, "running command");

    match command {
        Command::Salary { ctc, location } => {
            let code = country_code(&location, config);
            let breakdown = decompose_salary(ctc, &code, location.region.as_deref());
            emit(json, &breakdown, render::breakdown)
        }

        Command::Tax {
            income,
            location,
            elections,
        } => {
            let request = tax_request(income, &location, &elections, config);
            let profile = CountryCode::parse(&request.country_code)
                .unwrap_or(CountryCode::UnitedStates)
                .profile();
            let summary = TaxSummary {
                income_tax: compute_income_tax(&request),
                country_code: request.country_code,
                taxable_income: income,
                currency_code: profile.currency_code.to_string(),
                currency_symbol: profile.currency_symbol.to_string(),
            };
            emit(json, &summary, render::tax)
        }

        Command::TakeHome {
            ctc,
            location,
            elections,
        } => {
            let template = tax_request(ctc, &location, &elections, config);
            emit(json, &take_home(ctc, &template), render::take_home)
        }

        Command::Loan(terms) => {
            let result = amortize(terms.principal, terms.rate, terms.years)
                .context("calculating loan payment")?;
            emit(json, &result, render::loan)
        }

        Command::CarLoan {
            price,
            down_payment,
            rate,
            years,
        } => {
            let result =
                car_loan(price, down_payment, rate, years).context("calculating car loan")?;
            emit(json, &result, render::loan)
        }

        Command::Schedule(terms) => {
            let rows = amortization_schedule(terms.principal, terms.rate, terms.years)
                .context("building amortization schedule")?;
            emit(json, &rows, |rows| render::schedule(rows))
        }

        Command::Sip {
            monthly,
            rate,
            years,
        } => {
            let result = sip(monthly, rate, years).context("calculating SIP returns")?;
            emit(json, &result, render::growth)
        }

        Command::Lumpsum {
            principal,
            rate,
            years,
        } => {
            let result = lumpsum(principal, rate, years).context("calculating lumpsum returns")?;
            emit(json, &result, render::growth)
        }

        Command::Fd {
            principal,
            rate,
            years,
            compounding,
        } => {
            let result = fixed_deposit(principal, rate, years, compounding)
                .context("calculating fixed deposit maturity")?;
            emit(json, &result, render::growth)
        }

        Command::Swp {
            initial,
            withdrawal,
            rate,
            years,
            frequency,
        } => {
            let result = systematic_withdrawal(initial, withdrawal, rate, years, frequency)
                .context("simulating withdrawal plan")?;
            emit(json, &result, render::withdrawal)
        }

        Command::Ppp {
            amount,
            from,
            from_city,
            to,
            to_city,
        } => {
            let result = convert_by_ppp(amount, from, &from_city, to, &to_city)
                .context("converting by purchasing power")?;
            emit(json, &result, render::ppp)
        }

        Command::Convert { amount, from, to } => {
            let table = rate_table(config).await?;
            let conversion = convert_currency(amount, &from, &to, &table)
                .with_context(|| format!("converting {from} to {to}"))?;
            emit(json, &conversion, render::conversion)
        }

        Command::Hike {
            current,
            percent,
            new_salary,
        } => {
            let result = match (percent, new_salary) {
                (Some(percent), _) => {
                    salary_hike(current, percent).context("applying salary hike")?
                }
                (None, Some(new_salary)) => salary_hike_between(current, new_salary)
                    .context("calculating hike percentage")?,
                (None, None) => anyhow::bail!("either --percent or --new-salary is required"),
            };
            emit(json, &result, render::hike)
        }

        Command::Hourly {
            amount,
            from_hourly,
            hours_per_week,
            weeks_per_year,
        } => {
            let annual = if from_hourly {
                annual_from_hourly(amount, hours_per_week, weeks_per_year)
                    .context("converting hourly rate")?
            } else {
                amount
            };
            let rates = pay_rates(annual, hours_per_week, weeks_per_year)
                .context("calculating pay rates")?;
            emit(json, &rates, render::pay_rates)
        }

        Command::Countries => {
            let listings: Vec<CountryListing> = CountryCode::ALL
                .into_iter()
                .map(|code| {
                    let profile = code.profile();
                    CountryListing {
                        code: code.as_str(),
                        name: profile.display_name,
                        currency_code: profile.currency_code,
                        currency_symbol: profile.currency_symbol,
                        salary_rules: code.rules().is_some(),
                        cities: cities(code),
                    }
                })
                .collect();
            emit(json, &listings, |listings| render::countries(listings))
        }
    }
}
