use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use paycalc_core::{CompoundingFrequency, CountryCode, DeductionCategory, TaxRegime};
use rust_decimal::Decimal;

use crate::utils::{parse_country, parse_decimal, parse_deduction, parse_frequency, parse_regime};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Multi-country salary, tax and personal-finance calculator.
///
/// Amounts accept comma thousands separators (`1,500,000`). Rates are annual
/// percentages (`7.5` means 7.5%).
#[derive(Debug, Parser)]
#[command(name = "paycalc", version)]
pub struct Cli {
    /// Config file. Defaults to `paycalc.toml` in the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level or EnvFilter directive; overrides the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a gross annual CTC into pay components and statutory deductions.
    Salary {
        #[arg(value_parser = parse_decimal)]
        ctc: Decimal,
        #[command(flatten)]
        location: Location,
    },

    /// Income tax on an annual taxable income.
    Tax {
        #[arg(value_parser = parse_decimal)]
        income: Decimal,
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        elections: TaxElections,
    },

    /// Salary breakdown followed by income tax on its gross pay.
    TakeHome {
        #[arg(value_parser = parse_decimal)]
        ctc: Decimal,
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        elections: TaxElections,
    },

    /// Monthly installment for a fixed-rate loan.
    Loan(LoanTerms),

    /// Monthly installment for a car loan after the down payment.
    CarLoan {
        #[arg(value_parser = parse_decimal)]
        price: Decimal,
        #[arg(long, default_value = "0", value_parser = parse_decimal)]
        down_payment: Decimal,
        #[arg(value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(value_parser = parse_decimal)]
        years: Decimal,
    },

    /// Month-by-month amortization table.
    Schedule(LoanTerms),

    /// Future value of a monthly investment.
    Sip {
        #[arg(value_parser = parse_decimal)]
        monthly: Decimal,
        #[arg(value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(value_parser = parse_decimal)]
        years: Decimal,
    },

    /// Future value of a one-time investment.
    Lumpsum {
        #[arg(value_parser = parse_decimal)]
        principal: Decimal,
        #[arg(value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(value_parser = parse_decimal)]
        years: Decimal,
    },

    /// Maturity of a fixed deposit.
    Fd {
        #[arg(value_parser = parse_decimal)]
        principal: Decimal,
        #[arg(value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(value_parser = parse_decimal)]
        years: Decimal,
        #[arg(long, default_value = "quarterly", value_parser = parse_frequency)]
        compounding: CompoundingFrequency,
    },

    /// Simulate a systematic withdrawal plan.
    Swp {
        #[arg(value_parser = parse_decimal)]
        initial: Decimal,
        #[arg(value_parser = parse_decimal)]
        withdrawal: Decimal,
        #[arg(value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(value_parser = parse_decimal)]
        years: Decimal,
        #[arg(long, default_value = "monthly", value_parser = parse_frequency)]
        frequency: CompoundingFrequency,
    },

    /// Equivalent salary in another country by purchasing power and city cost of living.
    Ppp {
        #[arg(value_parser = parse_decimal)]
        amount: Decimal,
        #[arg(long, value_parser = parse_country)]
        from: CountryCode,
        #[arg(long, default_value = "Other")]
        from_city: String,
        #[arg(long, value_parser = parse_country)]
        to: CountryCode,
        #[arg(long, default_value = "Other")]
        to_city: String,
    },

    /// Convert between currencies at market rates.
    Convert {
        #[arg(value_parser = parse_decimal)]
        amount: Decimal,
        from: String,
        to: String,
    },

    /// Apply a percentage raise, or find the percentage between two salaries.
    #[command(group(ArgGroup::new("change").required(true).args(["percent", "new_salary"])))]
    Hike {
        #[arg(value_parser = parse_decimal)]
        current: Decimal,
        #[arg(long, value_parser = parse_decimal)]
        percent: Option<Decimal>,
        #[arg(long, value_parser = parse_decimal)]
        new_salary: Option<Decimal>,
    },

    /// Convert between an annual salary and hourly pay.
    Hourly {
        #[arg(value_parser = parse_decimal)]
        amount: Decimal,
        /// Treat AMOUNT as an hourly rate instead of an annual salary.
        #[arg(long)]
        from_hourly: bool,
        #[arg(long, default_value = "40", value_parser = parse_decimal)]
        hours_per_week: Decimal,
        #[arg(long, default_value = "52", value_parser = parse_decimal)]
        weeks_per_year: Decimal,
    },

    /// List supported countries.
    Countries,
}

#[derive(Debug, Clone, Args)]
pub struct Location {
    /// Country code (IN, US, UK, CA, AU, SG, DE). Falls back to the config
    /// file, then to the region of `LANG`.
    #[arg(long)]
    pub country: Option<String>,

    /// US state or Canadian province.
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct TaxElections {
    /// Indian tax regime.
    #[arg(long, value_parser = parse_regime)]
    pub regime: Option<TaxRegime>,

    /// Elected deduction as CATEGORY=AMOUNT; repeatable.
    #[arg(long = "deduction", value_parser = parse_deduction)]
    pub deductions: Vec<(DeductionCategory, Decimal)>,
}

#[derive(Debug, Clone, Args)]
pub struct LoanTerms {
    #[arg(value_parser = parse_decimal)]
    pub principal: Decimal,
    #[arg(value_parser = parse_decimal)]
    pub rate: Decimal,
    #[arg(value_parser = parse_decimal)]
    pub years: Decimal,
}
