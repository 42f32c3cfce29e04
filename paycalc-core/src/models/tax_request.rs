use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Indian tax regime election. Other countries ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    #[default]
    New,
}

impl TaxRegime {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

/// Deductions a taxpayer can elect to claim against taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    /// Investment-linked savings (India, section 80C).
    Investment,
    /// Health insurance premiums (India, section 80D).
    HealthInsurance,
    /// Interest on a home loan (India, section 24b).
    HomeLoanInterest,
    /// Additional retirement-scheme contribution (India, section 80CCD(1B)).
    RetirementScheme,
    /// Pre-tax retirement plan contribution (US 401(k)).
    RetirementContribution,
    /// Pension contribution (UK).
    PensionContribution,
}

impl DeductionCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "investment" | "80c" => Some(Self::Investment),
            "health_insurance" | "80d" => Some(Self::HealthInsurance),
            "home_loan_interest" | "24b" => Some(Self::HomeLoanInterest),
            "retirement_scheme" | "nps" => Some(Self::RetirementScheme),
            "retirement_contribution" | "401k" => Some(Self::RetirementContribution),
            "pension_contribution" | "pension" => Some(Self::PensionContribution),
            _ => None,
        }
    }
}

/// Input to the per-country income tax calculators.
///
/// `country_code` is kept as the raw selector string so that an unknown or
/// unselected country degrades to zero tax instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    pub annual_taxable_income: Decimal,
    pub country_code: String,
    pub region_name: Option<String>,
    pub tax_regime: Option<TaxRegime>,
    #[serde(default)]
    pub elected_deductions: BTreeMap<DeductionCategory, Decimal>,
}

impl TaxCalculationRequest {
    pub fn new(
        annual_taxable_income: Decimal,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            annual_taxable_income,
            country_code: country_code.into(),
            region_name: None,
            tax_regime: None,
            elected_deductions: BTreeMap::new(),
        }
    }

    pub fn with_region(
        mut self,
        region: impl Into<String>,
    ) -> Self {
        self.region_name = Some(region.into());
        self
    }

    pub fn with_regime(
        mut self,
        regime: TaxRegime,
    ) -> Self {
        self.tax_regime = Some(regime);
        self
    }

    pub fn with_deduction(
        mut self,
        category: DeductionCategory,
        amount: Decimal,
    ) -> Self {
        self.elected_deductions.insert(category, amount);
        self
    }

    /// Elected amount for a category; missing entries count as zero.
    pub fn deduction(
        &self,
        category: DeductionCategory,
    ) -> Decimal {
        self.elected_deductions
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    pub fn regime(&self) -> TaxRegime {
        self.tax_regime.unwrap_or_default()
    }
}
