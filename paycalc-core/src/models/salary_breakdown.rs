use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::CountryProfile;

/// Whether a component adds to gross pay or is withheld from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    Earning,
    Deduction,
}

/// Named pay and statutory-deduction components.
///
/// Which components appear in a [`SalaryBreakdown`] depends on the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryComponent {
    BasicPay,
    HouseRentAllowance,
    SpecialAllowance,
    EmployeeProvidentFund,
    ProfessionalTax,
    SocialSecurity,
    Medicare,
    Retirement401k,
    NationalInsurance,
    Pension,
    CanadaPensionPlan,
    EmploymentInsurance,
    Superannuation,
    CentralProvidentFund,
    SocialContributions,
}

impl SalaryComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::BasicPay | Self::HouseRentAllowance | Self::SpecialAllowance => {
                ComponentKind::Earning
            }
            _ => ComponentKind::Deduction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicPay => "Basic pay",
            Self::HouseRentAllowance => "House rent allowance",
            Self::SpecialAllowance => "Special allowance",
            Self::EmployeeProvidentFund => "Employee provident fund",
            Self::ProfessionalTax => "Professional tax",
            Self::SocialSecurity => "Social Security",
            Self::Medicare => "Medicare",
            Self::Retirement401k => "401(k) contribution",
            Self::NationalInsurance => "National Insurance",
            Self::Pension => "Pension contribution",
            Self::CanadaPensionPlan => "Canada Pension Plan",
            Self::EmploymentInsurance => "Employment Insurance",
            Self::Superannuation => "Superannuation",
            Self::CentralProvidentFund => "Central Provident Fund",
            Self::SocialContributions => "Social security contributions",
        }
    }
}

/// Split of a gross annual compensation into pay components and statutory
/// deductions, before income tax.
///
/// Built through [`SalaryBreakdown::from_components`], which derives every
/// total from the component map so that `net_pay = gross_pay -
/// total_deductions` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub basic_pay: Decimal,
    pub gross_pay: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,
    pub monthly_pay: Decimal,
    pub components: BTreeMap<SalaryComponent, Decimal>,
    pub currency_code: String,
    pub currency_symbol: String,
}

impl SalaryBreakdown {
    /// Builds a breakdown from rounded component amounts.
    ///
    /// Each amount is rounded to cents before being summed.
    pub fn from_components<I>(
        profile: &CountryProfile,
        components: I,
    ) -> Self
    where
        I: IntoIterator<Item = (SalaryComponent, Decimal)>,
    {
        let components: BTreeMap<_, _> = components
            .into_iter()
            .map(|(component, amount)| (component, round_half_up(amount)))
            .collect();

        let sum_of = |kind: ComponentKind| -> Decimal {
            components
                .iter()
                .filter(|(component, _)| component.kind() == kind)
                .map(|(_, amount)| *amount)
                .sum()
        };

        let gross_pay = sum_of(ComponentKind::Earning);
        let total_deductions = sum_of(ComponentKind::Deduction);
        let net_pay = gross_pay - total_deductions;

        Self {
            basic_pay: components
                .get(&SalaryComponent::BasicPay)
                .copied()
                .unwrap_or_default(),
            gross_pay,
            total_deductions,
            net_pay,
            monthly_pay: round_half_up(net_pay / Decimal::from(12)),
            components,
            currency_code: profile.currency_code.to_string(),
            currency_symbol: profile.currency_symbol.to_string(),
        }
    }

    /// A breakdown with every figure at zero.
    pub fn zeroed(
        currency_code: &str,
        currency_symbol: &str,
    ) -> Self {
        Self {
            basic_pay: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            monthly_pay: Decimal::ZERO,
            components: BTreeMap::new(),
            currency_code: currency_code.to_string(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Amount of a single component, zero when the country does not use it.
    pub fn component(
        &self,
        component: SalaryComponent,
    ) -> Decimal {
        self.components
            .get(&component)
            .copied()
            .unwrap_or_default()
    }
}
