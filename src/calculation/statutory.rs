//! Statutory contribution split.
//!
//! This module splits a gross salary into the Mauritius employee
//! contributions (deducted from pay) and employer contributions (an
//! employer cost that never reduces net pay).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{CompanyConfiguration, ContributionRate};

use super::round_money;

/// Contributions withheld from the employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContributions {
    /// National Pensions Fund.
    pub npf: Decimal,
    /// National Solidarity Fund.
    pub nsf: Decimal,
    /// Contribution Sociale Généralisée.
    pub csg: Decimal,
    /// Sum of the employee contributions.
    pub total: Decimal,
}

/// Contributions paid by the employer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// National Pensions Fund.
    pub npf: Decimal,
    /// National Solidarity Fund.
    pub nsf: Decimal,
    /// Contribution Sociale Généralisée.
    pub csg: Decimal,
    /// Training levy.
    pub training_levy: Decimal,
    /// Sum of the employer contributions.
    pub total: Decimal,
}

/// The contribution split of a gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// The gross salary the split was computed from.
    pub gross_salary: Decimal,
    /// Employee-side contributions.
    pub employee: EmployeeContributions,
    /// Employer-side contributions.
    pub employer: EmployerContributions,
    /// Gross salary less employee contributions.
    pub net_salary: Decimal,
}

fn contribution(gross_salary: Decimal, rate: &ContributionRate) -> Decimal {
    if rate.enabled {
        round_money(gross_salary * rate.rate / Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    }
}

/// Splits a gross salary into statutory contributions and net salary.
///
/// When Mauritius compliance is off, or no Mauritius settings are
/// configured, every contribution is zero and the net salary equals the
/// gross salary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_statutory_contributions;
/// use payroll_engine::config::default_company_configuration;
/// use rust_decimal::Decimal;
///
/// let config = default_company_configuration("Acme", 10); // compliance off
/// let result = calculate_statutory_contributions(Decimal::new(20000, 0), &config);
///
/// assert_eq!(result.net_salary, Decimal::new(20000, 0));
/// assert_eq!(result.employee.total, Decimal::ZERO);
/// ```
pub fn calculate_statutory_contributions(
    gross_salary: Decimal,
    config: &CompanyConfiguration,
) -> StatutoryContributions {
    let Some(settings) = config.active_mauritius_settings() else {
        return StatutoryContributions {
            gross_salary,
            employee: EmployeeContributions::default(),
            employer: EmployerContributions::default(),
            net_salary: gross_salary,
        };
    };
    let rates = &settings.contributions;

    let npf = contribution(gross_salary, &rates.employee_npf);
    let nsf = contribution(gross_salary, &rates.employee_nsf);
    let csg = contribution(gross_salary, &rates.employee_csg);
    let employee = EmployeeContributions {
        npf,
        nsf,
        csg,
        total: npf + nsf + csg,
    };

    let npf = contribution(gross_salary, &rates.employer_npf);
    let nsf = contribution(gross_salary, &rates.employer_nsf);
    let csg = contribution(gross_salary, &rates.employer_csg);
    let training_levy = contribution(gross_salary, &rates.training_levy);
    let employer = EmployerContributions {
        npf,
        nsf,
        csg,
        training_levy,
        total: npf + nsf + csg + training_levy,
    };

    let net_salary = round_money(gross_salary - employee.total);

    StatutoryContributions {
        gross_salary,
        employee,
        employer,
        net_salary,
    }
}
