//! Validation of company configurations.
//!
//! The calculator divides by the salary divisors and the leave divisor, so
//! those must be strictly positive before a configuration is accepted.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::CompanyConfiguration;

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfiguration {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn require_positive(value: Decimal, field: &str) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn require_non_negative(value: Decimal, field: &str) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

impl CompanyConfiguration {
    /// Checks the invariants the calculator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the first field
    /// that is out of range.
    pub fn validate(&self) -> EngineResult<()> {
        let salary = &self.base_salary_structure;
        require_positive(
            salary.working_days_per_month,
            "base_salary_structure.working_days_per_month",
        )?;
        require_positive(
            salary.standard_working_hours,
            "base_salary_structure.standard_working_hours",
        )?;
        require_non_negative(
            salary.default_monthly_salary,
            "base_salary_structure.default_monthly_salary",
        )?;

        require_positive(
            self.leave_management.unpaid_leave_calculation.divisor_days,
            "leave_management.unpaid_leave_calculation.divisor_days",
        )?;

        for (tier, rule) in self.overtime_rules.iter() {
            require_non_negative(rule.rate, &format!("overtime_rules.{}.rate", tier.key()))?;
        }

        require_non_negative(self.meal_allowance.amount, "meal_allowance.amount")?;
        require_non_negative(
            self.meal_allowance.minimum_hours,
            "meal_allowance.minimum_hours",
        )?;
        require_non_negative(self.transport_allowance.amount, "transport_allowance.amount")?;

        if let Some(rules) = &self.attendance_settings.break_deduction_rules {
            require_non_negative(
                rules.lunch_after_hours,
                "attendance_settings.break_deduction_rules.lunch_after_hours",
            )?;
            if rules.extended_after_hours < rules.lunch_after_hours {
                return Err(invalid(
                    "attendance_settings.break_deduction_rules.extended_after_hours",
                    "must not be below lunch_after_hours",
                ));
            }
        }

        if let Some(settings) = &self.mauritius_settings {
            let c = &settings.contributions;
            for (name, rate) in [
                ("employee_npf", &c.employee_npf),
                ("employee_nsf", &c.employee_nsf),
                ("employee_csg", &c.employee_csg),
                ("employer_npf", &c.employer_npf),
                ("employer_nsf", &c.employer_nsf),
                ("employer_csg", &c.employer_csg),
                ("training_levy", &c.training_levy),
            ] {
                require_non_negative(
                    rate.rate,
                    &format!("mauritius_settings.contributions.{}.rate", name),
                )?;
            }
            require_non_negative(
                settings.overtime_limits.max_overtime_per_week,
                "mauritius_settings.overtime_limits.max_overtime_per_week",
            )?;
        }

        Ok(())
    }
}
