//! Unpaid break deduction.
//!
//! Every shift loses at least its lunch break from paid time. On premium
//! days a shift longer than the extended threshold also loses the dinner
//! break. Tea breaks are paid and never deducted.

use rust_decimal::Decimal;

use crate::config::CompanyConfiguration;
use crate::models::AuditStep;

use super::DayType;

/// The unpaid break time for one shift.
#[derive(Debug, Clone)]
pub struct BreakDeduction {
    /// The lunch break, in hours. This is the floor of every deduction.
    pub lunch_hours: Decimal,
    /// The total hours deducted from paid time.
    pub deducted_hours: Decimal,
    /// The audit step recording this deduction.
    pub audit_step: AuditStep,
}

impl BreakDeduction {
    /// Hours deducted beyond the lunch break.
    ///
    /// This is the dinner break when it applies, otherwise zero.
    pub fn extra_hours(&self) -> Decimal {
        self.deducted_hours - self.lunch_hours
    }
}

fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::new(60, 0)
}

/// Calculates the unpaid break time for a shift.
///
/// # Arguments
///
/// * `total_hours` - Clocked hours before any deduction
/// * `day_type` - The classified day of the shift
/// * `config` - The company configuration (break lengths and thresholds)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_break_deduction, DayType};
/// use payroll_engine::config::default_company_configuration;
/// use rust_decimal::Decimal;
///
/// let config = default_company_configuration("Acme", 10);
///
/// let weekday = calculate_break_deduction(Decimal::new(12, 0), DayType::Regular, &config, 1);
/// assert_eq!(weekday.deducted_hours, Decimal::new(5, 1));
///
/// let sunday = calculate_break_deduction(Decimal::new(12, 0), DayType::Sunday, &config, 1);
/// assert_eq!(sunday.deducted_hours, Decimal::new(1, 0));
/// ```
pub fn calculate_break_deduction(
    total_hours: Decimal,
    day_type: DayType,
    config: &CompanyConfiguration,
    step_number: u32,
) -> BreakDeduction {
    let schedule = &config.working_schedule;
    let rules = config.break_deduction_rules();

    let lunch_hours = minutes_to_hours(schedule.lunch_break_minutes);
    let dinner_hours = minutes_to_hours(schedule.dinner_break_minutes);

    let extended = day_type.is_premium() && total_hours > rules.extended_after_hours;
    let (deducted_hours, reasoning) = if extended {
        (
            lunch_hours + dinner_hours,
            format!(
                "{} shift of {} hours exceeds {} hours: lunch ({} min) and dinner ({} min) unpaid",
                day_type,
                total_hours.normalize(),
                rules.extended_after_hours.normalize(),
                schedule.lunch_break_minutes,
                schedule.dinner_break_minutes
            ),
        )
    } else {
        (
            lunch_hours,
            format!(
                "{} shift of {} hours: lunch ({} min) unpaid",
                day_type,
                total_hours.normalize(),
                schedule.lunch_break_minutes
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_deduction".to_string(),
        rule_name: "Break Deduction".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "day_type": day_type,
            "lunch_after_hours": rules.lunch_after_hours.normalize().to_string(),
            "extended_after_hours": rules.extended_after_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "deducted_hours": deducted_hours.normalize().to_string(),
            "dinner_deducted": extended
        }),
        reasoning,
    };

    BreakDeduction {
        lunch_hours,
        deducted_hours,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BreakDeductionRules, default_company_configuration};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_short_weekday_shift_still_loses_lunch() {
        let config = default_company_configuration("Acme", 10);
        let result = calculate_break_deduction(dec("4"), DayType::Regular, &config, 1);

        assert_eq!(result.deducted_hours, dec("0.5"));
        assert_eq!(result.extra_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_long_weekday_shift_only_loses_lunch() {
        let config = default_company_configuration("Acme", 10);
        let result = calculate_break_deduction(dec("13"), DayType::Regular, &config, 1);

        assert_eq!(result.deducted_hours, dec("0.5"));
    }

    #[test]
    fn test_sunday_at_extended_threshold_loses_lunch_only() {
        // Default extended threshold is standard hours + 2 = 10
        let config = default_company_configuration("Acme", 10);
        let result = calculate_break_deduction(dec("10"), DayType::Sunday, &config, 1);

        assert_eq!(result.deducted_hours, dec("0.5"));
    }

    #[test]
    fn test_holiday_beyond_extended_threshold_loses_dinner() {
        let config = default_company_configuration("Acme", 10);
        let result = calculate_break_deduction(dec("10.5"), DayType::PublicHoliday, &config, 1);

        assert_eq!(result.deducted_hours, dec("1"));
        assert_eq!(result.extra_hours(), dec("0.5"));
        assert_eq!(result.audit_step.output["dinner_deducted"], true);
    }

    #[test]
    fn test_configured_thresholds_and_break_lengths() {
        let mut config = default_company_configuration("Acme", 10);
        config.working_schedule.lunch_break_minutes = 45;
        config.working_schedule.dinner_break_minutes = 15;
        config.attendance_settings.break_deduction_rules = Some(BreakDeductionRules {
            lunch_after_hours: dec("6"),
            extended_after_hours: dec("9"),
        });

        let result = calculate_break_deduction(dec("9.5"), DayType::Sunday, &config, 1);

        assert_eq!(result.lunch_hours, dec("0.75"));
        assert_eq!(result.deducted_hours, dec("1"));
    }

    #[test]
    fn test_lunch_threshold_is_recorded_but_not_applied() {
        let mut config = default_company_configuration("Acme", 10);
        config.attendance_settings.break_deduction_rules = Some(BreakDeductionRules {
            lunch_after_hours: dec("6"),
            extended_after_hours: dec("10"),
        });

        let result = calculate_break_deduction(dec("3"), DayType::Regular, &config, 1);

        assert_eq!(result.deducted_hours, dec("0.5"));
        assert_eq!(result.audit_step.input["lunch_after_hours"], "6");
    }

    #[test]
    fn test_tea_break_is_never_deducted() {
        let mut config = default_company_configuration("Acme", 10);
        config.working_schedule.tea_break_minutes = 60;

        let result = calculate_break_deduction(dec("12"), DayType::Sunday, &config, 1);

        assert_eq!(result.deducted_hours, dec("1"));
    }
}
