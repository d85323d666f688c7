//! Meal allowance calculation.

use rust_decimal::Decimal;

use crate::config::CompanyConfiguration;
use crate::models::AuditStep;

use super::round_money;

/// The meal allowance for one shift.
#[derive(Debug, Clone)]
pub struct MealAllowanceResult {
    /// The allowance paid, zero when the shift does not qualify.
    pub amount: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Calculates the flat meal allowance for a shift.
///
/// The allowance is paid when it is enabled and the clocked hours (before
/// break deductions) reach `minimum_hours`.
pub fn calculate_meal_allowance(
    total_hours: Decimal,
    config: &CompanyConfiguration,
    step_number: u32,
) -> MealAllowanceResult {
    let meal = &config.meal_allowance;

    let (amount, reasoning) = if !meal.enabled {
        (Decimal::ZERO, "Meal allowance is disabled".to_string())
    } else if total_hours >= meal.minimum_hours {
        (
            round_money(meal.amount),
            format!(
                "{} hours meets the {} hour minimum: {} paid",
                total_hours.normalize(),
                meal.minimum_hours.normalize(),
                round_money(meal.amount)
            ),
        )
    } else {
        (
            Decimal::ZERO,
            format!(
                "{} hours is below the {} hour minimum",
                total_hours.normalize(),
                meal.minimum_hours.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "meal_allowance".to_string(),
        rule_name: "Meal Allowance".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "enabled": meal.enabled,
            "minimum_hours": meal.minimum_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning,
    };

    MealAllowanceResult { amount, audit_step }
}
