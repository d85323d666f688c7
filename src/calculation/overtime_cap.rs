//! Mauritius overtime compliance cap.
//!
//! When compliance is enforced, a shift's overtime hours are capped at a
//! fifth of the weekly legal maximum and the overtime pay is scaled down by
//! the same proportion.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CompanyConfiguration;
use crate::models::AuditStep;

/// Working days the weekly overtime cap is spread over.
pub const COMPLIANCE_DAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// The result of applying the overtime cap.
#[derive(Debug, Clone)]
pub struct OvertimeCapResult {
    /// Overtime hours after the cap.
    pub overtime_hours: Decimal,
    /// Unrounded overtime amount after proportional scaling.
    pub overtime_amount: Decimal,
    /// The daily cap that was applied.
    pub daily_cap_hours: Decimal,
    /// Note appended to the rate label.
    pub note: String,
    /// The audit step recording the cap.
    pub audit_step: AuditStep,
}

/// Returns the daily overtime cap when compliance is enforced.
pub fn daily_overtime_cap(config: &CompanyConfiguration) -> Option<Decimal> {
    let limits = &config.active_mauritius_settings()?.overtime_limits;
    limits
        .enforce_compliance
        .then(|| limits.max_overtime_per_week / COMPLIANCE_DAYS_PER_WEEK)
}

/// Caps a shift's overtime at the daily share of the weekly legal limit.
///
/// Returns `None` when compliance is not enforced, the shift has no
/// overtime, or it is already within the cap.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::apply_overtime_cap;
/// use payroll_engine::config::fallback_configuration;
/// use rust_decimal::Decimal;
///
/// let mut config = fallback_configuration();
/// if let Some(settings) = config.mauritius_settings.as_mut() {
///     settings.overtime_limits.enforce_compliance = true; // 10h/week -> 2h/day
/// }
///
/// let capped = apply_overtime_cap(Decimal::new(4, 0), Decimal::new(400, 0), &config, 1).unwrap();
/// assert_eq!(capped.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(capped.overtime_amount, Decimal::new(200, 0));
/// ```
pub fn apply_overtime_cap(
    overtime_hours: Decimal,
    overtime_amount: Decimal,
    config: &CompanyConfiguration,
    step_number: u32,
) -> Option<OvertimeCapResult> {
    let daily_cap_hours = daily_overtime_cap(config)?;
    if overtime_hours <= Decimal::ZERO || overtime_hours <= daily_cap_hours {
        return None;
    }

    let scaled_amount = overtime_amount * daily_cap_hours / overtime_hours;
    debug!(
        overtime_hours = %overtime_hours,
        daily_cap_hours = %daily_cap_hours,
        "Overtime capped for compliance"
    );

    let note = format!(
        "capped at {} OT hours/day for compliance",
        daily_cap_hours.normalize()
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_compliance_cap".to_string(),
        rule_name: "Overtime Compliance Cap".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_amount": overtime_amount.normalize().to_string(),
            "daily_cap_hours": daily_cap_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": daily_cap_hours.normalize().to_string(),
            "overtime_amount": scaled_amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} overtime hours exceed the daily cap of {}: pay scaled by {}/{}",
            overtime_hours.normalize(),
            daily_cap_hours.normalize(),
            daily_cap_hours.normalize(),
            overtime_hours.normalize()
        ),
    };

    Some(OvertimeCapResult {
        overtime_hours: daily_cap_hours,
        overtime_amount: scaled_amount,
        daily_cap_hours,
        note,
        audit_step,
    })
}
