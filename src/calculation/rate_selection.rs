//! Rate selection for a shift.
//!
//! This module splits a shift's paid hours between the regular hourly rate
//! and the configured overtime tiers.
//!
//! ## Rules
//!
//! **Sunday, public holiday or part-time weekday off:**
//! - Weekday off: all paid hours at OT 1.0
//! - Up to the standard day: all paid hours at OT 2.0
//! - Beyond the standard day: the standard day (less lunch) at OT 2.0 and
//!   the rest (less any dinner break) at OT 3.0
//!
//! **Regular day:**
//! - Up to the standard day: all paid hours at the regular rate
//! - Beyond the standard day: the standard day (less lunch) at the regular
//!   rate and the rest at OT 1.5
//!
//! A disabled tier's hours are paid at the regular rate instead.

use rust_decimal::Decimal;

use crate::config::{CompanyConfiguration, OvertimeTier};
use crate::models::AuditStep;

use super::{BreakDeduction, DayType, round_money};

/// Hours paid at one overtime tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHours {
    /// The tier the hours are paid at.
    pub tier: OvertimeTier,
    /// Paid hours in the tier.
    pub hours: Decimal,
    /// The tier's hourly rate.
    pub rate: Decimal,
}

impl TierHours {
    /// Unrounded amount for these hours.
    pub fn amount(&self) -> Decimal {
        self.hours * self.rate
    }
}

/// How a shift's paid hours are priced.
#[derive(Debug, Clone)]
pub struct RateSelection {
    /// Hours paid at the regular hourly rate.
    pub regular_hours: Decimal,
    /// Hours paid at overtime tiers, in tier order.
    pub tier_hours: Vec<TierHours>,
    /// Payslip label describing which rates applied.
    pub ot_rate: String,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

impl RateSelection {
    /// Total hours paid at overtime tiers.
    pub fn overtime_hours(&self) -> Decimal {
        self.tier_hours.iter().map(|t| t.hours).sum()
    }

    /// Unrounded total of all overtime tier amounts.
    pub fn overtime_amount(&self) -> Decimal {
        self.tier_hours.iter().map(TierHours::amount).sum()
    }
}

fn non_negative(hours: Decimal) -> Decimal {
    hours.max(Decimal::ZERO)
}

struct Plan {
    regular_hours: Decimal,
    tier_hours: Vec<TierHours>,
    disabled: Vec<OvertimeTier>,
}

impl Plan {
    fn regular(hours: Decimal, disabled: Vec<OvertimeTier>) -> Self {
        Self {
            regular_hours: hours,
            tier_hours: Vec::new(),
            disabled,
        }
    }

    fn tiers(regular_hours: Decimal, tier_hours: Vec<TierHours>) -> Self {
        Self {
            regular_hours,
            tier_hours,
            disabled: Vec::new(),
        }
    }
}

pub(crate) fn rate_label(name: &str, symbol: &str, rate: Decimal) -> String {
    format!("{} @ {} {:.2}/hr", name, symbol, round_money(rate))
}

fn describe(plan: &Plan, hourly_rate: Decimal, symbol: &str) -> String {
    let mut parts = Vec::new();
    if plan.regular_hours > Decimal::ZERO || plan.tier_hours.is_empty() {
        parts.push(rate_label("Regular", symbol, hourly_rate));
    }
    for tier in &plan.tier_hours {
        parts.push(rate_label(tier.tier.label(), symbol, tier.rate));
    }

    let mut label = parts.join(" + ");
    if !plan.disabled.is_empty() {
        let disabled: Vec<&str> = plan.disabled.iter().map(|t| t.label()).collect();
        label.push_str(&format!(" ({} disabled)", disabled.join(", ")));
    }
    label
}

/// Splits a shift's paid hours between the regular rate and overtime tiers.
///
/// # Arguments
///
/// * `total_hours` - Clocked hours before break deductions
/// * `day_type` - The classified day of the shift
/// * `breaks` - The unpaid break time for the shift
/// * `hourly_rate` - The employee's regular hourly rate
/// * `config` - The company configuration (standard hours and tiers)
/// * `step_number` - The step number for audit trail sequencing
///
/// Every hour bucket is clamped at zero, so regular plus overtime hours
/// never exceed the clocked hours.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_break_deduction, select_rates, DayType};
/// use payroll_engine::config::{default_company_configuration, OvertimeTier};
/// use rust_decimal::Decimal;
///
/// let config = default_company_configuration("Acme", 10);
/// let total = Decimal::new(10, 0);
/// let breaks = calculate_break_deduction(total, DayType::Regular, &config, 1);
///
/// let selection = select_rates(total, DayType::Regular, &breaks, Decimal::new(100, 0), &config, 2);
///
/// assert_eq!(selection.regular_hours, Decimal::new(75, 1));
/// assert_eq!(selection.tier_hours[0].tier, OvertimeTier::TimeAndHalf);
/// assert_eq!(selection.tier_hours[0].hours, Decimal::new(2, 0));
/// ```
pub fn select_rates(
    total_hours: Decimal,
    day_type: DayType,
    breaks: &BreakDeduction,
    hourly_rate: Decimal,
    config: &CompanyConfiguration,
    step_number: u32,
) -> RateSelection {
    let standard = config.base_salary_structure.standard_working_hours;
    let rules = &config.overtime_rules;

    let paid_hours = non_negative(total_hours - breaks.deducted_hours);
    let standard_portion = non_negative(standard - breaks.lunch_hours);
    let excess_portion = non_negative(total_hours - standard - breaks.extra_hours());

    let single = |tier: OvertimeTier, rate: Decimal| {
        Plan::tiers(
            Decimal::ZERO,
            vec![TierHours {
                tier,
                hours: paid_hours,
                rate,
            }],
        )
    };

    let plan = match day_type {
        DayType::WeekdayOff => match rules.enabled_rate(OvertimeTier::Single) {
            Some(rate) => single(OvertimeTier::Single, rate),
            None => Plan::regular(paid_hours, vec![OvertimeTier::Single]),
        },
        DayType::Sunday | DayType::PublicHoliday if total_hours <= standard => {
            match rules.enabled_rate(OvertimeTier::Double) {
                Some(rate) => single(OvertimeTier::Double, rate),
                None => Plan::regular(paid_hours, vec![OvertimeTier::Double]),
            }
        }
        DayType::Sunday | DayType::PublicHoliday => {
            match (
                rules.enabled_rate(OvertimeTier::Double),
                rules.enabled_rate(OvertimeTier::Triple),
            ) {
                (Some(double), Some(triple)) => Plan::tiers(
                    Decimal::ZERO,
                    vec![
                        TierHours {
                            tier: OvertimeTier::Double,
                            hours: standard_portion,
                            rate: double,
                        },
                        TierHours {
                            tier: OvertimeTier::Triple,
                            hours: excess_portion,
                            rate: triple,
                        },
                    ],
                ),
                (Some(double), None) => Plan {
                    disabled: vec![OvertimeTier::Triple],
                    ..single(OvertimeTier::Double, double)
                },
                (None, _) => Plan::regular(
                    paid_hours,
                    vec![OvertimeTier::Double, OvertimeTier::Triple],
                ),
            }
        }
        DayType::Regular if total_hours <= standard => Plan::regular(paid_hours, Vec::new()),
        DayType::Regular => match rules.enabled_rate(OvertimeTier::TimeAndHalf) {
            Some(rate) => Plan::tiers(
                standard_portion,
                vec![TierHours {
                    tier: OvertimeTier::TimeAndHalf,
                    hours: excess_portion,
                    rate,
                }],
            ),
            None => Plan::regular(paid_hours, vec![OvertimeTier::TimeAndHalf]),
        },
    };

    let ot_rate = describe(
        &plan,
        hourly_rate,
        &config.base_salary_structure.currency_symbol,
    );

    let tiers_json: Vec<serde_json::Value> = plan
        .tier_hours
        .iter()
        .map(|t| {
            serde_json::json!({
                "tier": t.tier.key(),
                "hours": t.hours.normalize().to_string(),
                "rate": t.rate.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_selection".to_string(),
        rule_name: "Rate Selection".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "day_type": day_type,
            "standard_working_hours": standard.normalize().to_string(),
            "deducted_hours": breaks.deducted_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": plan.regular_hours.normalize().to_string(),
            "tiers": tiers_json,
            "disabled_tiers": plan.disabled.iter().map(|t| t.key()).collect::<Vec<_>>()
        }),
        reasoning: format!("{} shift: {}", day_type, ot_rate),
    };

    RateSelection {
        regular_hours: plan.regular_hours,
        tier_hours: plan.tier_hours,
        ot_rate,
        audit_step,
    }
}
