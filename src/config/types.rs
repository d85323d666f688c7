//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed [`CompanyConfiguration`] and every
//! nested section. Sections deserialize with defaults so a configuration file
//! only needs to carry the values a company actually changed.

use chrono::{DateTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The working schedule of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingSchedule {
    /// Days of the week that are normally worked.
    pub working_days: Vec<Weekday>,
    /// Nominal hours in a working day.
    pub standard_hours_per_day: Decimal,
    /// Unpaid lunch break, in minutes.
    pub lunch_break_minutes: u32,
    /// Unpaid dinner break taken on extended shifts, in minutes.
    pub dinner_break_minutes: u32,
    /// Paid tea break, in minutes.
    pub tea_break_minutes: u32,
    /// Whether employees may start and finish at flexible times.
    pub flexible_time: bool,
}

impl Default for WorkingSchedule {
    fn default() -> Self {
        Self {
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
            standard_hours_per_day: Decimal::new(8, 0),
            lunch_break_minutes: 30,
            dinner_break_minutes: 30,
            tea_break_minutes: 15,
            flexible_time: false,
        }
    }
}

/// How the base salary converts to daily and hourly rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSalaryStructure {
    /// Monthly salary used when an employee carries no override.
    pub default_monthly_salary: Decimal,
    /// Divisor turning a monthly salary into a daily rate.
    pub working_days_per_month: Decimal,
    /// Divisor turning a daily rate into an hourly rate.
    pub standard_working_hours: Decimal,
    /// ISO currency code (e.g. "MUR").
    pub currency: String,
    /// Symbol used in rate labels (e.g. "Rs").
    pub currency_symbol: String,
}

impl Default for BaseSalaryStructure {
    fn default() -> Self {
        Self {
            default_monthly_salary: Decimal::new(17710, 0),
            working_days_per_month: Decimal::new(26, 0),
            standard_working_hours: Decimal::new(8, 0),
            currency: "MUR".to_string(),
            currency_symbol: "Rs".to_string(),
        }
    }
}

/// The four overtime tiers a company can configure.
///
/// The set is closed: every tier always exists in [`OvertimeRules`] and can
/// only be switched on or off.
///
/// # Example
///
/// ```
/// use payroll_engine::config::OvertimeTier;
///
/// assert_eq!(OvertimeTier::Double.key(), "ot2_0");
/// assert_eq!(OvertimeTier::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeTier {
    /// Straight time (1.0x), used for a part-time employee's weekday off.
    Single,
    /// Time and a half (1.5x), used for weekday hours beyond the standard day.
    TimeAndHalf,
    /// Double time (2.0x), used for Sundays and public holidays.
    Double,
    /// Triple time (3.0x), used for extended Sunday and holiday shifts.
    Triple,
}

impl OvertimeTier {
    /// Every tier, in ascending multiplier order.
    pub const ALL: [OvertimeTier; 4] = [
        OvertimeTier::Single,
        OvertimeTier::TimeAndHalf,
        OvertimeTier::Double,
        OvertimeTier::Triple,
    ];

    /// The configuration key of this tier.
    pub fn key(&self) -> &'static str {
        match self {
            OvertimeTier::Single => "ot1_0",
            OvertimeTier::TimeAndHalf => "ot1_5",
            OvertimeTier::Double => "ot2_0",
            OvertimeTier::Triple => "ot3_0",
        }
    }

    /// Short label used in rate descriptions (e.g. "OT 1.5").
    pub fn label(&self) -> &'static str {
        match self {
            OvertimeTier::Single => "OT 1.0",
            OvertimeTier::TimeAndHalf => "OT 1.5",
            OvertimeTier::Double => "OT 2.0",
            OvertimeTier::Triple => "OT 3.0",
        }
    }
}

impl std::fmt::Display for OvertimeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calendar conditions that activate an overtime tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeTrigger {
    /// Hours beyond the standard day on a regular weekday.
    WeekdayOvertime,
    /// A part-time employee's designated weekday off.
    WeekdayOff,
    /// Work on a Sunday.
    Sunday,
    /// Work on a public holiday.
    PublicHoliday,
    /// Emergency call-outs.
    Emergency,
}

/// The settings of a single overtime tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeTierRule {
    /// Whether the tier pays out; disabled tiers fall back to the regular rate.
    pub enabled: bool,
    /// Hourly amount paid for hours in this tier.
    pub rate: Decimal,
    /// Human description shown on payslips.
    #[serde(default)]
    pub description: String,
    /// Calendar conditions that activate the tier.
    #[serde(default)]
    pub triggers: Vec<OvertimeTrigger>,
}

impl OvertimeTierRule {
    fn new(rate: Decimal, description: &str, triggers: Vec<OvertimeTrigger>) -> Self {
        Self {
            enabled: true,
            rate,
            description: description.to_string(),
            triggers,
        }
    }
}

/// The overtime tier set of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeRules {
    /// Straight-time tier.
    pub ot1_0: OvertimeTierRule,
    /// Time-and-a-half tier.
    pub ot1_5: OvertimeTierRule,
    /// Double-time tier.
    pub ot2_0: OvertimeTierRule,
    /// Triple-time tier.
    pub ot3_0: OvertimeTierRule,
}

impl OvertimeRules {
    /// Returns the rule configured for `tier`.
    pub fn tier(&self, tier: OvertimeTier) -> &OvertimeTierRule {
        match tier {
            OvertimeTier::Single => &self.ot1_0,
            OvertimeTier::TimeAndHalf => &self.ot1_5,
            OvertimeTier::Double => &self.ot2_0,
            OvertimeTier::Triple => &self.ot3_0,
        }
    }

    /// Returns a mutable reference to the rule configured for `tier`.
    pub fn tier_mut(&mut self, tier: OvertimeTier) -> &mut OvertimeTierRule {
        match tier {
            OvertimeTier::Single => &mut self.ot1_0,
            OvertimeTier::TimeAndHalf => &mut self.ot1_5,
            OvertimeTier::Double => &mut self.ot2_0,
            OvertimeTier::Triple => &mut self.ot3_0,
        }
    }

    /// Returns the rate of `tier` if it is enabled.
    pub fn enabled_rate(&self, tier: OvertimeTier) -> Option<Decimal> {
        let rule = self.tier(tier);
        rule.enabled.then_some(rule.rate)
    }

    /// Iterates over every tier and its rule.
    pub fn iter(&self) -> impl Iterator<Item = (OvertimeTier, &OvertimeTierRule)> {
        OvertimeTier::ALL.into_iter().map(move |t| (t, self.tier(t)))
    }
}

impl Default for OvertimeRules {
    fn default() -> Self {
        Self {
            ot1_0: OvertimeTierRule::new(
                Decimal::new(85, 0),
                "Weekday off for part-time staff",
                vec![OvertimeTrigger::WeekdayOff],
            ),
            ot1_5: OvertimeTierRule::new(
                Decimal::new(128, 0),
                "Weekday overtime",
                vec![OvertimeTrigger::WeekdayOvertime],
            ),
            ot2_0: OvertimeTierRule::new(
                Decimal::new(170, 0),
                "Sunday and public holiday",
                vec![OvertimeTrigger::Sunday, OvertimeTrigger::PublicHoliday],
            ),
            ot3_0: OvertimeTierRule::new(
                Decimal::new(255, 0),
                "Extended Sunday and public holiday",
                vec![
                    OvertimeTrigger::Sunday,
                    OvertimeTrigger::PublicHoliday,
                    OvertimeTrigger::Emergency,
                ],
            ),
        }
    }
}

/// Flat meal allowance paid on long shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealAllowance {
    /// Whether the allowance is paid.
    pub enabled: bool,
    /// Flat amount per qualifying shift.
    pub amount: Decimal,
    /// Minimum worked hours (before break deductions) to qualify.
    pub minimum_hours: Decimal,
}

impl Default for MealAllowance {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: Decimal::new(100, 0),
            minimum_hours: Decimal::new(10, 0),
        }
    }
}

/// Transport allowance paid over a pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportAllowance {
    /// Whether the allowance is paid.
    pub enabled: bool,
    /// Amount per worked day, or per period when `per_working_day` is false.
    pub amount: Decimal,
    /// Whether the amount is paid for every worked day.
    pub per_working_day: bool,
}

impl Default for TransportAllowance {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: Decimal::ZERO,
            per_working_day: true,
        }
    }
}

/// A leave type offered by the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Short identifier (e.g. "annual").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Whether the leave is paid.
    pub paid: bool,
    /// Days granted per year.
    #[serde(default)]
    pub annual_entitlement_days: Decimal,
}

/// How unpaid leave turns into a salary deduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnpaidLeaveCalculation {
    /// Divisor turning the monthly base into a daily rate.
    pub divisor_days: Decimal,
    /// Whether the monthly meal allowance is part of the base.
    pub include_allowances: bool,
    /// Carried for the settings screen; the deduction does not branch on it.
    pub include_overtime: bool,
}

impl Default for UnpaidLeaveCalculation {
    fn default() -> Self {
        Self {
            divisor_days: Decimal::new(26, 0),
            include_allowances: false,
            include_overtime: false,
        }
    }
}

/// Leave catalog and unpaid leave settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveManagement {
    /// Leave types offered by the company.
    pub leave_types: Vec<LeaveType>,
    /// Unpaid leave deduction settings.
    pub unpaid_leave_calculation: UnpaidLeaveCalculation,
}

impl Default for LeaveManagement {
    fn default() -> Self {
        let leave = |code: &str, name: &str, paid: bool, days: i64| LeaveType {
            code: code.to_string(),
            name: name.to_string(),
            paid,
            annual_entitlement_days: Decimal::new(days, 0),
        };
        Self {
            leave_types: vec![
                leave("annual", "Annual Leave", true, 20),
                leave("sick", "Sick Leave", true, 15),
                leave("unpaid", "Unpaid Leave", false, 0),
            ],
            unpaid_leave_calculation: UnpaidLeaveCalculation::default(),
        }
    }
}

/// Shift-length thresholds that decide which breaks are unpaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakDeductionRules {
    /// Hours after which the lunch break is deducted.
    ///
    /// Informational only: it is recorded in the break deduction audit step,
    /// but lunch is deducted from every shift regardless of its length.
    pub lunch_after_hours: Decimal,
    /// Hours after which the dinner break is also deducted on Sundays and holidays.
    pub extended_after_hours: Decimal,
}

/// Attendance capture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceSettings {
    /// Whether punches must be made inside a geofence.
    pub geofencing_enabled: bool,
    /// Geofence radius in meters.
    pub geofence_radius_meters: u32,
    /// Whether a photo is required at each punch.
    pub require_photo: bool,
    /// Minutes of lateness tolerated before a punch is flagged.
    pub grace_period_minutes: u32,
    /// Break thresholds; derived from the salary structure when absent.
    pub break_deduction_rules: Option<BreakDeductionRules>,
}

impl Default for AttendanceSettings {
    fn default() -> Self {
        Self {
            geofencing_enabled: false,
            geofence_radius_meters: 100,
            require_photo: false,
            grace_period_minutes: 15,
            break_deduction_rules: None,
        }
    }
}

/// Capability toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Apply Mauritius statutory contributions and overtime limits.
    pub mauritius_compliance: bool,
    /// Track overtime hours.
    pub overtime_tracking: bool,
    /// Enable the leave module.
    pub leave_management: bool,
    /// Enable geofenced punches.
    pub geofencing: bool,
    /// Enable photo capture at punch time.
    pub photo_capture: bool,
    /// Enable payroll exports.
    pub payroll_export: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            mauritius_compliance: false,
            overtime_tracking: true,
            leave_management: true,
            geofencing: false,
            photo_capture: false,
            payroll_export: true,
        }
    }
}

/// A single statutory contribution rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRate {
    /// Whether the contribution is levied.
    pub enabled: bool,
    /// Percentage of gross salary.
    pub rate: Decimal,
}

impl ContributionRate {
    /// Creates an enabled contribution at `rate` percent.
    pub fn percent(rate: Decimal) -> Self {
        Self {
            enabled: true,
            rate,
        }
    }

    /// Creates a disabled contribution.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            rate: Decimal::ZERO,
        }
    }
}

/// The seven Mauritius payroll contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Employee National Pensions Fund share.
    pub employee_npf: ContributionRate,
    /// Employee National Solidarity Fund share.
    pub employee_nsf: ContributionRate,
    /// Employee Contribution Sociale Généralisée share.
    pub employee_csg: ContributionRate,
    /// Employer National Pensions Fund share.
    pub employer_npf: ContributionRate,
    /// Employer National Solidarity Fund share.
    pub employer_nsf: ContributionRate,
    /// Employer Contribution Sociale Généralisée share.
    pub employer_csg: ContributionRate,
    /// Employer training levy.
    pub training_levy: ContributionRate,
}

/// Legal overtime caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeLimits {
    /// Maximum overtime hours in a week.
    pub max_overtime_per_week: Decimal,
    /// Whether the cap is applied to calculated pay.
    pub enforce_compliance: bool,
}

/// Mauritius statutory settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MauritiusSettings {
    /// Contribution rates.
    pub contributions: ContributionRates,
    /// Overtime caps.
    pub overtime_limits: OvertimeLimits,
}

impl Default for MauritiusSettings {
    fn default() -> Self {
        Self {
            contributions: ContributionRates {
                employee_npf: ContributionRate::percent(Decimal::new(3, 0)),
                employee_nsf: ContributionRate::percent(Decimal::new(1, 0)),
                employee_csg: ContributionRate::percent(Decimal::new(15, 1)),
                employer_npf: ContributionRate::percent(Decimal::new(6, 0)),
                employer_nsf: ContributionRate::percent(Decimal::new(25, 1)),
                employer_csg: ContributionRate::percent(Decimal::new(3, 0)),
                training_levy: ContributionRate::percent(Decimal::new(15, 1)),
            },
            overtime_limits: OvertimeLimits {
                max_overtime_per_week: Decimal::new(10, 0),
                enforce_compliance: false,
            },
        }
    }
}

/// Language and regional formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localization {
    /// UI language code.
    pub language: String,
    /// IANA timezone of the company.
    pub timezone: String,
    /// strftime-style date format.
    pub date_format: String,
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "Indian/Mauritius".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

/// Value type of a company-defined employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    /// Free text.
    Text,
    /// Numeric value.
    Number,
    /// Calendar date.
    Date,
    /// Yes/no flag.
    Boolean,
}

/// A company-defined employee field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// Storage key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Value type.
    pub field_type: CustomFieldType,
    /// Whether a value is mandatory.
    #[serde(default)]
    pub required: bool,
}

/// Approval workflow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflows {
    /// Whether leave requests need approval.
    pub leave_approval_required: bool,
    /// Whether overtime needs approval.
    pub overtime_approval_required: bool,
    /// Overtime below this many hours is approved automatically.
    pub auto_approve_below_hours: Option<Decimal>,
}

impl Default for Workflows {
    fn default() -> Self {
        Self {
            leave_approval_required: true,
            overtime_approval_required: false,
            auto_approve_below_hours: None,
        }
    }
}

/// The complete configuration of one company.
///
/// A configuration is never edited in place by the calculator: settings
/// screens build a new value and hand it to the registry, which replaces
/// the calculator wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfiguration {
    /// Unique identifier of the configuration.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Company display name.
    pub company_name: String,
    /// Headcount at setup time.
    #[serde(default)]
    pub employee_count: u32,
    /// When the configuration was first created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the configuration was last saved.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    /// Who created the configuration.
    #[serde(default)]
    pub created_by: String,
    /// Working schedule.
    #[serde(default)]
    pub working_schedule: WorkingSchedule,
    /// Salary structure.
    #[serde(default)]
    pub base_salary_structure: BaseSalaryStructure,
    /// Overtime tiers.
    #[serde(default)]
    pub overtime_rules: OvertimeRules,
    /// Meal allowance.
    #[serde(default)]
    pub meal_allowance: MealAllowance,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: TransportAllowance,
    /// Leave catalog and unpaid leave settings.
    #[serde(default)]
    pub leave_management: LeaveManagement,
    /// Attendance capture settings.
    #[serde(default)]
    pub attendance_settings: AttendanceSettings,
    /// Capability toggles.
    #[serde(default)]
    pub features: Features,
    /// Mauritius statutory settings.
    #[serde(default)]
    pub mauritius_settings: Option<MauritiusSettings>,
    /// Regional formats.
    #[serde(default)]
    pub localization: Localization,
    /// Company-defined employee fields.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    /// Approval workflows.
    #[serde(default)]
    pub workflows: Workflows,
}

impl CompanyConfiguration {
    /// Returns the break thresholds in force.
    ///
    /// When the attendance settings carry no rules, the lunch threshold is
    /// the standard working day and the extended threshold two hours later.
    pub fn break_deduction_rules(&self) -> BreakDeductionRules {
        self.attendance_settings
            .break_deduction_rules
            .clone()
            .unwrap_or_else(|| {
                let standard = self.base_salary_structure.standard_working_hours;
                BreakDeductionRules {
                    lunch_after_hours: standard,
                    extended_after_hours: standard + Decimal::new(2, 0),
                }
            })
    }

    /// Returns the Mauritius settings when compliance is switched on.
    pub fn active_mauritius_settings(&self) -> Option<&MauritiusSettings> {
        if self.features.mauritius_compliance {
            self.mauritius_settings.as_ref()
        } else {
            None
        }
    }
}
