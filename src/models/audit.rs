//! Audit trail records.
//!
//! Every calculation records the rules it applied as [`AuditStep`]s so a
//! payslip can show how each amount was reached.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "rate_derivation".to_string(),
///     rule_name: "Rate Derivation".to_string(),
///     input: serde_json::json!({"monthly_salary": "17710"}),
///     output: serde_json::json!({"hourly_rate": "85.14"}),
///     reasoning: "17710 / 26 days / 8 hours".to_string(),
/// };
/// assert_eq!(step.rule_id, "rate_derivation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 3,
            rule_id: "meal_allowance".to_string(),
            rule_name: "Meal Allowance".to_string(),
            input: serde_json::json!({"total_hours": "10.5"}),
            output: serde_json::json!({"amount": "100"}),
            reasoning: "10.5 hours meets the 10 hour minimum".to_string(),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["step_number"], 3);
        assert_eq!(json["rule_id"], "meal_allowance");
        assert_eq!(json["input"]["total_hours"], "10.5");
    }
}
