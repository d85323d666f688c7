//! The built-in industry template catalog.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The industry a template is tailored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// Building and civil works.
    Construction,
    /// Delivery and logistics.
    Delivery,
    /// Factories and production lines.
    Manufacturing,
    /// Shops and stores.
    Retail,
    /// Offices and professional services.
    Services,
    /// Not tied to one industry.
    General,
}

/// A named configuration preset.
///
/// `configuration` is a partial configuration: a mapping from section name
/// (`overtime_rules`, `meal_allowance`, ...) to the values the preset sets
/// in that section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryTemplate {
    /// Catalog identifier (e.g. "construction").
    pub id: String,
    /// Display name.
    pub name: String,
    /// The industry the preset targets.
    pub industry: Industry,
    /// What the preset sets up.
    pub description: String,
    /// The partial configuration merged over the baseline.
    pub configuration: serde_json::Value,
}

const TEMPLATE_SOURCES: [(&str, &str); 6] = [
    (
        "construction",
        include_str!("../../templates/construction.yaml"),
    ),
    ("delivery", include_str!("../../templates/delivery.yaml")),
    (
        "manufacturing",
        include_str!("../../templates/manufacturing.yaml"),
    ),
    ("retail", include_str!("../../templates/retail.yaml")),
    ("services", include_str!("../../templates/services.yaml")),
    (
        "mauritius_standard",
        include_str!("../../templates/mauritius_standard.yaml"),
    ),
];

fn parse_template(file: &str, content: &str) -> EngineResult<IndustryTemplate> {
    serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
        path: format!("templates/{}.yaml", file),
        message: e.to_string(),
    })
}

/// Returns every built-in template, in catalog order.
///
/// # Example
///
/// ```
/// use payroll_engine::templates::industry_templates;
///
/// let templates = industry_templates().unwrap();
/// assert_eq!(templates.len(), 6);
/// assert_eq!(templates[0].id, "construction");
/// ```
pub fn industry_templates() -> EngineResult<Vec<IndustryTemplate>> {
    TEMPLATE_SOURCES
        .iter()
        .map(|(file, content)| parse_template(file, content))
        .collect()
}

/// Looks up a built-in template by id.
///
/// # Errors
///
/// Returns [`EngineError::TemplateNotFound`] for an unknown id.
pub fn find_template(id: &str) -> EngineResult<IndustryTemplate> {
    let (file, content) = TEMPLATE_SOURCES
        .iter()
        .find(|(file, _)| *file == id)
        .ok_or_else(|| EngineError::TemplateNotFound { id: id.to_string() })?;
    parse_template(file, content)
}
