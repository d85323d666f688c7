//! Industry configuration templates.
//!
//! A fixed catalog of presets (construction, delivery, manufacturing,
//! retail, services and a Mauritius standard default) and the merge that
//! turns a preset plus a company identity into a complete
//! [`CompanyConfiguration`](crate::config::CompanyConfiguration).

mod catalog;
mod merge;

pub use catalog::{Industry, IndustryTemplate, find_template, industry_templates};
pub use merge::{MERGED_SECTIONS, create_company_config_from_template};
