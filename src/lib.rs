//! Configurable payroll engine for Mauritius-style overtime rules
//!
//! This crate turns clock-in/clock-out punches into pay using a per-company
//! configuration: tiered overtime (OT 1.0, 1.5, 2.0 and 3.0), unpaid break
//! deductions, meal and transport allowances, unpaid leave deductions and
//! statutory NPF/NSF/CSG contributions with an optional weekly overtime cap.
//!
//! Configurations come from YAML ([`config::ConfigLoader`]) or from an
//! industry preset ([`templates::create_company_config_from_template`]) and
//! are bound to a [`calculation::PayrollCalculator`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod legacy;
pub mod models;
pub mod registry;
pub mod templates;
