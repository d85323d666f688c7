//! The active calculator for call sites that do not carry one.
//!
//! New code should build a [`PayrollCalculator`] and pass it where it is
//! needed. [`CalculatorRegistry`] exists for code that only knows "the
//! current company": it holds the calculator for the active configuration
//! and swaps it wholesale whenever the configuration is saved.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{info, warn};

use crate::calculation::PayrollCalculator;
use crate::config::{CompanyConfiguration, fallback_configuration};
use crate::error::EngineResult;

/// Holds the calculator bound to the active company configuration.
///
/// Replacing the calculator is a single pointer swap under a write lock, so
/// a reader always sees either the previous calculator or the new one in
/// full.
///
/// # Example
///
/// ```
/// use payroll_engine::config::default_company_configuration;
/// use payroll_engine::registry::CalculatorRegistry;
///
/// let registry = CalculatorRegistry::new();
/// registry.initialize(default_company_configuration("Acme", 10)).unwrap();
///
/// assert_eq!(registry.current().config().company_name, "Acme");
/// ```
#[derive(Debug, Default)]
pub struct CalculatorRegistry {
    current: RwLock<Option<Arc<PayrollCalculator>>>,
}

impl CalculatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `config` and makes it the active configuration.
    ///
    /// Any previous calculator is replaced; callers still holding it keep
    /// calculating against the old configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidConfiguration`] when the
    /// configuration fails validation. The active calculator is unchanged.
    pub fn initialize(&self, config: CompanyConfiguration) -> EngineResult<Arc<PayrollCalculator>> {
        let calculator = Arc::new(PayrollCalculator::new(config)?);

        info!(
            config_id = %calculator.config().id,
            company_name = %calculator.config().company_name,
            "Payroll calculator initialized"
        );

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&calculator));

        Ok(calculator)
    }

    /// Returns the active calculator.
    ///
    /// If no configuration was ever set, a calculator is built from the
    /// fallback configuration, installed, and a warning is logged.
    pub fn current(&self) -> Arc<PayrollCalculator> {
        if let Some(calculator) = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(calculator);
        }

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have installed one while we waited.
        if let Some(calculator) = slot.as_ref() {
            return Arc::clone(calculator);
        }

        warn!("Payroll calculator requested before initialization; using fallback configuration");
        let calculator = Arc::new(PayrollCalculator::from_trusted(fallback_configuration()));
        *slot = Some(Arc::clone(&calculator));
        calculator
    }

    /// Returns true once a calculator has been installed.
    pub fn is_initialized(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Returns the process-wide registry used by [`crate::legacy`].
pub fn global() -> &'static CalculatorRegistry {
    static GLOBAL: OnceLock<CalculatorRegistry> = OnceLock::new();
    GLOBAL.get_or_init(CalculatorRegistry::new)
}
