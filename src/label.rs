//! Formatting of selected values into scrub labels.

use std::sync::Arc;

/// Formatter for the scrub readout label.
///
/// The label also drives callback dedupe: a drag update only notifies the
/// host when the formatted label changes.
#[derive(Clone, Default)]
pub enum ValueFormatter {
    /// Currency-style `"$ <value>"` label.
    #[default]
    Currency,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl ValueFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Currency => format!("$ {value}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Currency => write!(f, "ValueFormatter::Currency"),
            Self::Custom(_) => write!(f, "ValueFormatter::Custom(..)"),
        }
    }
}
