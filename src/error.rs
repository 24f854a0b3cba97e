//! Error types for chart rendering

use thiserror::Error;

/// Errors that can occur while rendering a chart
///
/// Bar and line charts degrade gracefully on any input; only pie charts can
/// reject their data, since slice angles are undefined without a positive
/// total.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Pie chart values sum to zero
    #[error("pie chart values sum to zero, slice angles are undefined")]
    ZeroTotal,

    /// Pie chart value that cannot be drawn as a slice
    #[error("invalid value {value} for pie slice '{label}': values must be finite and non-negative")]
    InvalidSliceValue { label: String, value: f64 },
}

impl ChartError {
    /// Create an invalid slice value error
    pub fn invalid_slice(label: impl Into<String>, value: f64) -> Self {
        Self::InvalidSliceValue {
            label: label.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_display() {
        assert!(ChartError::ZeroTotal.to_string().contains("sum to zero"));
    }

    #[test]
    fn test_invalid_slice_display() {
        let err = ChartError::invalid_slice("Rent", -12.5);
        let msg = err.to_string();
        assert!(msg.contains("Rent"));
        assert!(msg.contains("-12.5"));
    }
}
