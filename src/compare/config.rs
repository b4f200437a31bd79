use crate::core::{Result, TrunfoError};

/// Default relative tolerance for real valued attributes.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// What to do when exactly one side of a real valued comparison is not
/// finite (infinite density of a zero area card, for example).
///
/// Two non-finite values are always equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NonFinitePolicy {
    /// The non-finite value compares as the larger one. It loses a lower
    /// wins decision and wins a higher wins decision.
    #[default]
    Largest,
    /// The non-finite value loses whatever the win direction.
    AlwaysLoses,
}

/// Configuration for a [`super::Comparator`]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComparatorConfig {
    /// Values within `relative_tolerance * max(1, |a|, |b|)` are equal
    pub relative_tolerance: f64,
    pub non_finite_policy: NonFinitePolicy,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            non_finite_policy: NonFinitePolicy::default(),
        }
    }
}

impl ComparatorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relative_tolerance(mut self, relative_tolerance: f64) -> Self {
        self.relative_tolerance = relative_tolerance;
        self
    }

    pub fn with_non_finite_policy(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite_policy = policy;
        self
    }

    /// Validate the comparator configuration
    pub fn validate(&self) -> Result<()> {
        if !self.relative_tolerance.is_finite() || self.relative_tolerance < 0.0 {
            return Err(TrunfoError::InvalidConfig(format!(
                "relative_tolerance must be finite and non-negative, got {}",
                self.relative_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComparatorConfig::default();
        assert_eq!(1e-9, config.relative_tolerance);
        assert_eq!(NonFinitePolicy::Largest, config.non_finite_policy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_tolerance_is_valid() {
        let config = ComparatorConfig::new().with_relative_tolerance(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_tolerance() {
        for bad in [-1e-9, f64::NAN, f64::INFINITY] {
            let config = ComparatorConfig {
                relative_tolerance: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(TrunfoError::InvalidConfig(_))
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let json = r#"{"relative_tolerance": 0.001, "non_finite_policy": "AlwaysLoses"}"#;
        let config: ComparatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(0.001, config.relative_tolerance);
        assert_eq!(NonFinitePolicy::AlwaysLoses, config.non_finite_policy);
    }
}
