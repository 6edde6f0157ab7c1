//! Configuration types for the enumeration search.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default ceiling on sowing passes within a single move
pub const DEFAULT_RELAY_LIMIT: usize = 1_000;

/// Default ceiling on the number of attempts a search may produce
pub const DEFAULT_ATTEMPT_LIMIT: usize = 1_000_000;

/// Configuration for running the enumeration.
///
/// Both limits are sanity ceilings. From the opening layout the longest relay
/// chain is 24 passes and the search yields 26,242 attempts, so the defaults
/// are never reached by a correct engine.
///
/// # Examples
///
/// ```
/// use mancala::app::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_relay_limit(64)
///     .with_attempt_limit(30_000);
/// assert_eq!(config.relay_limit, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum sowing passes (first pass plus relays) for one move
    pub relay_limit: usize,
    /// Maximum attempts before the search is aborted
    pub attempt_limit: usize,
}

impl SearchConfig {
    /// Create a configuration with the default limits.
    pub fn new() -> Self {
        Self {
            relay_limit: DEFAULT_RELAY_LIMIT,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }

    /// Set the relay ceiling.
    pub fn with_relay_limit(mut self, limit: usize) -> Self {
        self.relay_limit = limit;
        self
    }

    /// Set the attempt ceiling.
    pub fn with_attempt_limit(mut self, limit: usize) -> Self {
        self.attempt_limit = limit;
        self
    }

    /// Check that both limits allow at least one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.relay_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "relay limit must be at least 1".to_string(),
            });
        }
        if self.attempt_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "attempt limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limits_are_rejected() {
        assert!(SearchConfig::new().validate().is_ok());
        assert!(matches!(
            SearchConfig::new().with_relay_limit(0).validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            SearchConfig::new().with_attempt_limit(0).validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
