//! Cache configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of entries when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 1024;

/// Construction-time settings for [`LruList`](crate::LruList)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries held before the least recently used one is replaced
    pub capacity: usize,
}

impl CacheConfig {
    /// Create a config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject settings that would produce an unusable cache
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_zero_capacity() {
        let config = CacheConfig::new(0);
        assert!(matches!(config.validate(), Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_config_from_json() {
        let config: CacheConfig = serde_json::from_str(r#"{"capacity": 64}"#).unwrap();
        assert_eq!(config, CacheConfig::new(64));

        // Missing fields fall back to defaults
        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let json = serde_json::to_string(&CacheConfig::new(8)).unwrap();
        assert_eq!(json, r#"{"capacity":8}"#);
    }
}
