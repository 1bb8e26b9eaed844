//! Error types for lrulist

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a caller-supplied callback (eviction or traversal)
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for cache operations
#[derive(Debug)]
pub enum Error {
    /// Key not present in the cache
    KeyNotFound,

    /// Eviction callback rejected the displaced value; the cache is unchanged
    EvictionFailed(CallbackError),

    /// Traversal callback stopped the walk
    VisitAborted(CallbackError),

    /// Capacity must be at least one entry
    InvalidCapacity(usize),
}

impl Error {
    /// Extract the callback failure carried by this error, if any
    pub fn into_callback_error(self) -> Option<CallbackError> {
        match self {
            Error::EvictionFailed(e) | Error::VisitAborted(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "Key not found"),
            Error::EvictionFailed(e) => write!(f, "Eviction failed: {}", e),
            Error::VisitAborted(e) => write!(f, "Traversal aborted: {}", e),
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", cap)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EvictionFailed(e) | Error::VisitAborted(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        assert_eq!(Error::KeyNotFound.to_string(), "Key not found");
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be at least 1)"
        );

        let err = Error::EvictionFailed("handle busy".into());
        assert_eq!(err.to_string(), "Eviction failed: handle busy");
    }

    #[test]
    fn test_source_preserves_callback_error() {
        let err = Error::VisitAborted("stop".into());
        assert_eq!(err.source().unwrap().to_string(), "stop");
        assert!(Error::KeyNotFound.source().is_none());

        let inner = err.into_callback_error().unwrap();
        assert_eq!(inner.to_string(), "stop");
    }
}
