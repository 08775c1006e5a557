//! Application Configuration
//!
//! Configuration for the starstore application layer.

/// Default number of bounded retries per store write
const DEFAULT_WRITE_RETRIES: u32 = 2;

/// Starstore application configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// How many times a failed store write is retried before the item is
    /// reported as failed. Retries re-submit the already-constructed
    /// record, so a purchase id is never generated twice for one item.
    pub write_retries: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            write_retries: DEFAULT_WRITE_RETRIES,
        }
    }
}

impl StoreConfig {
    /// Config with retries disabled (a write failure is reported at once)
    pub fn without_retries() -> Self {
        Self { write_retries: 0 }
    }
}
