mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::DatabaseError;

/// Returns `~/.config/tastelog[-dev]/` based on TASTELOG_ENV.
///
/// Set TASTELOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASTELOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tastelog-dev")
    } else {
        base_dir.join("tastelog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Key-value byte-store contract consumed by the application store.
///
/// Writes are best-effort and overwrite-on-write; there is no
/// transactionality. Values are opaque to the gateway -- the store keeps
/// them as self-describing JSON blobs.
pub trait Gateway {
    fn load(&self, key: &str) -> Result<Option<String>, DatabaseError>;
    fn save(&self, key: &str, value: &str) -> Result<(), DatabaseError>;
}

/// In-memory gateway. Used by tests and anywhere a throwaway store is
/// useful; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl Gateway for MemoryGateway {
    fn load(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_gateway_clones_share_entries() {
        let gateway = MemoryGateway::default();
        let clone = gateway.clone();
        gateway.save("k", "v").unwrap();
        assert_eq!(clone.load("k").unwrap().as_deref(), Some("v"));
    }
}
