use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = "config.yaml";

/// A known repair shop. Choosing one by name fills in its location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairShop {
    pub name: String,
    pub location: String,
}

/// Per-dealership settings, stored as `.forecourt/config.yaml`.
///
/// The file is written with defaults at `init`; a missing file also falls
/// back to defaults, so the config is never required to exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dealership_name: String,
    pub currency: String,
    pub recent_activity_limit: usize,
    pub staff_activity_limit: usize,
    pub repair_shops: Vec<RepairShop>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dealership_name: "Forecourt Motors".to_string(),
            currency: "LKR".to_string(),
            recent_activity_limit: 10,
            staff_activity_limit: 5,
            repair_shops: vec![
                shop("AutoCare Colombo", "Colombo 03"),
                shop("Quick Fix Kandy", "Kandy"),
                shop("Moto Service Galle", "Galle"),
                shop("Three Wheeler Experts", "Negombo"),
                shop("Bike Doctor Matara", "Matara"),
            ],
        }
    }
}

fn shop(name: &str, location: &str) -> RepairShop {
    RepairShop {
        name: name.to_string(),
        location: location.to_string(),
    }
}

impl StoreConfig {
    /// Load the config from a store directory, defaulting if absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    /// Write the config into a store directory.
    pub fn write(&self, dir: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), data)?;
        Ok(())
    }

    /// Location of a known repair shop, if the name is in the directory.
    pub fn shop_location(&self, name: &str) -> Option<&str> {
        self.repair_shops
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.location.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::load(tmp.path()).unwrap();
        assert_eq!(config.recent_activity_limit, 10);
        assert_eq!(config.staff_activity_limit, 5);
        assert_eq!(config.currency, "LKR");
    }

    #[test]
    fn test_write_and_reload() {
        let tmp = TempDir::new().unwrap();
        let mut config = StoreConfig::default();
        config.dealership_name = "Lankan Wheels".to_string();
        config.write(tmp.path()).unwrap();

        let reloaded = StoreConfig::load(tmp.path()).unwrap();
        assert_eq!(reloaded.dealership_name, "Lankan Wheels");
        assert_eq!(reloaded.repair_shops.len(), 5);
    }

    #[test]
    fn test_shop_location_lookup() {
        let config = StoreConfig::default();
        assert_eq!(config.shop_location("Quick Fix Kandy"), Some("Kandy"));
        assert_eq!(config.shop_location("Unknown Garage"), None);
    }
}
