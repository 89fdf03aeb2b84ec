use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Sold,
    Repair,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Available => write!(f, "available"),
            VehicleStatus::Sold => write!(f, "sold"),
            VehicleStatus::Repair => write!(f, "repair"),
        }
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(VehicleStatus::Available),
            "sold" => Ok(VehicleStatus::Sold),
            "repair" => Ok(VehicleStatus::Repair),
            _ => Err(format!("Invalid vehicle status: {}", s)),
        }
    }
}

/// A vehicle on the lot. Field names on disk match the persisted contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub vehicle_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_year: Option<u16>,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub status: VehicleStatus,
    pub added_by: String,
    pub added_date: DateTime<Utc>,
}
