use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RepairStatus {
    #[default]
    InProgress,
    Completed,
    Delayed,
}

impl std::fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepairStatus::InProgress => write!(f, "in-progress"),
            RepairStatus::Completed => write!(f, "completed"),
            RepairStatus::Delayed => write!(f, "delayed"),
        }
    }
}

impl std::str::FromStr for RepairStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "in-progress" | "inprogress" => Ok(RepairStatus::InProgress),
            "completed" => Ok(RepairStatus::Completed),
            "delayed" => Ok(RepairStatus::Delayed),
            _ => Err(format!("Invalid repair status: {}", s)),
        }
    }
}

/// A repair admission. The plate number is denormalized from the vehicle at
/// creation time and is not kept in sync afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairRecord {
    pub id: String,
    pub vehicle_id: String,
    pub vehicle_number: String,
    pub repair_shop: String,
    #[serde(default)]
    pub location: String,
    pub date_admitted: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion: Option<NaiveDate>,
    pub status: RepairStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    #[serde(default)]
    pub description: String,
    pub added_by: String,
}
