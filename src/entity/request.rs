use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationAction {
    Update,
    Delete,
}

impl std::fmt::Display for ModificationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModificationAction::Update => write!(f, "update"),
            ModificationAction::Delete => write!(f, "delete"),
        }
    }
}

impl std::str::FromStr for ModificationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "update" => Ok(ModificationAction::Update),
            "delete" => Ok(ModificationAction::Delete),
            _ => Err(format!("Invalid request action: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(format!("Invalid request status: {}", s)),
        }
    }
}

/// An employee's request to edit or delete a vehicle, held for admin
/// decision. `vehicle_details` is the vehicle as it looked at submission
/// time; it is never re-validated against the current catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationRequest {
    pub id: String,
    pub vehicle_id: String,
    pub vehicle_details: Vehicle,
    pub requested_by: String,
    pub requested_by_id: String,
    pub action: ModificationAction,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
    pub reason: String,
}
