//! Advisory integrity warnings for the dealership store.
//!
//! Nothing in the store rejects inconsistent data; this module surfaces
//! the weakly enforced invariants for display.

use crate::entity::RequestStatus;
use crate::storage::JsonStore;

/// Activity entries beyond this count trigger an advisory warning.
pub const ACTIVITY_WARNING_THRESHOLD: usize = 5000;

/// A problem found while scanning the store.
#[derive(Debug, Clone)]
pub enum Warning {
    /// Repair record references a vehicle that no longer exists.
    DanglingRepair { repair_id: String, vehicle_id: String },
    /// Pending modification request references a vehicle that no longer exists.
    StaleRequest { request_id: String, vehicle_id: String },
    /// Activity log length exceeds the recommended threshold.
    LargeActivityLog { count: usize, threshold: usize },
}

/// Scan the store and return any warnings.
///
/// # Returns
/// A vector of warnings (empty if the store is consistent)
pub fn check_integrity(store: &JsonStore) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for repair in store.repairs() {
        if store.get_vehicle(&repair.vehicle_id).is_none() {
            warnings.push(Warning::DanglingRepair {
                repair_id: repair.id.clone(),
                vehicle_id: repair.vehicle_id.clone(),
            });
        }
    }

    for request in store.requests() {
        if request.status == RequestStatus::Pending
            && store.get_vehicle(&request.vehicle_id).is_none()
        {
            warnings.push(Warning::StaleRequest {
                request_id: request.id.clone(),
                vehicle_id: request.vehicle_id.clone(),
            });
        }
    }

    let count = store.activities().len();
    if count > ACTIVITY_WARNING_THRESHOLD {
        warnings.push(Warning::LargeActivityLog {
            count,
            threshold: ACTIVITY_WARNING_THRESHOLD,
        });
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::DanglingRepair {
            repair_id,
            vehicle_id,
        } => {
            format!(
                "Warning: repair record {} references missing vehicle {}",
                repair_id, vehicle_id
            )
        }
        Warning::StaleRequest {
            request_id,
            vehicle_id,
        } => {
            format!(
                "Warning: pending request {} references missing vehicle {}",
                request_id, vehicle_id
            )
        }
        Warning::LargeActivityLog { count, threshold } => {
            format!(
                "Warning: {} activity entries exceeds recommended {} - the log is never pruned",
                count, threshold
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        ActivityEntry, ModificationAction, ModificationRequest, RepairRecord, RepairStatus,
        Vehicle, VehicleStatus,
    };
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_with_vehicle(tmp: &TempDir) -> (JsonStore, String) {
        let mut store = JsonStore::init(tmp.path()).unwrap();
        let id = store.next_record_id();
        store.add_vehicle(Vehicle {
            id: id.clone(),
            vehicle_number: "CAB-1234".to_string(),
            vehicle_type: "car".to_string(),
            brand: String::new(),
            model: String::new(),
            color: String::new(),
            registration_year: None,
            manufacturing_year: None,
            price: 450000,
            mileage: None,
            description: String::new(),
            photos: Vec::new(),
            status: VehicleStatus::Available,
            added_by: "Admin User".to_string(),
            added_date: Utc::now(),
        });
        (store, id)
    }

    fn repair_for(store: &mut JsonStore, vehicle_id: &str) -> String {
        let id = store.next_record_id();
        store.add_repair(RepairRecord {
            id: id.clone(),
            vehicle_id: vehicle_id.to_string(),
            vehicle_number: "CAB-1234".to_string(),
            repair_shop: "AutoCare Colombo".to_string(),
            location: "Colombo 03".to_string(),
            date_admitted: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            expected_completion: None,
            status: RepairStatus::InProgress,
            cost: None,
            description: String::new(),
            added_by: "Admin User".to_string(),
        });
        id
    }

    fn request_for(store: &mut JsonStore, vehicle_id: &str, status: crate::entity::RequestStatus) -> String {
        let snapshot = store.vehicles().first().cloned().unwrap();
        let id = store.next_record_id();
        store.add_request(ModificationRequest {
            id: id.clone(),
            vehicle_id: vehicle_id.to_string(),
            vehicle_details: snapshot,
            requested_by: "Kasun Silva".to_string(),
            requested_by_id: "2".to_string(),
            action: ModificationAction::Update,
            status,
            request_date: Utc::now(),
            reason: String::new(),
        });
        id
    }

    #[test]
    fn test_consistent_store_has_no_warnings() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = store_with_vehicle(&tmp);
        repair_for(&mut store, &vehicle_id);
        request_for(&mut store, &vehicle_id, RequestStatus::Pending);

        assert!(check_integrity(&store).is_empty());
    }

    #[test]
    fn test_dangling_repair_warning() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = store_with_vehicle(&tmp);
        let repair_id = repair_for(&mut store, "999999");

        let warnings = check_integrity(&store);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            Warning::DanglingRepair {
                repair_id: rid,
                vehicle_id,
            } => {
                assert_eq!(rid, &repair_id);
                assert_eq!(vehicle_id, "999999");
            }
            _ => panic!("Expected DanglingRepair warning"),
        }
    }

    #[test]
    fn test_stale_pending_request_warning() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = store_with_vehicle(&tmp);
        request_for(&mut store, "999999", RequestStatus::Pending);

        let warnings = check_integrity(&store);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::StaleRequest { .. }));
    }

    #[test]
    fn test_decided_request_with_missing_vehicle_is_not_stale() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = store_with_vehicle(&tmp);
        request_for(&mut store, "999999", RequestStatus::Approved);

        assert!(check_integrity(&store).is_empty());
    }

    #[test]
    fn test_large_activity_log_warning() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = store_with_vehicle(&tmp);
        for i in 0..(ACTIVITY_WARNING_THRESHOLD + 1) {
            store.append_activity(ActivityEntry::new("1", "ADD_VEHICLE", format!("entry {}", i)));
        }

        let warnings = check_integrity(&store);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            Warning::LargeActivityLog { count, threshold } => {
                assert_eq!(*count, ACTIVITY_WARNING_THRESHOLD + 1);
                assert_eq!(*threshold, ACTIVITY_WARNING_THRESHOLD);
            }
            _ => panic!("Expected LargeActivityLog warning"),
        }
    }

    #[test]
    fn test_format_warnings_mention_ids() {
        let warning = Warning::DanglingRepair {
            repair_id: "123".to_string(),
            vehicle_id: "456".to_string(),
        };
        let msg = format_warning(&warning);
        assert!(msg.contains("123"));
        assert!(msg.contains("456"));

        let warning = Warning::LargeActivityLog {
            count: 6000,
            threshold: 5000,
        };
        let msg = format_warning(&warning);
        assert!(msg.contains("6000"));
        assert!(msg.contains("5000"));
    }
}
