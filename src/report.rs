//! Read-side aggregation over the store.
//!
//! Everything here is recomputed from whole-collection scans on every call;
//! nothing is cached or incrementally maintained.

use serde::Serialize;

use crate::entity::{ActivityEntry, RepairStatus, RequestStatus, VehicleStatus};
use crate::storage::JsonStore;

/// Aggregate dashboard counters.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_vehicles: usize,
    pub available: usize,
    pub sold: usize,
    pub in_repair: usize,
    pub revenue: u64,
    pub pending_requests: usize,
}

/// Repair record counters.
#[derive(Debug, Serialize)]
pub struct RepairSummary {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub delayed: usize,
}

pub fn summary(store: &JsonStore) -> DashboardSummary {
    let vehicles = store.vehicles();
    let count = |status: VehicleStatus| vehicles.iter().filter(|v| v.status == status).count();

    DashboardSummary {
        total_vehicles: vehicles.len(),
        available: count(VehicleStatus::Available),
        sold: count(VehicleStatus::Sold),
        in_repair: count(VehicleStatus::Repair),
        revenue: vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Sold)
            .map(|v| v.price)
            .sum(),
        pending_requests: store
            .requests()
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count(),
    }
}

pub fn repair_summary(store: &JsonStore) -> RepairSummary {
    let repairs = store.repairs();
    let count = |status: RepairStatus| repairs.iter().filter(|r| r.status == status).count();

    RepairSummary {
        total: repairs.len(),
        in_progress: count(RepairStatus::InProgress),
        completed: count(RepairStatus::Completed),
        delayed: count(RepairStatus::Delayed),
    }
}

/// The newest `limit` activity entries, newest first. Ordering among equal
/// timestamps is unspecified.
pub fn recent_activity(store: &JsonStore, limit: usize) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = store.activities().to_vec();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

/// The newest `limit` activity entries for one identity, newest first.
pub fn activity_for_user(store: &JsonStore, user_id: &str, limit: usize) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = store
        .activities()
        .iter()
        .filter(|a| a.user_id == user_id)
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Vehicle;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn vehicle(store: &mut JsonStore, number: &str, status: VehicleStatus, price: u64) {
        let v = Vehicle {
            id: store.next_record_id(),
            vehicle_number: number.to_string(),
            vehicle_type: "car".to_string(),
            brand: String::new(),
            model: String::new(),
            color: String::new(),
            registration_year: None,
            manufacturing_year: None,
            price,
            mileage: None,
            description: String::new(),
            photos: Vec::new(),
            status,
            added_by: "Admin User".to_string(),
            added_date: Utc::now(),
        };
        store.add_vehicle(v);
    }

    #[test]
    fn test_revenue_sums_sold_vehicles_only() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::init(tmp.path()).unwrap();
        vehicle(&mut store, "A", VehicleStatus::Sold, 100000);
        vehicle(&mut store, "B", VehicleStatus::Available, 50000);
        vehicle(&mut store, "C", VehicleStatus::Sold, 200000);

        let summary = summary(&store);
        assert_eq!(summary.revenue, 300000);
        assert_eq!(summary.total_vehicles, 3);
        assert_eq!(summary.sold, 2);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.in_repair, 0);
    }

    #[test]
    fn test_summary_counts_pending_requests_only() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::init(tmp.path()).unwrap();
        vehicle(&mut store, "A", VehicleStatus::Available, 100000);
        let vehicle_id = store.vehicles()[0].id.clone();
        let actor = crate::entity::User {
            id: "2".to_string(),
            name: "Kasun Silva".to_string(),
            email: "kasun@lankanwheels.lk".to_string(),
            role: crate::entity::Role::Employee,
        };

        let first = crate::workflow::submit_request(
            &mut store,
            &vehicle_id,
            crate::entity::ModificationAction::Update,
            None,
            &actor,
        )
        .unwrap();
        crate::workflow::submit_request(
            &mut store,
            &vehicle_id,
            crate::entity::ModificationAction::Delete,
            None,
            &actor,
        )
        .unwrap();
        crate::workflow::decide(&mut store, &first.id, crate::workflow::Decision::Reject).unwrap();

        assert_eq!(summary(&store).pending_requests, 1);
    }

    #[test]
    fn test_recent_activity_newest_first_with_limit() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::init(tmp.path()).unwrap();

        let base = Utc::now();
        for i in 0..15 {
            let mut entry = ActivityEntry::new("1", "ADD_VEHICLE", format!("entry {}", i));
            entry.timestamp = base + Duration::seconds(i);
            store.append_activity(entry);
        }

        let recent = recent_activity(&store, 10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].details, "entry 14");
        assert_eq!(recent[9].details, "entry 5");
    }

    #[test]
    fn test_activity_for_user_filters_and_limits() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::init(tmp.path()).unwrap();

        let base = Utc::now();
        for i in 0..8 {
            let user = if i % 2 == 0 { "2" } else { "3" };
            let mut entry = ActivityEntry::new(user, "ADD_VEHICLE", format!("entry {}", i));
            entry.timestamp = base + Duration::seconds(i);
            store.append_activity(entry);
        }

        let kasun = activity_for_user(&store, "2", 5);
        assert_eq!(kasun.len(), 4);
        assert!(kasun.iter().all(|a| a.user_id == "2"));
        assert_eq!(kasun[0].details, "entry 6");

        let limited = activity_for_user(&store, "2", 2);
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_repair_summary_counts_by_status() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::init(tmp.path()).unwrap();
        vehicle(&mut store, "A", VehicleStatus::Available, 100000);
        let vehicle_id = store.vehicles()[0].id.clone();
        let actor = crate::entity::User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@lankanwheels.lk".to_string(),
            role: crate::entity::Role::Admin,
        };

        let draft = crate::workshop::RepairDraft {
            vehicle_id: Some(vehicle_id),
            repair_shop: Some("AutoCare Colombo".to_string()),
            date_admitted: chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        let repair = crate::workshop::admit_for_repair(&mut store, draft, &actor).unwrap();
        crate::workshop::set_repair_status(&mut store, &repair.id, RepairStatus::Delayed, &actor)
            .unwrap();

        let summary = repair_summary(&store);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.in_progress, 0);
        assert_eq!(summary.delayed, 1);
    }
}
