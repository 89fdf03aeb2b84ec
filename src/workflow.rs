use chrono::Utc;
use tracing::info;

use crate::entity::{
    ActivityEntry, ModificationAction, ModificationRequest, RequestStatus, User,
};
use crate::error::{ForecourtError, Result};
use crate::storage::JsonStore;

/// The admin's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Submit an edit/delete request against a vehicle. Captures a full
/// snapshot of the vehicle as it stands, creates the request in pending
/// state and logs a REQUEST_UPDATE / REQUEST_DELETE entry.
///
/// Multiple outstanding requests for the same vehicle are allowed.
pub fn submit_request(
    store: &mut JsonStore,
    vehicle_id: &str,
    action: ModificationAction,
    reason: Option<String>,
    actor: &User,
) -> Result<ModificationRequest> {
    let vehicle = store
        .get_vehicle(vehicle_id)
        .ok_or_else(|| ForecourtError::VehicleNotFound(vehicle_id.to_string()))?
        .clone();

    let reason = reason.unwrap_or_else(|| {
        format!("Request to {} vehicle {}", action, vehicle.vehicle_number)
    });

    let request = ModificationRequest {
        id: store.next_record_id(),
        vehicle_id: vehicle.id.clone(),
        vehicle_details: vehicle.clone(),
        requested_by: actor.name.clone(),
        requested_by_id: actor.id.clone(),
        action,
        status: RequestStatus::Pending,
        request_date: Utc::now(),
        reason,
    };

    store.add_request(request.clone());
    store.append_activity(ActivityEntry::new(
        &actor.id,
        &format!("REQUEST_{}", action.to_string().to_uppercase()),
        format!("Requested to {} vehicle {}", action, vehicle.vehicle_number),
    ));
    info!(id = %request.id, vehicle = %vehicle.vehicle_number, action = %action, "modification request submitted");

    Ok(request)
}

/// Flip one pending request to approved or rejected.
///
/// The decision is recorded and nothing else happens: the vehicle
/// collection is never touched, whatever the request asked for. Both
/// outcomes are terminal; deciding a non-pending request fails.
/// No activity entry is written for a decision.
pub fn decide(
    store: &mut JsonStore,
    request_id: &str,
    decision: Decision,
) -> Result<ModificationRequest> {
    let request = store
        .get_request(request_id)
        .ok_or_else(|| ForecourtError::RequestNotFound(request_id.to_string()))?;

    if request.status != RequestStatus::Pending {
        return Err(ForecourtError::RequestDecided(request_id.to_string()));
    }

    let status = match decision {
        Decision::Approve => RequestStatus::Approved,
        Decision::Reject => RequestStatus::Rejected,
    };
    store.set_request_status(request_id, status)?;
    info!(id = %request_id, status = %status, "modification request decided");

    store
        .get_request(request_id)
        .cloned()
        .ok_or_else(|| ForecourtError::Storage("Failed to retrieve decided request".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{add_vehicle, VehicleDraft};
    use crate::entity::Role;
    use tempfile::TempDir;

    fn employee() -> User {
        User {
            id: "2".to_string(),
            name: "Kasun Silva".to_string(),
            email: "kasun@lankanwheels.lk".to_string(),
            role: Role::Employee,
        }
    }

    fn seeded_store(tmp: &TempDir) -> (JsonStore, String) {
        let mut store = JsonStore::init(tmp.path()).unwrap();
        let draft = VehicleDraft {
            vehicle_number: Some("CAB-1234".to_string()),
            vehicle_type: Some("motorcycle".to_string()),
            brand: Some("Honda".to_string()),
            model: Some("CB125".to_string()),
            price: Some(450000),
            ..Default::default()
        };
        let vehicle = add_vehicle(&mut store, draft, &employee()).unwrap();
        (store, vehicle.id)
    }

    #[test]
    fn test_submit_creates_pending_request_with_snapshot() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);

        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Update,
            None,
            &employee(),
        )
        .unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.vehicle_id, vehicle_id);
        assert_eq!(request.vehicle_details.vehicle_number, "CAB-1234");
        assert_eq!(request.requested_by_id, "2");
        assert_eq!(request.reason, "Request to update vehicle CAB-1234");
    }

    #[test]
    fn test_submit_logs_request_action_tag() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);

        submit_request(&mut store, &vehicle_id, ModificationAction::Delete, None, &employee())
            .unwrap();

        let log = store.activities();
        let last = log.last().unwrap();
        assert_eq!(last.action, "REQUEST_DELETE");
        assert!(last.details.contains("delete vehicle CAB-1234"));
    }

    #[test]
    fn test_snapshot_is_not_revalidated_after_submission() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);

        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Update,
            None,
            &employee(),
        )
        .unwrap();

        store
            .set_vehicle_status(&vehicle_id, crate::entity::VehicleStatus::Repair)
            .unwrap();

        let stored = store.get_request(&request.id).unwrap();
        assert_eq!(
            stored.vehicle_details.status,
            crate::entity::VehicleStatus::Available
        );
    }

    #[test]
    fn test_submit_for_unknown_vehicle_fails() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = seeded_store(&tmp);

        let result = submit_request(
            &mut store,
            "999999",
            ModificationAction::Update,
            None,
            &employee(),
        );
        assert!(matches!(result, Err(ForecourtError::VehicleNotFound(_))));
    }

    #[test]
    fn test_multiple_pending_requests_per_vehicle_allowed() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);

        submit_request(&mut store, &vehicle_id, ModificationAction::Update, None, &employee())
            .unwrap();
        submit_request(&mut store, &vehicle_id, ModificationAction::Delete, None, &employee())
            .unwrap();

        let pending = store
            .requests()
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count();
        assert_eq!(pending, 2);
    }

    #[test]
    fn test_decide_is_terminal() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);
        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Update,
            None,
            &employee(),
        )
        .unwrap();

        let approved = decide(&mut store, &request.id, Decision::Approve).unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);

        let again = decide(&mut store, &request.id, Decision::Reject);
        assert!(matches!(again, Err(ForecourtError::RequestDecided(_))));
        assert_eq!(
            store.get_request(&request.id).unwrap().status,
            RequestStatus::Approved
        );
    }

    #[test]
    fn test_reject_path() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);
        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Delete,
            None,
            &employee(),
        )
        .unwrap();

        let rejected = decide(&mut store, &request.id, Decision::Reject).unwrap();
        assert_eq!(rejected.status, RequestStatus::Rejected);
    }

    #[test]
    fn test_decision_never_touches_the_vehicle_collection() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);
        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Delete,
            None,
            &employee(),
        )
        .unwrap();

        let before = serde_json::to_string(store.vehicles()).unwrap();
        decide(&mut store, &request.id, Decision::Approve).unwrap();
        let after = serde_json::to_string(store.vehicles()).unwrap();

        assert_eq!(before, after);
        assert_eq!(store.vehicles().len(), 1);
    }

    #[test]
    fn test_decide_logs_no_activity() {
        let tmp = TempDir::new().unwrap();
        let (mut store, vehicle_id) = seeded_store(&tmp);
        let request = submit_request(
            &mut store,
            &vehicle_id,
            ModificationAction::Update,
            None,
            &employee(),
        )
        .unwrap();

        let before = store.activities().len();
        decide(&mut store, &request.id, Decision::Approve).unwrap();
        assert_eq!(store.activities().len(), before);
    }

    #[test]
    fn test_decide_unknown_request_fails() {
        let tmp = TempDir::new().unwrap();
        let (mut store, _) = seeded_store(&tmp);

        let result = decide(&mut store, "999999", Decision::Approve);
        assert!(matches!(result, Err(ForecourtError::RequestNotFound(_))));
    }
}
