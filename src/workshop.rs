use chrono::NaiveDate;
use tracing::info;

use crate::entity::{ActivityEntry, RepairRecord, RepairStatus, User, VehicleStatus};
use crate::error::{ForecourtError, Result};
use crate::storage::JsonStore;

/// An unvalidated repair admission, as collected from the command line.
#[derive(Debug, Default, Clone)]
pub struct RepairDraft {
    pub vehicle_id: Option<String>,
    pub repair_shop: Option<String>,
    pub location: Option<String>,
    pub date_admitted: Option<NaiveDate>,
    pub expected_completion: Option<NaiveDate>,
    pub cost: Option<u64>,
    pub description: Option<String>,
}

/// Admit a vehicle for repair: create an in-progress repair record with the
/// vehicle's plate number denormalized in, flip the vehicle's status to
/// "repair" and log an ADD_REPAIR entry.
///
/// The shop's location is filled from the configured shop directory when
/// not given explicitly.
pub fn admit_for_repair(
    store: &mut JsonStore,
    draft: RepairDraft,
    actor: &User,
) -> Result<RepairRecord> {
    let vehicle_id = draft.vehicle_id.unwrap_or_default();
    let repair_shop = draft.repair_shop.unwrap_or_default();

    let date_admitted = match draft.date_admitted {
        Some(date) if !vehicle_id.is_empty() && !repair_shop.is_empty() => date,
        _ => {
            return Err(ForecourtError::Validation(
                "vehicle, repair shop and admission date are required".to_string(),
            ))
        }
    };

    let vehicle = store
        .get_vehicle(&vehicle_id)
        .ok_or_else(|| ForecourtError::VehicleNotFound(vehicle_id.clone()))?
        .clone();

    let location = draft
        .location
        .or_else(|| store.config().shop_location(&repair_shop).map(str::to_string))
        .unwrap_or_default();

    let repair = RepairRecord {
        id: store.next_record_id(),
        vehicle_id: vehicle.id.clone(),
        vehicle_number: vehicle.vehicle_number.clone(),
        repair_shop,
        location,
        date_admitted,
        expected_completion: draft.expected_completion,
        status: RepairStatus::InProgress,
        cost: draft.cost,
        description: draft.description.unwrap_or_default(),
        added_by: actor.name.clone(),
    };

    store.add_repair(repair.clone());
    store.set_vehicle_status(&vehicle.id, VehicleStatus::Repair)?;
    store.append_activity(ActivityEntry::new(
        &actor.id,
        "ADD_REPAIR",
        format!(
            "Added repair record for vehicle {} at {}",
            vehicle.vehicle_number, repair.repair_shop
        ),
    ));
    info!(id = %repair.id, vehicle = %vehicle.vehicle_number, shop = %repair.repair_shop, "vehicle admitted for repair");

    Ok(repair)
}

/// Move a repair record to a new status and log an UPDATE_REPAIR entry.
///
/// Only the repair record changes; the vehicle keeps whatever status it
/// has, including "repair" after the work is completed.
pub fn set_repair_status(
    store: &mut JsonStore,
    repair_id: &str,
    status: RepairStatus,
    actor: &User,
) -> Result<RepairRecord> {
    store.set_repair_status(repair_id, status)?;

    let repair = store
        .get_repair(repair_id)
        .cloned()
        .ok_or_else(|| ForecourtError::Storage("Failed to retrieve updated repair record".to_string()))?;

    store.append_activity(ActivityEntry::new(
        &actor.id,
        "UPDATE_REPAIR",
        format!(
            "Marked repair for vehicle {} as {}",
            repair.vehicle_number, status
        ),
    ));
    info!(id = %repair_id, status = %status, "repair status updated");

    Ok(repair)
}
