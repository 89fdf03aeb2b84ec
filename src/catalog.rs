use chrono::Utc;
use tracing::info;

use crate::entity::{ActivityEntry, User, Vehicle, VehicleStatus};
use crate::error::{ForecourtError, Result};
use crate::storage::JsonStore;

/// An unvalidated vehicle submission, as collected from the command line.
#[derive(Debug, Default, Clone)]
pub struct VehicleDraft {
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub registration_year: Option<u16>,
    pub manufacturing_year: Option<u16>,
    pub price: Option<u64>,
    pub mileage: Option<u64>,
    pub description: Option<String>,
    pub photos: Vec<String>,
}

/// Validate a draft and append it to the catalog as a new available
/// vehicle, stamped with the actor and clock, logging an ADD_VEHICLE entry.
/// A draft missing its number, type or price is rejected whole.
pub fn add_vehicle(store: &mut JsonStore, draft: VehicleDraft, actor: &User) -> Result<Vehicle> {
    let vehicle_number = draft.vehicle_number.unwrap_or_default();
    let vehicle_type = draft.vehicle_type.unwrap_or_default();

    if vehicle_number.is_empty() || vehicle_type.is_empty() || draft.price.is_none() {
        return Err(ForecourtError::Validation(
            "vehicle number, type and price are required".to_string(),
        ));
    }

    let vehicle = Vehicle {
        id: store.next_record_id(),
        vehicle_number,
        vehicle_type,
        brand: draft.brand.unwrap_or_default(),
        model: draft.model.unwrap_or_default(),
        color: draft.color.unwrap_or_default(),
        registration_year: draft.registration_year,
        manufacturing_year: draft.manufacturing_year,
        price: draft.price.unwrap_or_default(),
        mileage: draft.mileage,
        description: draft.description.unwrap_or_default(),
        photos: draft.photos,
        status: VehicleStatus::Available,
        added_by: actor.name.clone(),
        added_date: Utc::now(),
    };

    store.append_activity(ActivityEntry::new(
        &actor.id,
        "ADD_VEHICLE",
        format!(
            "Added vehicle {} - {} {}",
            vehicle.vehicle_number, vehicle.brand, vehicle.model
        ),
    ));
    info!(id = %vehicle.id, number = %vehicle.vehicle_number, "vehicle added to catalog");
    store.add_vehicle(vehicle.clone());

    Ok(vehicle)
}

/// Filter the catalog: case-insensitive substring match over number, brand
/// and model, AND'd with an exact type filter. The sentinel "all" (or no
/// filter) matches every type. Insertion order is preserved.
pub fn filter_vehicles<'a>(
    vehicles: &'a [Vehicle],
    search: Option<&str>,
    type_filter: Option<&str>,
) -> Vec<&'a Vehicle> {
    let needle = search.map(|s| s.to_lowercase()).filter(|s| !s.is_empty());

    vehicles
        .iter()
        .filter(|v| match &needle {
            Some(n) => {
                v.vehicle_number.to_lowercase().contains(n)
                    || v.brand.to_lowercase().contains(n)
                    || v.model.to_lowercase().contains(n)
            }
            None => true,
        })
        .filter(|v| match type_filter {
            Some(t) if t != "all" => v.vehicle_type == t,
            _ => true,
        })
        .collect()
}
