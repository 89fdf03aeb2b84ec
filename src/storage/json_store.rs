use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::StoreConfig;
use crate::entity::{
    ActivityEntry, ModificationRequest, RepairRecord, RepairStatus, RequestStatus, User, Vehicle,
    VehicleStatus,
};
use crate::error::{ForecourtError, Result};

const FORECOURT_DIR: &str = ".forecourt";
const VEHICLES_FILE: &str = "vehicles.json";
const REPAIRS_FILE: &str = "repairs.json";
const REQUESTS_FILE: &str = "modification_requests.json";
const ACTIVITIES_FILE: &str = "user_activities.json";
const SESSION_FILE: &str = "session.json";

/// The dealership store: four independent collections plus the identity
/// singleton, each persisted as one JSON blob under `.forecourt/`.
///
/// Collections are loaded whole on `open` and written back whole on `save`.
/// Nothing here is transactional; two processes saving the same store
/// concurrently can clobber each other's writes.
pub struct JsonStore {
    dir: PathBuf,
    config: StoreConfig,
    vehicles: Vec<Vehicle>,
    repairs: Vec<RepairRecord>,
    requests: Vec<ModificationRequest>,
    activities: Vec<ActivityEntry>,
    session: Option<User>,
    last_id: i64,
}

impl JsonStore {
    /// Initialize a new dealership store
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(FORECOURT_DIR);

        if dir.exists() {
            return Err(ForecourtError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let config = StoreConfig::default();
        config.write(&dir)?;

        let store = Self {
            dir,
            config,
            vehicles: Vec::new(),
            repairs: Vec::new(),
            requests: Vec::new(),
            activities: Vec::new(),
            session: None,
            last_id: 0,
        };
        store.save()?;

        Ok(store)
    }

    /// Open an existing dealership store
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(FORECOURT_DIR);

        if !dir.join(VEHICLES_FILE).exists() {
            return Err(ForecourtError::NotInitialized);
        }

        let config = StoreConfig::load(&dir)?;
        let vehicles: Vec<Vehicle> = read_collection(&dir.join(VEHICLES_FILE))?;
        let repairs: Vec<RepairRecord> = read_collection(&dir.join(REPAIRS_FILE))?;
        let requests: Vec<ModificationRequest> = read_collection(&dir.join(REQUESTS_FILE))?;
        let activities: Vec<ActivityEntry> = read_collection(&dir.join(ACTIVITIES_FILE))?;
        let session = read_session(&dir.join(SESSION_FILE))?;

        let last_id = vehicles
            .iter()
            .map(|v| v.id.as_str())
            .chain(repairs.iter().map(|r| r.id.as_str()))
            .chain(requests.iter().map(|r| r.id.as_str()))
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Ok(Self {
            dir,
            config,
            vehicles,
            repairs,
            requests,
            activities,
            session,
            last_id,
        })
    }

    /// Write every collection and the session singleton back to disk
    pub fn save(&self) -> Result<()> {
        write_blob(&self.dir.join(VEHICLES_FILE), &self.vehicles)?;
        write_blob(&self.dir.join(REPAIRS_FILE), &self.repairs)?;
        write_blob(&self.dir.join(REQUESTS_FILE), &self.requests)?;
        write_blob(&self.dir.join(ACTIVITIES_FILE), &self.activities)?;
        write_blob(&self.dir.join(SESSION_FILE), &self.session)?;
        Ok(())
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Issue a new record id from the current timestamp in milliseconds.
    ///
    /// Ids are not globally unique across processes; within this process a
    /// colliding id is bumped past the last one issued or loaded.
    pub fn next_record_id(&mut self) -> String {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    // --- vehicles ---

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(id = %vehicle.id, number = %vehicle.vehicle_number, "adding vehicle");
        self.vehicles.push(vehicle);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn set_vehicle_status(&mut self, id: &str, status: VehicleStatus) -> Result<()> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ForecourtError::VehicleNotFound(id.to_string()))?;
        vehicle.status = status;
        Ok(())
    }

    // --- repairs ---

    pub fn add_repair(&mut self, repair: RepairRecord) {
        debug!(id = %repair.id, vehicle = %repair.vehicle_id, "adding repair record");
        self.repairs.push(repair);
    }

    pub fn repairs(&self) -> &[RepairRecord] {
        &self.repairs
    }

    pub fn get_repair(&self, id: &str) -> Option<&RepairRecord> {
        self.repairs.iter().find(|r| r.id == id)
    }

    pub fn set_repair_status(&mut self, id: &str, status: RepairStatus) -> Result<()> {
        let repair = self
            .repairs
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ForecourtError::RepairNotFound(id.to_string()))?;
        repair.status = status;
        Ok(())
    }

    // --- modification requests ---

    pub fn add_request(&mut self, request: ModificationRequest) {
        debug!(id = %request.id, vehicle = %request.vehicle_id, "adding modification request");
        self.requests.push(request);
    }

    pub fn requests(&self) -> &[ModificationRequest] {
        &self.requests
    }

    pub fn get_request(&self, id: &str) -> Option<&ModificationRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn set_request_status(&mut self, id: &str, status: RequestStatus) -> Result<()> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ForecourtError::RequestNotFound(id.to_string()))?;
        request.status = status;
        Ok(())
    }

    // --- activity log ---

    /// Append one audit record. The log has no removal or pruning API.
    pub fn append_activity(&mut self, entry: ActivityEntry) {
        self.activities.push(entry);
    }

    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    // --- session singleton ---

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, user: User) {
        self.session = Some(user);
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&data)?)
}

fn read_session(path: &Path) -> Result<Option<User>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(&data)?)
}

fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data)?;
    Ok(())
}
