use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecourtError {
    #[error("Not in a forecourt dealership. Run 'forecourt init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .forecourt/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Repair record not found: {0}")]
    RepairNotFound(String),

    #[error("Modification request not found: {0}")]
    RequestNotFound(String),

    #[error("Request {0} has already been decided")]
    RequestDecided(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not logged in. Run 'forecourt login' first.")]
    NotLoggedIn,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ForecourtError>;
