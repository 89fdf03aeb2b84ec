use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "forecourt")]
#[command(version, about = "Inventory and workflow tool for small vehicle dealerships")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new dealership store in the current directory
    Init,

    /// Log in as a dealership user
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the current session identity
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the vehicle catalog
    Vehicle(VehicleCommand),

    /// Track repair admissions
    Repair(RepairCommand),

    /// Submit and decide modification requests
    Request(RequestCommand),

    /// Show aggregate dealership analytics
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent activity entries, newest first
    Activity {
        /// Only entries for this user id
        #[arg(long)]
        user: Option<String>,

        /// Maximum entries to show
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the staff roster with each member's recent activity
    Staff {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan the store for integrity problems
    Check,
}

#[derive(Args, Debug)]
pub struct VehicleCommand {
    #[command(subcommand)]
    pub action: VehicleAction,
}

#[derive(Subcommand, Debug)]
pub enum VehicleAction {
    /// Add a vehicle to the inventory
    Add(VehicleAddArgs),

    /// List vehicles, optionally filtered
    List {
        /// Case-insensitive match against number, brand and model
        #[arg(long)]
        search: Option<String>,

        /// Exact type filter ("all" matches every type)
        #[arg(long = "type")]
        type_filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct VehicleAddArgs {
    /// Registration plate number, e.g. CAB-1234
    #[arg(long = "number")]
    pub vehicle_number: Option<String>,

    /// Vehicle type (motorcycle, scooter, three-wheeler, car)
    #[arg(long = "type")]
    pub vehicle_type: Option<String>,

    /// Brand, e.g. Honda, Yamaha, Bajaj
    #[arg(long)]
    pub brand: Option<String>,

    /// Model, e.g. CB125, CT100
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    /// Registration year
    #[arg(long)]
    pub registration_year: Option<u16>,

    /// Manufacturing year
    #[arg(long)]
    pub manufacturing_year: Option<u16>,

    /// Asking price in whole currency units
    #[arg(long)]
    pub price: Option<u64>,

    /// Mileage in kilometers
    #[arg(long)]
    pub mileage: Option<u64>,

    #[arg(long)]
    pub description: Option<String>,

    /// Photo reference (can be specified multiple times)
    #[arg(long = "photo")]
    pub photos: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RepairCommand {
    #[command(subcommand)]
    pub action: RepairAction,
}

#[derive(Subcommand, Debug)]
pub enum RepairAction {
    /// Admit a vehicle for repair
    Add(RepairAddArgs),

    /// List repair records
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a repair record's status
    SetStatus {
        /// Repair record id
        id: String,

        /// New status (in-progress, completed, delayed)
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct RepairAddArgs {
    /// Vehicle id to admit
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Repair shop name
    #[arg(long)]
    pub shop: Option<String>,

    /// Shop location (defaults to the configured shop directory)
    #[arg(long)]
    pub location: Option<String>,

    /// Admission date (YYYY-MM-DD)
    #[arg(long)]
    pub admitted: Option<chrono::NaiveDate>,

    /// Expected completion date (YYYY-MM-DD)
    #[arg(long)]
    pub expected: Option<chrono::NaiveDate>,

    /// Estimated cost in whole currency units
    #[arg(long)]
    pub cost: Option<u64>,

    /// Description of the repair work needed
    #[arg(long)]
    pub description: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RequestCommand {
    #[command(subcommand)]
    pub action: RequestAction,
}

#[derive(Subcommand, Debug)]
pub enum RequestAction {
    /// Submit a modification request for a vehicle (employees only)
    Submit {
        /// Vehicle id
        vehicle_id: String,

        /// Requested action (update or delete)
        action: String,

        /// Reason for the request
        #[arg(long)]
        reason: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List modification requests
    List {
        /// Filter by status (pending, approved, rejected)
        #[arg(long)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Approve a pending request (admin only)
    Approve {
        /// Request id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reject a pending request (admin only)
    Reject {
        /// Request id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
