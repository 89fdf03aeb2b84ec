mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, RepairAction, RepairAddArgs, RepairCommand, RequestAction, RequestCommand,
    VehicleAction, VehicleAddArgs, VehicleCommand,
};
pub use handlers::{
    handle_activity, handle_check, handle_dashboard, handle_init, handle_login, handle_logout,
    handle_repair_add, handle_repair_list, handle_repair_set_status, handle_request_decide,
    handle_request_list, handle_request_submit, handle_staff, handle_vehicle_add,
    handle_vehicle_list, handle_whoami,
};
