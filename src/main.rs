use clap::Parser;
use forecourt::cli::{
    handle_activity, handle_check, handle_dashboard, handle_init, handle_login, handle_logout,
    handle_repair_add, handle_repair_list, handle_repair_set_status, handle_request_decide,
    handle_request_list, handle_request_submit, handle_staff, handle_vehicle_add,
    handle_vehicle_list, handle_whoami, Cli, Commands, RepairAction, RequestAction, VehicleAction,
};
use forecourt::workflow::Decision;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Login { email, password } => handle_login(email, password),
        Commands::Logout => handle_logout(),
        Commands::Whoami { json } => handle_whoami(json),
        Commands::Vehicle(cmd) => match cmd.action {
            VehicleAction::Add(args) => handle_vehicle_add(args),
            VehicleAction::List {
                search,
                type_filter,
                json,
            } => handle_vehicle_list(search, type_filter, json),
        },
        Commands::Repair(cmd) => match cmd.action {
            RepairAction::Add(args) => handle_repair_add(args),
            RepairAction::List { json } => handle_repair_list(json),
            RepairAction::SetStatus { id, status, json } => {
                handle_repair_set_status(id, status, json)
            }
        },
        Commands::Request(cmd) => match cmd.action {
            RequestAction::Submit {
                vehicle_id,
                action,
                reason,
                json,
            } => handle_request_submit(vehicle_id, action, reason, json),
            RequestAction::List { status, json } => handle_request_list(status, json),
            RequestAction::Approve { id, json } => handle_request_decide(id, Decision::Approve, json),
            RequestAction::Reject { id, json } => handle_request_decide(id, Decision::Reject, json),
        },
        Commands::Dashboard { json } => handle_dashboard(json),
        Commands::Activity { user, limit, json } => handle_activity(user, limit, json),
        Commands::Staff { json } => handle_staff(json),
        Commands::Check => handle_check(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
