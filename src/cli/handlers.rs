use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::auth::{Directory, StaticDirectory};
use crate::catalog::{self, VehicleDraft};
use crate::cli::{RepairAddArgs, VehicleAddArgs};
use crate::entity::{ModificationAction, RepairStatus, RequestStatus};
use crate::error::{ForecourtError, Result};
use crate::storage::JsonStore;
use crate::workflow::{self, Decision};
use crate::workshop::{self, RepairDraft};
use crate::{report, session, warnings};

/// Find the project root by looking for .forecourt/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".forecourt").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let store = JsonStore::init(&root)?;

    println!(
        "Initialized {} dealership store in {}",
        store.config().dealership_name,
        root.display()
    );

    Ok(())
}

pub fn handle_login(email: String, password: Option<String>) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;

    let password = match password {
        Some(p) => p,
        None => {
            // Prompt only when someone is actually at the terminal.
            if atty::is(atty::Stream::Stdin) {
                eprint!("Password: ");
                io::stderr().flush()?;
                let mut input = String::new();
                io::stdin().lock().read_line(&mut input)?;
                input.trim_end().to_string()
            } else {
                return Err(ForecourtError::Validation(
                    "password required in non-interactive mode".to_string(),
                ));
            }
        }
    };

    let directory = StaticDirectory::new();
    let user = session::login(&mut store, &directory, &email, &password)?;
    store.save()?;

    println!("Logged in as {} ({})", user.name, user.role);

    Ok(())
}

pub fn handle_logout() -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;

    match session::logout(&mut store) {
        Some(user) => {
            store.save()?;
            println!("Logged out {}", user.name);
        }
        None => println!("No active session."),
    }

    Ok(())
}

pub fn handle_whoami(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    match store.current_user() {
        Some(user) => {
            if json {
                println!("{}", serde_json::to_string_pretty(user)?);
            } else {
                println!("{} ({}) [{}]", user.name, user.email, user.role);
            }
        }
        None => println!("Not logged in."),
    }

    Ok(())
}

pub fn handle_vehicle_add(args: VehicleAddArgs) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;
    let actor = session::require_user(&store)?;

    let draft = VehicleDraft {
        vehicle_number: args.vehicle_number,
        vehicle_type: args.vehicle_type,
        brand: args.brand,
        model: args.model,
        color: args.color,
        registration_year: args.registration_year,
        manufacturing_year: args.manufacturing_year,
        price: args.price,
        mileage: args.mileage,
        description: args.description,
        photos: args.photos,
    };

    let vehicle = catalog::add_vehicle(&mut store, draft, &actor)?;
    store.save()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&vehicle)?);
    } else {
        println!(
            "Added vehicle {} - {} {} ({})",
            vehicle.vehicle_number, vehicle.brand, vehicle.model, vehicle.id
        );
    }

    Ok(())
}

pub fn handle_vehicle_list(
    search: Option<String>,
    type_filter: Option<String>,
    json: bool,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let vehicles = catalog::filter_vehicles(
        store.vehicles(),
        search.as_deref(),
        type_filter.as_deref(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
    } else if vehicles.is_empty() {
        println!("No vehicles found matching your criteria");
    } else {
        let currency = &store.config().currency;
        println!("Vehicles:\n");
        for v in vehicles {
            println!(
                "  {} [{}] {} - {} {} ({} {})",
                v.id, v.status, v.vehicle_number, v.brand, v.model, currency, v.price
            );
            println!("      type: {}  added by: {}", v.vehicle_type, v.added_by);
        }
    }

    Ok(())
}

pub fn handle_repair_add(args: RepairAddArgs) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;
    let actor = session::require_user(&store)?;

    let draft = RepairDraft {
        vehicle_id: args.vehicle,
        repair_shop: args.shop,
        location: args.location,
        date_admitted: args.admitted,
        expected_completion: args.expected,
        cost: args.cost,
        description: args.description,
    };

    let repair = workshop::admit_for_repair(&mut store, draft, &actor)?;
    store.save()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&repair)?);
    } else {
        println!(
            "Vehicle {} has been sent to {} ({})",
            repair.vehicle_number, repair.repair_shop, repair.id
        );
    }

    Ok(())
}

pub fn handle_repair_list(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let repairs = store.repairs();

    if json {
        println!("{}", serde_json::to_string_pretty(&repairs)?);
    } else if repairs.is_empty() {
        println!("No repair records found");
    } else {
        let totals = report::repair_summary(&store);
        println!(
            "Repair records ({} total, {} in progress, {} completed, {} delayed):\n",
            totals.total, totals.in_progress, totals.completed, totals.delayed
        );
        for r in repairs {
            println!(
                "  {} [{}] {} at {} - admitted {}",
                r.id, r.status, r.vehicle_number, r.repair_shop, r.date_admitted
            );
            if let Some(expected) = r.expected_completion {
                println!("      expected: {}", expected);
            }
        }
    }

    Ok(())
}

pub fn handle_repair_set_status(id: String, status: String, json: bool) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;
    let actor = session::require_user(&store)?;

    let status: RepairStatus = status.parse().map_err(ForecourtError::Validation)?;

    let repair = workshop::set_repair_status(&mut store, &id, status, &actor)?;
    store.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repair)?);
    } else {
        println!(
            "Repair {} for vehicle {} is now {}",
            repair.id, repair.vehicle_number, repair.status
        );
    }

    Ok(())
}

pub fn handle_request_submit(
    vehicle_id: String,
    action: String,
    reason: Option<String>,
    json: bool,
) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;
    let actor = session::require_user(&store)?;

    // Role checks live in the command layer only; the domain ops take any actor.
    if actor.role != crate::entity::Role::Employee {
        return Err(ForecourtError::PermissionDenied(
            "only employees can submit modification requests".to_string(),
        ));
    }

    let action: ModificationAction = action.parse().map_err(ForecourtError::Validation)?;

    let request = workflow::submit_request(&mut store, &vehicle_id, action, reason, &actor)?;
    store.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!(
            "Request {} to {} vehicle {} sent to admin for approval",
            request.id, request.action, request.vehicle_details.vehicle_number
        );
    }

    Ok(())
}

pub fn handle_request_list(status: Option<String>, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let filter: Option<RequestStatus> = match status {
        Some(s) => Some(s.parse().map_err(ForecourtError::Validation)?),
        None => None,
    };

    let requests: Vec<_> = store
        .requests()
        .iter()
        .filter(|r| filter.map_or(true, |f| r.status == f))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&requests)?);
    } else if requests.is_empty() {
        println!("No pending requests");
    } else {
        println!("Modification requests:\n");
        for r in requests {
            println!(
                "  {} [{}] {} {} - requested by {} on {}",
                r.id,
                r.status,
                r.action,
                r.vehicle_details.vehicle_number,
                r.requested_by,
                r.request_date.format("%Y-%m-%d")
            );
            if !r.reason.is_empty() {
                println!("      reason: {}", r.reason);
            }
        }
    }

    Ok(())
}

pub fn handle_request_decide(id: String, decision: Decision, json: bool) -> Result<()> {
    let root = find_project_root();
    let mut store = JsonStore::open(&root)?;
    let actor = session::require_user(&store)?;

    if actor.role != crate::entity::Role::Admin {
        return Err(ForecourtError::PermissionDenied(
            "only admins can decide modification requests".to_string(),
        ));
    }

    let request = workflow::decide(&mut store, &id, decision)?;
    store.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!(
            "Request {} for vehicle {} has been {}",
            request.id, request.vehicle_details.vehicle_number, request.status
        );
    }

    Ok(())
}

pub fn handle_dashboard(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let summary = report::summary(&store);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let config = store.config();
        println!("{}\n", config.dealership_name);
        println!("Total vehicles:   {}", summary.total_vehicles);
        println!("Available:        {}", summary.available);
        println!("Sold:             {}", summary.sold);
        println!("In repair:        {}", summary.in_repair);
        println!("Total revenue:    {} {}", config.currency, summary.revenue);
        println!("Pending requests: {}", summary.pending_requests);
    }

    Ok(())
}

pub fn handle_activity(user: Option<String>, limit: Option<usize>, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let config = store.config();
    let entries = match user {
        Some(user_id) => {
            let limit = limit.unwrap_or(config.staff_activity_limit);
            report::activity_for_user(&store, &user_id, limit)
        }
        None => {
            let limit = limit.unwrap_or(config.recent_activity_limit);
            report::recent_activity(&store, limit)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No recent activities");
    } else {
        println!("Recent activity:\n");
        for entry in entries {
            println!(
                "  [{}] {} - {}",
                entry.action,
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.details
            );
        }
    }

    Ok(())
}

pub fn handle_staff(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let directory = StaticDirectory::new();
    let roster = directory.staff();

    if json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
        return Ok(());
    }

    let limit = store.config().staff_activity_limit;
    println!("Staff:\n");
    for member in roster {
        println!(
            "  {} ({}) [{}] joined {}",
            member.name, member.email, member.status, member.join_date
        );
        let activities = report::activity_for_user(&store, &member.id, limit);
        if activities.is_empty() {
            println!("      no recent activities");
        } else {
            for entry in activities {
                println!(
                    "      [{}] {} - {}",
                    entry.action,
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    entry.details
                );
            }
        }
    }

    Ok(())
}

pub fn handle_check() -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let found = warnings::check_integrity(&store);

    if found.is_empty() {
        println!("No integrity problems found.");
    } else {
        for warning in &found {
            println!("{}", warnings::format_warning(warning));
        }
    }

    Ok(())
}
