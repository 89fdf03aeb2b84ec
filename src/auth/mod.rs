//! Identity resolution against a fixed credential directory.
//!
//! `StaticDirectory` holds the demo accounts in memory and compares
//! passwords in plaintext. It is demo-only; `Directory` is the seam where a
//! real identity provider would plug in.

use chrono::NaiveDate;

use crate::entity::{Role, StaffMember, StaffStatus, User};

/// Resolves credentials to a sanitized identity.
pub trait Directory {
    /// Exact-match lookup. Returns the identity with the password stripped,
    /// or `None` with no indication of which field was wrong.
    fn authenticate(&self, email: &str, password: &str) -> Option<User>;

    /// The fixed staff roster.
    fn staff(&self) -> Vec<StaffMember>;
}

struct Account {
    user: User,
    password: &'static str,
}

/// The built-in three-account directory.
pub struct StaticDirectory {
    accounts: Vec<Account>,
    roster: Vec<StaffMember>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self {
            accounts: vec![
                account("1", "Admin User", "admin@lankanwheels.lk", Role::Admin, "admin123"),
                account("2", "Kasun Silva", "kasun@lankanwheels.lk", Role::Employee, "emp123"),
                account("3", "Priya Fernando", "priya@lankanwheels.lk", Role::Employee, "emp123"),
            ],
            roster: vec![
                staff("2", "Kasun Silva", "kasun@lankanwheels.lk", StaffStatus::Active, (2024, 1, 15)),
                staff("3", "Priya Fernando", "priya@lankanwheels.lk", StaffStatus::Active, (2024, 2, 1)),
                staff("4", "Rajith Perera", "rajith@lankanwheels.lk", StaffStatus::Inactive, (2023, 12, 10)),
            ],
        }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory for StaticDirectory {
    fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
    }

    fn staff(&self) -> Vec<StaffMember> {
        self.roster.clone()
    }
}

fn account(id: &str, name: &str, email: &str, role: Role, password: &'static str) -> Account {
    Account {
        user: User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        },
        password,
    }
}

fn staff(id: &str, name: &str, email: &str, status: StaffStatus, joined: (i32, u32, u32)) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Employee,
        status,
        // Roster dates are fixed constants, always valid.
        join_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap_or_default(),
    }
}
