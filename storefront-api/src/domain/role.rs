use serde::{Deserialize, Serialize};
use std::fmt;

/// Access roles recognized by the storefront.
///
/// The set is closed at this layer: the excluded auth stack maps its own
/// role strings onto these before handing an actor to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    User,
}

impl Role {
    /// Pick the label role for an actor holding several roles.
    ///
    /// Priority is fixed: Admin > Staff > User. An empty slice labels as
    /// plain User.
    pub fn primary(roles: &[Role]) -> Role {
        if roles.contains(&Role::Admin) {
            return Role::Admin;
        }
        if roles.contains(&Role::Staff) {
            return Role::Staff;
        }
        Role::User
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Staff" => Ok(Role::Staff),
            "User" => Ok(Role::User),
            other => Err(format!("Unknown role label '{other}'")),
        }
    }
}
