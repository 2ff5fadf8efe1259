use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Identity attributed to an audited event.
///
/// Supplied by the excluded auth layer; the core never looks identities up
/// itself. Absent actor means a system-initiated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: i64,
    pub username: HeaplessString<50>,
    pub roles: Vec<Role>,
}

impl ActorRef {
    pub fn new(id: i64, username: &str, roles: Vec<Role>) -> Result<Self, crate::error::CoreError> {
        let username = HeaplessString::try_from(username).map_err(|_| {
            crate::error::CoreError::ValidationError(format!(
                "Username '{username}' exceeds 50 characters"
            ))
        })?;
        Ok(Self { id, username, roles })
    }

    /// The label role used in audit descriptions and the export.
    pub fn primary_role(&self) -> Role {
        Role::primary(&self.roles)
    }
}
