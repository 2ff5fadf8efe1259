use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use storefront_api::domain::Role;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One immutable record of a single business-relevant event.
/// - Rows are append-only: the crate exposes no update or delete surface
///   for them, and retention is an operational concern handled outside.
/// - `entity_id` is a plain value, never a foreign key: the audit history
///   must survive deletion of the object it describes.
/// - `username` and `role` are snapshots taken at write time. The user
///   store lives outside the core, and re-deriving them later would tie the
///   row to mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogModel {
    /// Monotonically assigned by the store
    pub id: i64,

    /// Actor identity; None for system-initiated events
    pub user_id: Option<i64>,

    /// Snapshot of the actor's username at event time
    pub username: Option<HeaplessString<50>>,

    /// Snapshot of the actor's label role (Admin > Staff > User)
    pub role: Option<Role>,

    /// Short open-ended token: `create`, `update`, `delete`, `login`, ...
    /// New tokens may appear without a schema change.
    pub action: HeaplessString<32>,

    /// Kind of business object affected ("Product", "Order", ...)
    pub entity: Option<HeaplessString<64>>,

    /// Identifier of the affected object; only meaningful with `entity`
    pub entity_id: Option<i64>,

    /// Human-readable summary captured at event time
    pub description: Option<HeaplessString<255>>,

    /// Network origin of the triggering request
    pub ip_address: Option<HeaplessString<45>>,

    /// Set exactly once at creation
    pub created_at: DateTime<Utc>,
}

impl Identifiable for ActivityLogModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// An audit row about to be appended; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivityLog {
    pub user_id: Option<i64>,
    pub username: Option<HeaplessString<50>>,
    pub role: Option<Role>,
    pub action: HeaplessString<32>,
    pub entity: Option<HeaplessString<64>>,
    pub entity_id: Option<i64>,
    pub description: Option<HeaplessString<255>>,
    pub ip_address: Option<HeaplessString<45>>,
    pub created_at: DateTime<Utc>,
}
