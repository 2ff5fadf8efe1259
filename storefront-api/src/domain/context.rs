use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::actor::ActorRef;

/// Ambient facts about the request that triggered a mutation.
///
/// Passed explicitly into the services at call time instead of being read
/// from a process-global request stack, so tests can construct one directly
/// and background jobs simply pass `RequestContext::system()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub actor: Option<ActorRef>,
    pub ip_address: Option<IpAddr>,
}

impl RequestContext {
    /// Context for a system-initiated action: no actor, no network origin.
    pub fn system() -> Self {
        Self::default()
    }

    pub fn for_actor(actor: ActorRef) -> Self {
        Self {
            actor: Some(actor),
            ip_address: None,
        }
    }

    pub fn with_ip(mut self, ip: IpAddr) -> Self {
        self.ip_address = Some(ip);
        self
    }
}
