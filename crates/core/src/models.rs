//! Core domain models for tfdock
//!
//! These types are the normalized, detached form of container resources found in a
//! terraform state document. They are built once by the extractor and only read afterwards.

use serde::{Deserialize, Serialize};

/// Bind address that means "all interfaces"
pub const WILDCARD_IP: &str = "0.0.0.0";

/// Protocol assumed when a port mapping does not name one
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Module label used for resources declared in the root module
pub const ROOT_MODULE: &str = "root";

/// Whether a container is expected to be running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerStatus {
    /// `must_run` was set
    Running,
    /// `must_run` was unset or false
    Stopped,
}

impl ContainerStatus {
    /// Classify from the `must_run` flag
    pub fn from_must_run(must_run: bool) -> Self {
        if must_run {
            ContainerStatus::Running
        } else {
            ContainerStatus::Stopped
        }
    }

    /// Lowercase label, as used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::Running => "running",
            ContainerStatus::Stopped => "stopped",
        }
    }

    pub fn is_running(&self) -> bool {
        *self == ContainerStatus::Running
    }
}

impl std::fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A published port of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    /// Host-side port (None when the port is not published)
    pub external: Option<u16>,
    /// Container-side port
    pub internal: Option<u16>,
    /// Transport protocol, as written in the state ("tcp", "udp", ...)
    pub protocol: String,
    /// Host bind address
    pub ip: String,
}

impl PortMapping {
    /// Check if the port is reachable from the host
    pub fn is_exposed(&self) -> bool {
        self.external.is_some()
    }

    /// Host part of the endpoint URL
    pub fn host(&self) -> &str {
        if self.ip == WILDCARD_IP {
            "localhost"
        } else {
            &self.ip
        }
    }
}

impl Default for PortMapping {
    fn default() -> Self {
        Self {
            external: None,
            internal: None,
            protocol: DEFAULT_PROTOCOL.to_string(),
            ip: WILDCARD_IP.to_string(),
        }
    }
}

/// Attachment of a container to a docker network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAttachment {
    pub network_name: String,
    pub ip_address: String,
}

impl NetworkAttachment {
    /// Both the network name and the address are known
    pub fn is_complete(&self) -> bool {
        !self.network_name.is_empty() && !self.ip_address.is_empty()
    }
}

/// One container resource, normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Owning module path, or [`ROOT_MODULE`]
    pub module: String,
    pub name: String,
    pub id: String,
    pub image: String,
    pub hostname: String,
    pub status: ContainerStatus,
    pub restart_policy: String,
    pub ports: Vec<PortMapping>,
    pub networks: Vec<NetworkAttachment>,
    /// First healthcheck block, passed through untouched
    pub healthcheck: Option<serde_json::Value>,
}

impl Record {
    /// Ports that are published on the host, in declaration order
    pub fn endpoints(&self) -> impl Iterator<Item = &PortMapping> {
        self.ports.iter().filter(|p| p.is_exposed())
    }

    /// The network shown in reports
    pub fn primary_network(&self) -> Option<&NetworkAttachment> {
        self.networks.first()
    }

    /// Sort key for the tree report
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.module, &self.name)
    }
}
