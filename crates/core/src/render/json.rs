//! JSON rendering for inventories

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::present::endpoint_url;
use crate::models::{ContainerStatus, Record};
use crate::report::Inventory;

/// Machine-readable inventory summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub summary: SummaryCounts,
    pub containers: Vec<ContainerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total_containers: usize,
    pub running_containers: usize,
}

/// One container in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerEntry {
    pub module: String,
    pub name: String,
    pub status: ContainerStatus,
    pub image: String,
    pub hostname: String,
    pub restart_policy: String,
    pub endpoints: Vec<EndpointEntry>,
}

/// A published port with its URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointEntry {
    pub url: String,
    pub external_port: u16,
    pub internal_port: Option<u16>,
    /// Protocol exactly as found in the state
    pub protocol: String,
    pub ip: String,
}

impl ContainerEntry {
    fn from_record(record: &Record, scheme: &str) -> Self {
        let endpoints = record
            .endpoints()
            .filter_map(|port| {
                let url = endpoint_url(port, scheme)?;
                Some(EndpointEntry {
                    url,
                    external_port: port.external?,
                    internal_port: port.internal,
                    protocol: port.protocol.clone(),
                    ip: port.ip.clone(),
                })
            })
            .collect();

        Self {
            module: record.module.clone(),
            name: record.name.clone(),
            status: record.status,
            image: record.image.clone(),
            hostname: record.hostname.clone(),
            restart_policy: record.restart_policy.clone(),
            endpoints,
        }
    }
}

/// Build the summary document
///
/// Containers keep their extraction order; only the tree report sorts.
pub fn render_summary(inventory: &Inventory, scheme: &str) -> SummaryDocument {
    SummaryDocument {
        summary: SummaryCounts {
            total_containers: inventory.total(),
            running_containers: inventory.running(),
        },
        containers: inventory
            .records()
            .iter()
            .map(|r| ContainerEntry::from_record(r, scheme))
            .collect(),
    }
}

/// Render the summary as a JSON value
pub fn render_json(inventory: &Inventory, scheme: &str) -> serde_json::Result<Value> {
    serde_json::to_value(render_summary(inventory, scheme))
}

/// Render the summary as a pretty-printed JSON string
pub fn render_json_string(inventory: &Inventory, scheme: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&render_summary(inventory, scheme))
}
