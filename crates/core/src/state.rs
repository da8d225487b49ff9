//! Typed view of `terraform show --json` output
//!
//! Only the parts tfdock reads are modeled. Every field is decoded leniently: a missing key,
//! a `null`, or a value of the wrong JSON type becomes the field's default instead of an
//! error, so a single odd resource never aborts the whole report.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{NetworkAttachment, PortMapping, DEFAULT_PROTOCOL, WILDCARD_IP};

/// Decode a field, falling back to `T::default()` on a shape mismatch
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode a list element by element, skipping elements that do not fit
fn lenient_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Top-level state document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<StateValues>,
}

impl StateDocument {
    /// Build from an already parsed JSON value. Never fails; see module docs.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Parse JSON text. Fails only on invalid JSON syntax.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// The root of the module tree
    pub fn root_module(&self) -> Result<&ModuleNode> {
        self.values
            .as_ref()
            .and_then(|v| v.root_module.as_ref())
            .ok_or(Error::MissingRootModule)
    }
}

/// The `values` object of the state document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateValues {
    #[serde(default, deserialize_with = "lenient")]
    pub root_module: Option<ModuleNode>,
}

/// One node of the module tree
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleNode {
    /// Module address, e.g. `module.app`; empty for the root module
    #[serde(default, deserialize_with = "lenient")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub resources: Vec<ResourceEntry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub child_modules: Vec<ModuleNode>,
}

/// A resource declared directly in a module
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub address: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub resource_type: String,
    /// Provider-specific attribute map
    #[serde(default)]
    pub values: Value,
}

/// Attributes of a `docker_container` resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerValues {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub restart: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub must_run: Option<bool>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub ports: Vec<RawPort>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub network_data: Vec<RawNetwork>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub healthcheck: Vec<Value>,
}

impl ContainerValues {
    /// Decode from a resource's attribute map
    pub fn from_value(values: &Value) -> Self {
        serde_json::from_value(values.clone()).unwrap_or_default()
    }
}

/// Entry of the `ports` list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPort {
    #[serde(default, deserialize_with = "lenient")]
    pub external: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    pub internal: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ip: Option<String>,
}

impl From<RawPort> for PortMapping {
    fn from(raw: RawPort) -> Self {
        Self {
            // terraform writes 0 for ports that are not published
            external: raw.external.filter(|p| *p != 0),
            internal: raw.internal,
            protocol: non_empty_or(raw.protocol, DEFAULT_PROTOCOL),
            ip: non_empty_or(raw.ip, WILDCARD_IP),
        }
    }
}

/// Entry of the `network_data` list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNetwork {
    #[serde(default, deserialize_with = "lenient")]
    pub network_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ip_address: Option<String>,
}

impl From<RawNetwork> for NetworkAttachment {
    fn from(raw: RawNetwork) -> Self {
        Self {
            network_name: raw.network_name.unwrap_or_default(),
            ip_address: raw.ip_address.unwrap_or_default(),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback.to_string(),
    }
}
