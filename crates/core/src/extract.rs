//! Container discovery over the module tree

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{ContainerStatus, Record, ROOT_MODULE};
use crate::report::Inventory;
use crate::state::{ContainerValues, ModuleNode, StateDocument};

/// Resource type that describes a docker container
pub const CONTAINER_RESOURCE_TYPE: &str = "docker_container";

/// Qualifier terraform puts in front of module names in addresses
const MODULE_PREFIX: &str = "module.";

/// Extract all containers of a state document
///
/// Fails only when the document has no root module.
pub fn extract_inventory(doc: &StateDocument) -> Result<Inventory> {
    let root = doc.root_module()?;
    Ok(Inventory::from_records(extract_records(root)))
}

/// Walk the module tree depth-first and collect container records
///
/// Resources of a module come before those of its children; children are visited in
/// the order they are listed.
pub fn extract_records(root: &ModuleNode) -> Vec<Record> {
    let mut records = Vec::new();
    visit(root, ROOT_MODULE, &mut records);
    records
}

fn visit(node: &ModuleNode, module_path: &str, records: &mut Vec<Record>) {
    debug!(
        module = module_path,
        resources = node.resources.len(),
        children = node.child_modules.len(),
        "visiting module"
    );

    for resource in &node.resources {
        if resource.resource_type != CONTAINER_RESOURCE_TYPE {
            trace!(address = %resource.address, kind = %resource.resource_type, "skipping resource");
            continue;
        }
        let record = to_record(module_path, ContainerValues::from_value(&resource.values));
        debug!(module = module_path, container = %record.name, status = %record.status, "found container");
        records.push(record);
    }

    for child in &node.child_modules {
        let child_path = module_display_path(&child.address);
        visit(child, &child_path, records);
    }
}

/// Module label for a child module address
///
/// `module.app` becomes `app`, `module.app.module.db` becomes `app.module.db`. Addresses
/// without the qualifier are kept as-is; an empty address falls back to the root label.
pub fn module_display_path(address: &str) -> String {
    let path = address.strip_prefix(MODULE_PREFIX).unwrap_or(address);
    if path.is_empty() {
        ROOT_MODULE.to_string()
    } else {
        path.to_string()
    }
}

/// Normalize a container's attributes into a detached record
pub fn to_record(module_path: &str, values: ContainerValues) -> Record {
    Record {
        module: module_path.to_string(),
        name: values.name.unwrap_or_else(|| "unknown".to_string()),
        id: values.id.unwrap_or_default(),
        image: values.image.unwrap_or_default(),
        hostname: values.hostname.unwrap_or_default(),
        status: ContainerStatus::from_must_run(values.must_run.unwrap_or(false)),
        restart_policy: values.restart.unwrap_or_default(),
        ports: values.ports.into_iter().map(Into::into).collect(),
        networks: values.network_data.into_iter().map(Into::into).collect(),
        healthcheck: values.healthcheck.into_iter().next(),
    }
}
