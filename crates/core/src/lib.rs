//! tfdock-core: Container inventory extraction and rendering
//!
//! This crate reads the JSON document produced by `terraform show --json`, collects every
//! `docker_container` resource from the (arbitrarily nested) module tree and renders the
//! result as a tree report or a JSON summary.
//!
//! # Modules
//!
//! - [`state`] - Typed, lenient view of the input document
//! - [`extract`] - Depth-first container discovery
//! - [`models`] - Normalized container records
//! - [`report`] - The Inventory that aggregates extracted records
//! - [`render`] - Output formatters (tree, JSON) and color stripping
//!
//! # Example
//!
//! ```
//! use tfdock_core::{extract_inventory, render, StateDocument};
//!
//! let doc = StateDocument::from_json_str(r#"{"values": {"root_module": {}}}"#).unwrap();
//! let inventory = extract_inventory(&doc).unwrap();
//! let output = render::render_tree(&inventory, &render::TreeOptions::default());
//! println!("{}", render::strip_ansi(&output));
//! ```

pub mod error;
pub mod extract;
pub mod models;
pub mod render;
pub mod report;
pub mod state;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use extract::{extract_inventory, extract_records};
pub use models::{ContainerStatus, NetworkAttachment, PortMapping, Record};
pub use report::Inventory;
pub use state::{ModuleNode, StateDocument};
