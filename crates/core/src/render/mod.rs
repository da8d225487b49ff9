//! Output rendering for container inventories

pub mod json;
pub mod palette;
pub mod present;
pub mod strip;
pub mod text;

pub use json::{render_json, render_json_string, render_summary, SummaryDocument};
pub use palette::{Palette, Tone};
pub use present::{endpoint_url, status_tone, truncate};
pub use strip::strip_ansi;
pub use text::{render_tree, TreeOptions};
