//! Display helpers shared by the tree and JSON renderers

use super::palette::Tone;
use crate::models::PortMapping;

/// Marker drawn in front of a status word
pub const STATUS_SYMBOL: &str = "●";

/// Default truncation width for image references
pub const DEFAULT_IMAGE_WIDTH: usize = 20;

/// Default URL scheme for endpoints
pub const DEFAULT_SCHEME: &str = "http";

const ELLIPSIS: &str = "...";

/// Map a status label to its tone
///
/// Labels other than `running` and `stopped` get [`Tone::Caution`].
pub fn status_tone(label: &str) -> Tone {
    match label {
        "running" => Tone::Positive,
        "stopped" => Tone::Negative,
        _ => Tone::Caution,
    }
}

/// Build the URL a published port is reachable at
///
/// Returns None for ports without an external value.
pub fn endpoint_url(port: &PortMapping, scheme: &str) -> Option<String> {
    port.external.map(|external| format!("{}://{}:{}", scheme, port.host(), external))
}

/// Shorten `text` to `limit` characters, appending an ellipsis when cut
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{}{}", head, ELLIPSIS)
    }
}
