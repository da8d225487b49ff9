//! Tree-style text report

use owo_colors::OwoColorize;

use super::palette::Palette;
use super::present::{
    endpoint_url, status_tone, truncate, DEFAULT_IMAGE_WIDTH, DEFAULT_SCHEME, STATUS_SYMBOL,
};
use crate::models::{PortMapping, Record};
use crate::report::Inventory;

const BANNER_WIDTH: usize = 55;
const REPORT_TITLE: &str = "Docker Containers Status";
const URLS_TITLE: &str = "Quick Access URLs";
const NO_ENDPOINTS: &str = "No external endpoints available";

/// Settings for the tree report
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub palette: Palette,
    /// Image references longer than this are truncated
    pub image_width: usize,
    /// Scheme used in endpoint URLs
    pub url_scheme: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            palette: Palette::ansi(),
            image_width: DEFAULT_IMAGE_WIDTH,
            url_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Render the inventory as a tree report
///
/// Containers are listed by module, then name, whatever order they were extracted in.
pub fn render_tree(inventory: &Inventory, options: &TreeOptions) -> String {
    let palette = &options.palette;
    let mut out = String::new();

    push_banner(&mut out, REPORT_TITLE, palette);
    out.push('\n');

    // Summary
    out.push_str(&format!("{}\n", "Summary:".style(palette.heading)));
    out.push_str(&format!("├─ Total: {} containers\n", inventory.total()));
    out.push_str(&format!(
        "├─ Running: {}\n",
        inventory.running().style(palette.positive)
    ));
    out.push_str(&format!(
        "└─ Stopped: {}\n",
        inventory.stopped().style(palette.negative)
    ));
    out.push('\n');
    push_rule(&mut out, palette);
    out.push('\n');

    let sorted = inventory.sorted();
    for record in &sorted {
        push_record(&mut out, record, options);
    }

    // URL index
    push_banner(&mut out, URLS_TITLE, palette);
    out.push('\n');

    let mut urls_found = false;
    for record in &sorted {
        for (port, url) in record_endpoints(record, &options.url_scheme) {
            out.push_str(&format!(
                "{}: {} [{}]\n",
                record.name.style(palette.name),
                url.style(palette.url),
                port.protocol.to_uppercase()
            ));
            urls_found = true;
        }
    }
    if !urls_found {
        out.push_str(NO_ENDPOINTS);
        out.push('\n');
    }
    out.push('\n');

    out
}

fn push_rule(out: &mut String, palette: &Palette) {
    out.push_str(&format!("{}\n", "═".repeat(BANNER_WIDTH).style(palette.heading)));
}

fn push_banner(out: &mut String, title: &str, palette: &Palette) {
    push_rule(out, palette);
    let centered = format!("{:^width$}", title, width = BANNER_WIDTH);
    out.push_str(&format!("{}\n", centered.style(palette.heading)));
    push_rule(out, palette);
}

fn push_record(out: &mut String, record: &Record, options: &TreeOptions) {
    let palette = &options.palette;

    out.push_str(&format!(
        "{}/{}\n",
        record.module.style(palette.module),
        record.name.style(palette.name)
    ));

    let status = record.status.as_str();
    let status_text = format!("{} {}", STATUS_SYMBOL, status.to_uppercase());
    out.push_str(&format!(
        "├─ Status: {}\n",
        status_text.style(palette.tone(status_tone(status)))
    ));

    if !record.image.is_empty() {
        out.push_str(&format!(
            "├─ Image: {}\n",
            truncate(&record.image, options.image_width)
        ));
    }
    if !record.hostname.is_empty() {
        out.push_str(&format!("├─ Hostname: {}\n", record.hostname));
    }
    if !record.restart_policy.is_empty() {
        out.push_str(&format!("├─ Restart: {}\n", record.restart_policy));
    }

    let endpoints = record_endpoints(record, &options.url_scheme);
    if !endpoints.is_empty() {
        out.push_str("├─ Endpoints:\n");
        for (i, (port, url)) in endpoints.iter().enumerate() {
            let connector = if i == endpoints.len() - 1 {
                "│  └─"
            } else {
                "│  ├─"
            };
            out.push_str(&format!(
                "{} {} ({}:{} [{}])\n",
                connector,
                url.style(palette.url),
                port_number(port.external),
                port_number(port.internal),
                port.protocol.to_uppercase()
            ));
        }
    }

    match record.primary_network() {
        Some(net) if net.is_complete() => {
            out.push_str(&format!(
                "└─ Network: {} ({})\n",
                net.network_name, net.ip_address
            ));
        }
        _ => out.push_str("└─ Network: N/A\n"),
    }

    out.push('\n');
}

/// Published ports of a record with their URLs
fn record_endpoints<'a>(record: &'a Record, scheme: &str) -> Vec<(&'a PortMapping, String)> {
    record
        .endpoints()
        .filter_map(|port| endpoint_url(port, scheme).map(|url| (port, url)))
        .collect()
}

fn port_number(port: Option<u16>) -> String {
    port.map(|p| p.to_string()).unwrap_or_default()
}
