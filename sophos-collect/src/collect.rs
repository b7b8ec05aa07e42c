use chrono::Local;
use colored::Colorize;
use serde::Serialize;
use xml_map_core::{collect_records, parse, Record, Value, XmlNode};

use crate::api::ApiClient;
use crate::devices::Device;
use crate::groups::QueryGroup;

/// Timestamp format for console output and snapshot fields.
pub const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp format safe for file names.
pub const FILE_TIMESTAMP: &str = "%Y-%m-%dT%H-%M-%S";

/// Current local time in the display format.
pub fn display_timestamp() -> String {
    Local::now().format(DISPLAY_TIMESTAMP).to_string()
}

/// Current local time in the file-name format.
pub fn file_timestamp() -> String {
    Local::now().format(FILE_TIMESTAMP).to_string()
}

/// Collected data for one device at one point in time.
///
/// The serialized field names (`coletado_em`, `dados`) are part of the
/// on-disk snapshot format and must not change.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceSnapshot {
    pub name: String,
    pub ip: String,
    #[serde(rename = "coletado_em")]
    pub collected_at: String,
    #[serde(rename = "dados")]
    pub data: Record,
}

impl DeviceSnapshot {
    /// True when at least one object type produced records.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// One full collection run across every device.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub exec_timestamp: String,
    #[serde(rename = "firewalls")]
    pub devices: Vec<DeviceSnapshot>,
}

/// Parse one response body into `type -> records` for every type in the
/// group. Malformed XML is logged and yields an empty record list for each
/// type rather than an error.
pub fn parse_group_response(body: &str, types: &[String]) -> Record {
    let mut results = Record::new();

    match parse(body.as_bytes()) {
        Ok(root) => {
            warn_on_auth_failure(&root);
            for object_type in types {
                let records = collect_records(&root, object_type);
                results.set(object_type.clone(), Value::List(records));
            }
        }
        Err(err) => {
            eprintln!(
                "{} failed to parse response for {}: {err}",
                "error:".red(),
                types.join(", ")
            );
            for object_type in types {
                results.set(object_type.clone(), Value::List(Vec::new()));
            }
        }
    }

    results
}

/// Query every group for one device and assemble its snapshot.
///
/// A failed request skips that group; the snapshot still carries whatever
/// the other groups returned.
pub fn snapshot_device(
    client: &ApiClient,
    device: &Device,
    groups: &[QueryGroup],
    collected_at: &str,
) -> DeviceSnapshot {
    println!("Processing device: {}...", device.name.bold());

    let mut data = Record::new();
    for group in groups {
        println!("  - querying: {}", group.types.join(", "));
        let body = match client.fetch_group(device, &group.types) {
            Ok(body) => body,
            Err(err) => {
                eprintln!(
                    "{} {} ({}): {err}",
                    "error:".red(),
                    device.name,
                    device.ip
                );
                continue;
            }
        };

        for (object_type, records) in parse_group_response(&body, &group.types) {
            data.set(object_type, records);
        }
    }

    DeviceSnapshot {
        name: device.name.clone(),
        ip: device.ip.clone(),
        collected_at: collected_at.to_string(),
        data,
    }
}

fn warn_on_auth_failure(root: &XmlNode) {
    if let Some(status) = root.get_text(&["Login", "status"]) {
        if !status.eq_ignore_ascii_case("Authentication Successful") {
            eprintln!("{} appliance login failed: {status}", "warning:".yellow());
        }
    }
}
