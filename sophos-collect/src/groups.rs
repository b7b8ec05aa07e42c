use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// An ordered set of object types batched into a single API request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryGroup {
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GroupFile {
    group: Vec<QueryGroup>,
}

/// Errors returned when loading a query-group file.
#[derive(Debug, Error)]
pub enum GroupLoadError {
    #[error("failed to read groups file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse groups file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("groups file {path} defines no groups")]
    Empty { path: String },
}

/// Load query groups from a TOML file.
pub fn load_query_groups(path: &Path) -> Result<Vec<QueryGroup>, GroupLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| GroupLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let groups = parse_groups(&raw, path.display().to_string())?;
    if groups.is_empty() {
        return Err(GroupLoadError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(groups)
}

/// Built-in query-group table.
pub fn default_query_groups() -> Vec<QueryGroup> {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/groups.toml"));
    match parse_groups(embedded, "embedded groups".to_string()) {
        Ok(groups) if !groups.is_empty() => groups,
        _ => fallback_query_groups(),
    }
}

fn parse_groups(raw: &str, path: String) -> Result<Vec<QueryGroup>, GroupLoadError> {
    let parsed: GroupFile =
        toml::from_str(raw).map_err(|source| GroupLoadError::Parse { path, source })?;
    Ok(parsed.group)
}

fn fallback_query_groups() -> Vec<QueryGroup> {
    [
        vec![
            "AdminSettings",
            "BackupRestore",
            "SNMPCommunity",
            "AuthenticationServer",
            "User",
        ],
        vec![
            "Zone",
            "Interface",
            "VLAN",
            "Alias",
            "XFRMInterface",
            "DHCPServer",
            "DNS",
        ],
        vec![
            "FirewallRuleGroup",
            "FirewallRule",
            "NATRule",
            "WebFilterURLGroup",
            "WebFilterPolicy",
            "ApplicationFilterPolicy",
        ],
        vec![
            "GatewayConfiguration",
            "RouterAdvertisement",
            "UnicastRoute",
            "SDWANProfile",
            "SDWANPolicyRoute",
            "VPNIPSecConnection",
        ],
        vec![
            "IPHost",
            "Services",
            "MACHost",
            "FQDNHost",
            "LocalServiceACL",
        ],
    ]
    .into_iter()
    .map(|types| QueryGroup {
        types: types.into_iter().map(str::to_string).collect(),
    })
    .collect()
}
