//! Sophos firewall configuration snapshot collection.
//!
//! This library queries one or more Sophos appliances over the
//! `webconsole/APIController` XML API, converts the returned XML into generic
//! nested key-value records, and assembles per-device snapshots plus an
//! aggregated run result for JSON output.
//!
//! The pipeline is a single straight line: load the device list, send one
//! authenticated POST per query group per device, convert matching elements
//! with `xml-map-core`, merge the results into a snapshot, and write history
//! and aggregate files. Execution is strictly sequential; a failed request or
//! a malformed response degrades to an empty result for that unit of work and
//! never aborts the run.
//!
//! # Modules
//!
//! - [`devices`] — device list loading (name, address, port, credentials)
//! - [`groups`] — query-group table (built-in defaults, TOML override)
//! - [`api`] — blocking HTTPS client for the appliance XML API
//! - [`collect`] — response parsing and snapshot assembly
//! - [`output`] — JSON history and aggregate file writing

pub mod api;
pub mod collect;
pub mod devices;
pub mod groups;
pub mod output;
