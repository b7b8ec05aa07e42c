use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use sophos_collect::api::ApiClient;
use sophos_collect::collect::{display_timestamp, file_timestamp, snapshot_device, RunResult};
use sophos_collect::devices::load_devices;
use sophos_collect::groups::{default_query_groups, load_query_groups, QueryGroup};
use sophos_collect::output::{history_path, save_json, AGGREGATE_FILE};

use crate::cli::CollectArgs;

pub fn run_collect(args: CollectArgs) -> Result<()> {
    let devices = load_devices(&args.devices)
        .with_context(|| format!("cannot load device list {}", args.devices.display()))?;
    let groups = resolve_groups(&args)?;

    let client = ApiClient::new(Duration::from_secs(args.timeout), args.insecure_tls)
        .context("failed to build API client")?;
    if args.insecure_tls {
        eprintln!(
            "{} TLS certificate verification disabled",
            "warning:".yellow()
        );
    }

    let exec_timestamp = display_timestamp();
    println!("Starting collection run at {exec_timestamp}");

    let mut collected = Vec::new();
    for device in &devices {
        let snapshot = snapshot_device(&client, device, &groups, &exec_timestamp);

        if !snapshot.has_data() {
            println!("  -> no data collected for {}; skipping", device.name);
            continue;
        }

        let path = history_path(&args.history_dir, &device.name, &file_timestamp());
        match save_json(&snapshot, &path) {
            Ok(()) => println!("  -> history saved to {}", path.display()),
            Err(err) => eprintln!("{} {err}", "error:".red()),
        }
        collected.push(snapshot);
    }

    if collected.is_empty() {
        println!("No device produced data; aggregate file not written.");
        return Ok(());
    }

    let result = RunResult {
        exec_timestamp,
        devices: collected,
    };
    let path = args.output_dir.join(AGGREGATE_FILE);
    match save_json(&result, &path) {
        Ok(()) => println!(
            "{}",
            format!("Aggregate snapshot written to {}", path.display()).green()
        ),
        Err(err) => eprintln!("{} {err}", "error:".red()),
    }

    Ok(())
}

fn resolve_groups(args: &CollectArgs) -> Result<Vec<QueryGroup>> {
    if !args.types.is_empty() {
        return Ok(vec![QueryGroup {
            types: args.types.clone(),
        }]);
    }

    if let Some(path) = &args.groups_file {
        return load_query_groups(path)
            .with_context(|| format!("cannot load groups file {}", path.display()));
    }

    Ok(default_query_groups())
}
