use anyhow::{Context, Result};
use xml_map_core::{collect_records, parse_file, Value};

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let root = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let records = collect_records(&root, &args.tag);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => println!("{}", render_records_text(&args.tag, &records)),
    }

    Ok(())
}

fn render_records_text(tag: &str, records: &[Value]) -> String {
    let mut out = Vec::new();
    out.push(format!("{tag}: {} record(s)", records.len()));

    for record in records {
        let Some(fields) = record.as_record() else {
            out.push(format!("- {}", summarize(record)));
            continue;
        };
        let line = fields
            .iter()
            .map(|(name, value)| format!("{name}={}", summarize(value)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push(format!("- {line}"));
    }

    out.join("\n")
}

fn summarize(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        Value::Record(record) => format!("{{{} field(s)}}", record.len()),
        Value::List(items) => format!("[{} item(s)]", items.len()),
    }
}
