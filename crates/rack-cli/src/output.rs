//! Print records and renderers for command output.
//!
//! Handlers produce a [`Record`] or [`Listing`]; nothing reaches stdout until
//! the whole document has been rendered, so a failed command prints nothing.

use std::io::Write;

use anyhow::anyhow;
use clap::ValueEnum;
use rack_client::Keypair;
use serde_json::{Map, Value};
use tabled::{builder::Builder, settings::Style};

use crate::client::{CliError, CliResult};

/// Columns of a single keypair, in print order.
pub(crate) const KEYPAIR_COLUMNS: [&str; 8] = [
    "keypair_id",
    "name",
    "nova_keypair_id",
    "is_default",
    "private_key",
    "gid",
    "user_id",
    "project_id",
];

/// Column appended to [`KEYPAIR_COLUMNS`] when a status is known.
pub(crate) const STATUS_COLUMN: &str = "status";

/// Columns of the keypair list.
pub(crate) const LIST_COLUMNS: [&str; 4] = ["keypair_id", "name", "is_default", "status"];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
    Value,
}

/// Format and column selection shared by every renderer.
#[derive(Clone, Debug, Default)]
pub(crate) struct OutputOptions {
    pub(crate) format: OutputFormat,
    pub(crate) columns: Vec<String>,
}

/// Field/value pairs describing one resource.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Record {
    pub(crate) columns: Vec<&'static str>,
    pub(crate) values: Vec<Value>,
}

/// Rows sharing one header.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Listing {
    pub(crate) columns: Vec<&'static str>,
    pub(crate) rows: Vec<Vec<Value>>,
}

/// What a command handed back for printing.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CommandOutput {
    Record(Record),
    Listing(Listing),
    Empty,
}

/// Build the print record for one keypair, appending `status` only when one
/// is supplied.
pub(crate) fn make_print_data(keypair: &Keypair, status: Option<&str>) -> Record {
    let mut columns = KEYPAIR_COLUMNS.to_vec();
    let mut values = vec![
        Value::from(keypair.keypair_id.as_str()),
        optional(keypair.name.as_deref()),
        optional(keypair.nova_keypair_id.as_deref()),
        Value::Bool(keypair.is_default),
        optional(keypair.private_key.as_deref()),
        optional(keypair.gid.as_deref()),
        optional(keypair.user_id.as_deref()),
        optional(keypair.project_id.as_deref()),
    ];

    if let Some(status) = status {
        columns.push(STATUS_COLUMN);
        values.push(Value::from(status));
    }

    Record { columns, values }
}

/// Build the keypair list; the header is fixed regardless of row count.
pub(crate) fn make_list_data(keypairs: &[Keypair]) -> Listing {
    let rows = keypairs
        .iter()
        .map(|keypair| {
            vec![
                Value::from(keypair.keypair_id.as_str()),
                optional(keypair.name.as_deref()),
                Value::Bool(keypair.is_default),
                optional(keypair.status.as_deref()),
            ]
        })
        .collect();
    Listing {
        columns: LIST_COLUMNS.to_vec(),
        rows,
    }
}

/// Render `output` and write it in one piece.
pub(crate) fn render(
    output: &CommandOutput,
    options: &OutputOptions,
    out: &mut impl Write,
) -> CliResult<()> {
    let text = match output {
        CommandOutput::Record(record) => render_record(record, options)?,
        CommandOutput::Listing(listing) => render_listing(listing, options)?,
        CommandOutput::Empty => return Ok(()),
    };
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}

fn render_record(record: &Record, options: &OutputOptions) -> CliResult<String> {
    let selected = select_columns(&record.columns, &options.columns)?;
    let text = match options.format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for &index in &selected {
                builder.push_record([
                    record.columns[index].to_string(),
                    display_value(&record.values[index]),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::ascii());
            format!("{table}\n")
        }
        OutputFormat::Json => {
            let object = to_object(&record.columns, &record.values, &selected);
            format!("{}\n", to_pretty_json(&Value::Object(object))?)
        }
        OutputFormat::Value => selected
            .iter()
            .map(|&index| format!("{}\n", display_value(&record.values[index])))
            .collect(),
    };
    Ok(text)
}

fn render_listing(listing: &Listing, options: &OutputOptions) -> CliResult<String> {
    let selected = select_columns(&listing.columns, &options.columns)?;
    let text = match options.format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(selected.iter().map(|&index| listing.columns[index]));
            for row in &listing.rows {
                builder.push_record(selected.iter().map(|&index| display_value(&row[index])));
            }
            let mut table = builder.build();
            table.with(Style::ascii());
            format!("{table}\n")
        }
        OutputFormat::Json => {
            let objects = listing
                .rows
                .iter()
                .map(|row| Value::Object(to_object(&listing.columns, row, &selected)))
                .collect();
            format!("{}\n", to_pretty_json(&Value::Array(objects))?)
        }
        OutputFormat::Value => listing
            .rows
            .iter()
            .map(|row| {
                let line = selected
                    .iter()
                    .map(|&index| display_value(&row[index]))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{line}\n")
            })
            .collect(),
    };
    Ok(text)
}

/// Indices of the requested columns in their original order; all columns
/// when none are requested.
fn select_columns(columns: &[&'static str], requested: &[String]) -> CliResult<Vec<usize>> {
    if requested.is_empty() {
        return Ok((0..columns.len()).collect());
    }
    if let Some(unknown) = requested
        .iter()
        .find(|name| !columns.iter().any(|column| *column == name.as_str()))
    {
        return Err(CliError::validation(format!(
            "no column named '{unknown}' (available: {})",
            columns.join(", ")
        )));
    }
    Ok(columns
        .iter()
        .enumerate()
        .filter(|(_, column)| requested.iter().any(|name| name.as_str() == **column))
        .map(|(index, _)| index)
        .collect())
}

fn to_object(columns: &[&'static str], values: &[Value], selected: &[usize]) -> Map<String, Value> {
    selected
        .iter()
        .map(|&index| (columns[index].to_string(), values[index].clone()))
        .collect()
}

fn to_pretty_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

fn optional(value: Option<&str>) -> Value {
    value.map_or(Value::Null, Value::from)
}

#[must_use]
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
