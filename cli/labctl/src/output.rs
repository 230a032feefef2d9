//! Output formatting for CLI commands.

use colored::Colorize;
use labwire_links::CanonicalLink;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;

const CLI_SCHEMA_VERSION: &str = "labwire.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parse a `--format` value.
    pub fn parse(s: &str) -> Result<Self, CliError> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// One table row per decoded link.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct LinkRow {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "Kind")]
    pub kind: String,

    #[tabled(rename = "Endpoint A")]
    pub a: String,

    #[tabled(rename = "Endpoint B")]
    pub b: String,

    #[tabled(rename = "MTU", display = "display_option_u32")]
    pub mtu: Option<u32>,
}

/// Build the table row for a link at a list position.
pub fn row(index: usize, link: &CanonicalLink) -> LinkRow {
    let [a, b] = link.endpoints();
    LinkRow {
        index,
        kind: link.kind().to_string(),
        a: a.to_string(),
        b: b.to_string(),
        mtu: link.params().mtu,
    }
}

fn display_option_u32(opt: &Option<u32>) -> String {
    opt.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No links found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            println!("{}", format_json(data, "[]"));
        }
    }
}

/// Print a single value as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let wrapped = wrap_with_schema(value);
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_format() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(CliError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn row_from_host_link() {
        let link = labwire_links::decode_value(json!({
            "type": "mgmt-net",
            "host-interface": "srl1_e1-5",
            "endpoint": {"node": "srl1", "interface": "e1-5"},
            "mtu": 1500,
        }))
        .unwrap();

        let r = row(2, &link);
        assert_eq!(r.index, 2);
        assert_eq!(r.kind, "mgmt-net");
        assert_eq!(r.a, "srl1:e1-5");
        assert_eq!(r.b, "mgmt-net:srl1_e1-5");
        assert_eq!(display_option_u32(&r.mtu), "1500");
    }

    #[test]
    fn json_is_wrapped_with_schema() {
        let out: serde_json::Value = serde_json::from_str(&format_json(&[1, 2], "[]")).unwrap();
        assert_eq!(out["schemaVersion"], CLI_SCHEMA_VERSION);
        assert_eq!(out["data"], json!([1, 2]));
    }
}
