use crate::application::read_models::{DeviceRowView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
struct ReportDocument {
    metadata: Metadata,
    report: Report,
    columns: Vec<String>,
    #[serde(rename = "totalDevices")]
    total_devices: usize,
    devices: Vec<DeviceEntry>,
    menu: Vec<MenuEntry>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    #[serde(rename = "referenceDate")]
    reference_date: String,
    #[serde(rename = "runId")]
    run_id: String,
    tool: Tool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Report {
    key: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct DeviceEntry {
    id: u64,
    name: String,
    fields: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct MenuEntry {
    key: String,
    label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    selected: bool,
}

/// JsonFormatter adapter rendering a report as a pretty-printed JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn device_entry(model: &ReportReadModel, row: &DeviceRowView) -> DeviceEntry {
        let fields = model
            .columns
            .iter()
            .zip(&row.cells)
            .map(|(column, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.clone())
                };
                (column.key.clone(), value)
            })
            .collect();

        DeviceEntry {
            id: row.id,
            name: row.name.clone(),
            fields,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let document = ReportDocument {
            metadata: Metadata {
                timestamp: model.metadata.timestamp.clone(),
                reference_date: model.metadata.reference_date.clone(),
                run_id: model.metadata.run_id.clone(),
                tool: Tool {
                    name: model.metadata.tool_name.clone(),
                    version: model.metadata.tool_version.clone(),
                },
            },
            report: Report {
                key: model.report.key.clone(),
                label: model.report.display_label.clone(),
            },
            columns: model.columns.iter().map(|c| c.key.clone()).collect(),
            total_devices: model.total_devices,
            devices: model
                .rows
                .iter()
                .map(|row| Self::device_entry(model, row))
                .collect(),
            menu: model
                .menu
                .iter()
                .map(|item| MenuEntry {
                    key: item.key.clone(),
                    label: item.label.clone(),
                    selected: item.selected,
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))
    }
}
