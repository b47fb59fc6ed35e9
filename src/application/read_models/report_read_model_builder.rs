//! Builder for constructing ReportReadModel from a use case response

use super::report_read_model::{
    ColumnView, DeviceRowView, MenuItemView, ReportMetadataView, ReportReadModel, ReportView,
};
use crate::application::dto::ReportResponse;
use crate::reporting::domain::{Column, Device, ReportMetadata};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Builder for constructing ReportReadModel from the use case response
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(response: &ReportResponse) -> ReportReadModel {
        ReportReadModel {
            metadata: Self::build_metadata(&response.metadata),
            report: ReportView {
                key: response.report.key().to_string(),
                label: response.report.label().to_string(),
                display_label: response.label.clone(),
            },
            columns: response
                .columns
                .iter()
                .map(|column| ColumnView {
                    key: column.key().to_string(),
                    header: column.header().to_string(),
                })
                .collect(),
            rows: response
                .devices
                .iter()
                .map(|device| Self::build_row(device, response.columns))
                .collect(),
            menu: response
                .menu_items
                .iter()
                .map(|item| MenuItemView {
                    key: item.key.to_string(),
                    label: item.label.to_string(),
                    selected: item.selected,
                })
                .collect(),
            total_devices: response.total_devices,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
            reference_date: metadata.reference_date().format(DATE_FORMAT).to_string(),
        }
    }

    fn build_row(device: &Device, columns: &[Column]) -> DeviceRowView {
        DeviceRowView {
            id: device.id.value(),
            name: device.name.clone(),
            cells: columns
                .iter()
                .map(|column| Self::cell(device, *column))
                .collect(),
        }
    }

    /// Display value of one column; missing values render as an empty string
    fn cell(device: &Device, column: Column) -> String {
        let date = |value: Option<chrono::NaiveDate>| {
            value
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };
        let amount = |value: Option<f64>| value.map(|v| format!("{:.2}", v)).unwrap_or_default();

        match column {
            Column::Venture => device.venture.clone().unwrap_or_default(),
            Column::Position => device.position.clone().unwrap_or_default(),
            Column::LastSeen => device
                .last_seen()
                .map(|seen| seen.format(DATETIME_FORMAT).to_string())
                .unwrap_or_default(),
            Column::Remarks => device.remarks.clone(),
            Column::Barcode => device.barcode.clone().unwrap_or_default(),
            Column::Cost => amount(device.cost),
            Column::Price => amount(device.price),
            Column::Support => date(device.support_expiration_date),
            Column::Purchase => date(device.purchase_date),
            Column::Deprecation => device
                .deprecation_months
                .map(|months| format!("{} months", months))
                .unwrap_or_default(),
            Column::DeprecationDate => date(device.deprecation_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::domain::{DeviceId, IpAddress};
    use crate::reporting::services::ReportCatalog;
    use chrono::NaiveDate;

    fn response_for(key: &str, devices: Vec<Device>) -> ReportResponse {
        let report = ReportCatalog::find(key).unwrap();
        ReportResponse {
            total_devices: devices.len() + 1,
            devices,
            report,
            label: report.display_label(),
            columns: report.columns(),
            menu_items: ReportCatalog::menu_items(report),
            metadata: ReportMetadata::new(
                "2024-06-15T10:00:00Z".to_string(),
                "device-reports".to_string(),
                "0.1.0".to_string(),
                "urn:uuid:test".to_string(),
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            ),
        }
    }

    #[test]
    fn test_build_support_report_cells() {
        let mut device = Device::new(DeviceId::new(42), "storage-7").unwrap();
        device.venture = Some("backup".to_string());
        device.barcode = Some("BC-0042".to_string());
        device.price = Some(1999.5);
        device.remarks = "rack B".to_string();
        device.support_expiration_date = NaiveDate::from_ymd_opt(2024, 7, 1);
        device.ip_addresses = vec![IpAddress::new(
            "10.1.0.4",
            NaiveDate::from_ymd_opt(2024, 6, 10).and_then(|d| d.and_hms_opt(14, 5, 0)),
        )];

        let model = ReportReadModelBuilder::build(&response_for("support_expires30", vec![device]));

        assert_eq!(model.report.key, "support_expires30");
        assert_eq!(model.report.label, "Support expires in 30 days");
        assert_eq!(model.report.display_label, "support expires in 30 days");
        assert_eq!(model.total_devices, 2);
        assert_eq!(model.metadata.reference_date, "2024-06-15");

        let headers: Vec<&str> = model.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(
            headers,
            vec!["Venture", "Position", "Barcode", "Price", "Last seen", "Remarks", "Support"]
        );

        let row = &model.rows[0];
        assert_eq!(row.id, 42);
        assert_eq!(row.name, "storage-7");
        assert_eq!(
            row.cells,
            vec![
                "backup",
                "",
                "BC-0042",
                "1999.50",
                "2024-06-10 14:05",
                "rack B",
                "2024-07-01"
            ]
        );
    }

    #[test]
    fn test_build_deprecation_cells() {
        let mut device = Device::new(DeviceId::new(1), "old-switch").unwrap();
        device.purchase_date = NaiveDate::from_ymd_opt(2021, 6, 1);
        device.deprecation_months = Some(36);
        device.deprecation_date = NaiveDate::from_ymd_opt(2024, 6, 1);

        let model = ReportReadModelBuilder::build(&response_for("deprecation_devices", vec![device]));
        assert_eq!(
            model.rows[0].cells,
            vec!["", "2021-06-01", "36 months", "2024-06-01", ""]
        );
    }

    #[test]
    fn test_build_menu() {
        let model = ReportReadModelBuilder::build(&response_for("deployment_open", vec![]));
        assert!(model.rows.is_empty());
        assert_eq!(model.menu.len(), ReportCatalog::all().len());
        let selected: Vec<&str> = model
            .menu
            .iter()
            .filter(|m| m.selected)
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(selected, vec!["deployment_open"]);
    }
}
