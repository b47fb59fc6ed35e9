use crate::ports::outbound::DeviceRepository;
use crate::reporting::domain::{Deployment, DeploymentStatus, Device, DeviceId, IpAddress};
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct InventoryFile {
    devices: Vec<DeviceRecord>,
}

#[derive(Debug, Deserialize)]
struct DeviceRecord {
    id: u64,
    name: String,
    barcode: Option<String>,
    venture: Option<String>,
    venture_role: Option<String>,
    position: Option<String>,
    #[serde(default)]
    remarks: String,
    price: Option<f64>,
    cost: Option<f64>,
    purchase_date: Option<NaiveDate>,
    support_expiration_date: Option<NaiveDate>,
    deprecation_date: Option<NaiveDate>,
    deprecation_months: Option<u32>,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    ip_addresses: Vec<IpAddressRecord>,
    #[serde(default)]
    deployments: Vec<DeploymentRecord>,
}

#[derive(Debug, Deserialize)]
struct IpAddressRecord {
    address: String,
    #[serde(default, deserialize_with = "deserialize_last_seen")]
    last_seen: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
struct DeploymentRecord {
    status: DeploymentStatus,
}

/// Parses a ping timestamp, either RFC 3339 with an offset (stored as UTC)
/// or a local date-time without one.
fn parse_last_seen(value: &str) -> std::result::Result<NaiveDateTime, String> {
    if let Ok(with_offset) = DateTime::<FixedOffset>::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| {
            format!(
                "invalid last_seen '{}': expected RFC 3339 (2024-06-14T08:30:00Z) or YYYY-MM-DDTHH:MM:SS",
                value
            )
        })
}

fn deserialize_last_seen<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| parse_last_seen(&value).map_err(serde::de::Error::custom))
        .transpose()
}

impl DeviceRecord {
    fn into_device(self) -> Result<Device> {
        let mut device = Device::new(DeviceId::new(self.id), self.name)?;
        device.barcode = self.barcode;
        device.venture = self.venture;
        device.venture_role = self.venture_role;
        device.position = self.position;
        device.remarks = self.remarks;
        device.price = self.price;
        device.cost = self.cost;
        device.purchase_date = self.purchase_date;
        device.support_expiration_date = self.support_expiration_date;
        device.deprecation_date = self.deprecation_date;
        device.deprecation_months = self.deprecation_months;
        device.verified = self.verified;
        device.ip_addresses = self
            .ip_addresses
            .into_iter()
            .map(|ip| IpAddress::new(ip.address, ip.last_seen))
            .collect();
        device.deployments = self
            .deployments
            .into_iter()
            .map(|d| Deployment::new(d.status))
            .collect();
        Ok(device)
    }
}

/// FileSystemInventoryReader adapter for reading device inventories
///
/// Accepts JSON documents, or YAML when the file extension is `.yml`/`.yaml`.
pub struct FileSystemInventoryReader;

impl FileSystemInventoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemInventoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemInventoryReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(ReportError::SecurityError {
                path: path.to_path_buf(),
                reason: "Inventory path is a symbolic link".to_string(),
                hint: "Point --inventory at the real file instead of a link".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ReportError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes",
                    file_size, MAX_FILE_SIZE
                ),
                hint: "Split the inventory or export fewer devices".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn is_yaml(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Vec<Device>> {
        let parse_error = |details: String| ReportError::InventoryParseError {
            path: path.to_path_buf(),
            details,
        };

        let inventory: InventoryFile = if Self::is_yaml(path) {
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        };

        inventory
            .devices
            .into_iter()
            .map(|record| {
                record
                    .into_device()
                    .map_err(|e| anyhow::Error::from(parse_error(e.to_string())))
            })
            .collect()
    }
}

impl DeviceRepository for FileSystemInventoryReader {
    fn load_devices(&self, source: &Path) -> Result<Vec<Device>> {
        if !source.exists() {
            return Err(ReportError::InventoryNotFound {
                path: source.to_path_buf(),
                suggestion: "Export the device inventory to a JSON or YAML file and pass it with --inventory, or set `inventory` in device-reports.config.yml.".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(source)?;
        self.parse(source, &content)
    }
}
