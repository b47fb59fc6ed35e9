use crate::shared::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Maximum length for device names (security limit)
const MAX_DEVICE_NAME_LENGTH: usize = 255;

/// Identity of a device in the inventory; duplicates collapse on this value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(u64);

impl DeviceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a device rollout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Open,
    InProgress,
    InDeployment,
    ResolvedFixed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Open => "open",
            DeploymentStatus::InProgress => "in_progress",
            DeploymentStatus::InDeployment => "in_deployment",
            DeploymentStatus::ResolvedFixed => "resolved_fixed",
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An IP address assigned to a device, with the last time it answered a ping
#[derive(Debug, Clone, PartialEq)]
pub struct IpAddress {
    pub address: String,
    pub last_seen: Option<NaiveDateTime>,
}

impl IpAddress {
    pub fn new(address: impl Into<String>, last_seen: Option<NaiveDateTime>) -> Self {
        Self {
            address: address.into(),
            last_seen,
        }
    }
}

/// A deployment attached to a device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deployment {
    pub status: DeploymentStatus,
}

impl Deployment {
    pub fn new(status: DeploymentStatus) -> Self {
        Self { status }
    }
}

/// Device record as stored in the inventory.
///
/// Reports only read these fields; nothing in this crate mutates a device
/// after it has been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub barcode: Option<String>,
    pub venture: Option<String>,
    pub venture_role: Option<String>,
    pub position: Option<String>,
    pub remarks: String,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub support_expiration_date: Option<NaiveDate>,
    pub deprecation_date: Option<NaiveDate>,
    /// Deprecation period in months
    pub deprecation_months: Option<u32>,
    pub verified: bool,
    pub ip_addresses: Vec<IpAddress>,
    pub deployments: Vec<Deployment>,
}

impl Device {
    /// Creates a device with only identity fields set
    ///
    /// An empty name is accepted; it only shows up as a blank Name cell.
    ///
    /// # Errors
    /// Returns an error if the name is longer than the allowed limit
    pub fn new(id: DeviceId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.len() > MAX_DEVICE_NAME_LENGTH {
            anyhow::bail!(
                "Device name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_DEVICE_NAME_LENGTH
            );
        }

        Ok(Self {
            id,
            name,
            barcode: None,
            venture: None,
            venture_role: None,
            position: None,
            remarks: String::new(),
            price: None,
            cost: None,
            purchase_date: None,
            support_expiration_date: None,
            deprecation_date: None,
            deprecation_months: None,
            verified: false,
            ip_addresses: Vec::new(),
            deployments: Vec::new(),
        })
    }

    /// Most recent ping over all of the device's addresses
    pub fn last_seen(&self) -> Option<NaiveDateTime> {
        self.ip_addresses.iter().filter_map(|ip| ip.last_seen).max()
    }
}
