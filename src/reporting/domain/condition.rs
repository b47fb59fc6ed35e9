use super::device::{DeploymentStatus, Device};
use chrono::{Days, NaiveDate, NaiveTime};

/// Date fields that reports compare against a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    SupportExpiration,
    Deprecation,
}

impl DateField {
    fn read(&self, device: &Device) -> Option<NaiveDate> {
        match self {
            DateField::SupportExpiration => device.support_expiration_date,
            DateField::Deprecation => device.deprecation_date,
        }
    }
}

/// Optional fields a report can require to be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsetField {
    PurchaseDate,
    VentureRole,
}

/// A single filter condition of a report.
///
/// Offsets are in days relative to the reference date ("today"). A report
/// ANDs its conditions together. A missing value never satisfies a date
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Some IP address was last seen at or before midnight `days_ago` days back
    LastSeenOnOrBefore { days_ago: u64 },
    Unset(UnsetField),
    DateOnOrBefore(DateField, i64),
    DateOnOrAfter(DateField, i64),
    Verified,
    /// Some deployment of the device has this status
    DeploymentStatusIs(DeploymentStatus),
}

/// today + offset days, saturating at the calendar bounds
pub fn threshold(today: NaiveDate, offset_days: i64) -> NaiveDate {
    let shifted = if offset_days >= 0 {
        today.checked_add_days(Days::new(offset_days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(offset_days.unsigned_abs()))
    };
    shifted.unwrap_or(if offset_days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

impl Condition {
    /// Number of rows the device contributes when this condition is joined
    /// against it.
    ///
    /// Scalar conditions yield 0 or 1. Conditions over a one-to-many relation
    /// (IP addresses, deployments) yield one row per matching related record,
    /// which is why selections must be deduplicated afterwards.
    pub fn matching_rows(&self, device: &Device, today: NaiveDate) -> usize {
        match self {
            Condition::LastSeenOnOrBefore { days_ago } => {
                let cutoff = threshold(today, -(*days_ago as i64)).and_time(NaiveTime::MIN);
                device
                    .ip_addresses
                    .iter()
                    .filter(|ip| ip.last_seen.is_some_and(|seen| seen <= cutoff))
                    .count()
            }
            Condition::Unset(field) => {
                let unset = match field {
                    UnsetField::PurchaseDate => device.purchase_date.is_none(),
                    UnsetField::VentureRole => device.venture_role.is_none(),
                };
                usize::from(unset)
            }
            Condition::DateOnOrBefore(field, offset) => {
                let limit = threshold(today, *offset);
                usize::from(field.read(device).is_some_and(|date| date <= limit))
            }
            Condition::DateOnOrAfter(field, offset) => {
                let limit = threshold(today, *offset);
                usize::from(field.read(device).is_some_and(|date| date >= limit))
            }
            Condition::Verified => usize::from(device.verified),
            Condition::DeploymentStatusIs(status) => device
                .deployments
                .iter()
                .filter(|deployment| deployment.status == *status)
                .count(),
        }
    }

    pub fn matches(&self, device: &Device, today: NaiveDate) -> bool {
        self.matching_rows(device, today) > 0
    }
}
