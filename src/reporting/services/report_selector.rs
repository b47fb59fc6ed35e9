use super::device_sorter::{DeviceSorter, SortSpec};
use super::report_catalog::ReportCatalog;
use crate::reporting::domain::{Column, Device, ReportDefinition};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Result of running one report over a device collection
#[derive(Debug, Clone)]
pub struct ReportSelection<'a> {
    /// Matching devices, one entry per device, sorted when a sort was given
    pub devices: Vec<&'a Device>,
    /// Case-normalised label for display
    pub label: String,
    pub columns: &'static [Column],
    pub definition: &'static ReportDefinition,
}

/// ReportSelector - resolves a report and applies it to a device collection
///
/// Never fails: unknown keys resolve to the default report.
pub struct ReportSelector;

impl ReportSelector {
    pub fn select<'a>(
        devices: &'a [Device],
        requested_key: Option<&str>,
        sort: Option<SortSpec>,
        today: NaiveDate,
    ) -> ReportSelection<'a> {
        let definition = ReportCatalog::lookup(requested_key);
        let mut selected = Self::distinct(definition.apply(devices, today));
        if let Some(spec) = sort {
            DeviceSorter::sort(&mut selected, spec);
        }

        ReportSelection {
            devices: selected,
            label: definition.display_label(),
            columns: definition.columns(),
            definition,
        }
    }

    /// Collapses repeated devices by identity, keeping first occurrences
    fn distinct(devices: Vec<&Device>) -> Vec<&Device> {
        let mut seen = HashSet::new();
        devices
            .into_iter()
            .filter(|device| seen.insert(device.id))
            .collect()
    }
}
