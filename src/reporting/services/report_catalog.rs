use crate::reporting::domain::{
    Column, Condition, DateField, DeploymentStatus, ReportDefinition, UnsetField,
};

/// Key of the report served when the requested one is missing or unknown
pub const DEFAULT_REPORT_KEY: &str = "no_ping1";

const PING_COLUMNS: &[Column] = &[
    Column::Venture,
    Column::Position,
    Column::LastSeen,
    Column::Remarks,
];

const SUPPORT_COLUMNS: &[Column] = &[
    Column::Venture,
    Column::Position,
    Column::Barcode,
    Column::Price,
    Column::LastSeen,
    Column::Remarks,
    Column::Support,
];

const DEPRECATION_COLUMNS: &[Column] = &[
    Column::Venture,
    Column::Purchase,
    Column::Deprecation,
    Column::DeprecationDate,
    Column::Remarks,
];

const VENTURE_REMARKS: &[Column] = &[Column::Venture, Column::Remarks];

/// Catalog entries in menu order. The first entry is the default.
static REPORTS: [ReportDefinition; 17] = [
    ReportDefinition::new(
        "no_ping1",
        "No ping since 1 day",
        &[Condition::LastSeenOnOrBefore { days_ago: 1 }],
        PING_COLUMNS,
    ),
    ReportDefinition::new(
        "no_ping3",
        "No ping since 3 days",
        &[Condition::LastSeenOnOrBefore { days_ago: 3 }],
        PING_COLUMNS,
    ),
    ReportDefinition::new(
        "no_ping7",
        "No ping since 7 days",
        &[Condition::LastSeenOnOrBefore { days_ago: 7 }],
        PING_COLUMNS,
    ),
    ReportDefinition::new(
        "no_purchase_date",
        "No purchase date",
        &[Condition::Unset(UnsetField::PurchaseDate)],
        &[
            Column::Venture,
            Column::Position,
            Column::Barcode,
            Column::Cost,
            Column::Price,
            Column::Remarks,
        ],
    ),
    ReportDefinition::new(
        "no_venture_role",
        "No venture and role",
        &[Condition::Unset(UnsetField::VentureRole)],
        &[
            Column::Venture,
            Column::Position,
            Column::Barcode,
            Column::Cost,
            Column::LastSeen,
            Column::Remarks,
        ],
    ),
    ReportDefinition::new(
        "deactivated_support",
        "Deactivated support",
        &[Condition::DateOnOrBefore(DateField::SupportExpiration, 0)],
        SUPPORT_COLUMNS,
    ),
    ReportDefinition::new(
        "support_expires30",
        "Support expires in 30 days",
        &[
            Condition::DateOnOrBefore(DateField::SupportExpiration, 30),
            Condition::DateOnOrAfter(DateField::SupportExpiration, 0),
        ],
        SUPPORT_COLUMNS,
    ),
    ReportDefinition::new(
        "support_expires60",
        "Support expires in 60 days",
        &[
            Condition::DateOnOrBefore(DateField::SupportExpiration, 60),
            Condition::DateOnOrAfter(DateField::SupportExpiration, 0),
        ],
        SUPPORT_COLUMNS,
    ),
    ReportDefinition::new(
        "support_expires90",
        "Support expires in 90 days",
        &[
            Condition::DateOnOrBefore(DateField::SupportExpiration, 90),
            Condition::DateOnOrAfter(DateField::SupportExpiration, 0),
        ],
        SUPPORT_COLUMNS,
    ),
    ReportDefinition::new(
        "verified",
        "Verified venture and role",
        &[Condition::Verified],
        VENTURE_REMARKS,
    ),
    ReportDefinition::new(
        "deployment_open",
        "Deployment open",
        &[Condition::DeploymentStatusIs(DeploymentStatus::Open)],
        VENTURE_REMARKS,
    ),
    ReportDefinition::new(
        "deployment_in_progress",
        "Deployment in progress",
        &[Condition::DeploymentStatusIs(DeploymentStatus::InProgress)],
        VENTURE_REMARKS,
    ),
    ReportDefinition::new(
        "deployment_running",
        "Deployment running",
        &[Condition::DeploymentStatusIs(DeploymentStatus::InDeployment)],
        VENTURE_REMARKS,
    ),
    ReportDefinition::new(
        "deprecation_devices",
        "Deprecation devices",
        &[Condition::DateOnOrBefore(DateField::Deprecation, 0)],
        DEPRECATION_COLUMNS,
    ),
    ReportDefinition::new(
        "deprecation_devices30",
        "Deprecation devices in 30",
        &[
            Condition::DateOnOrBefore(DateField::Deprecation, 30),
            Condition::DateOnOrAfter(DateField::Deprecation, 0),
        ],
        DEPRECATION_COLUMNS,
    ),
    ReportDefinition::new(
        "deprecation_devices60",
        "Deprecation devices in 60",
        &[
            Condition::DateOnOrBefore(DateField::Deprecation, 60),
            Condition::DateOnOrAfter(DateField::Deprecation, 0),
        ],
        DEPRECATION_COLUMNS,
    ),
    ReportDefinition::new(
        "deprecation_devices90",
        "Deprecation devices in 90",
        &[
            Condition::DateOnOrBefore(DateField::Deprecation, 90),
            Condition::DateOnOrAfter(DateField::Deprecation, 0),
        ],
        DEPRECATION_COLUMNS,
    ),
];

/// Entry of the report navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// ReportCatalog - fixed, ordered set of report definitions
///
/// Lookup is total: an absent, empty or unknown key resolves to the
/// default report instead of failing.
pub struct ReportCatalog;

impl ReportCatalog {
    /// Every report in declaration (menu) order
    pub fn all() -> &'static [ReportDefinition] {
        &REPORTS
    }

    /// Strict lookup by key
    pub fn find(key: &str) -> Option<&'static ReportDefinition> {
        REPORTS.iter().find(|report| report.key() == key)
    }

    /// Resolves a requested key, falling back to the default report
    pub fn lookup(key: Option<&str>) -> &'static ReportDefinition {
        key.and_then(Self::find)
            .unwrap_or_else(Self::default_report)
    }

    pub fn default_report() -> &'static ReportDefinition {
        &REPORTS[0]
    }

    /// `(key, label)` pairs for the navigation menu, with `selected` marked
    pub fn menu_items(selected: &ReportDefinition) -> Vec<MenuItem> {
        REPORTS
            .iter()
            .map(|report| MenuItem {
                key: report.key(),
                label: report.label(),
                selected: report.key() == selected.key(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_every_key() {
        for report in ReportCatalog::all() {
            assert_eq!(ReportCatalog::lookup(Some(report.key())).key(), report.key());
        }
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let default = ReportCatalog::lookup(None);
        assert_eq!(default.key(), DEFAULT_REPORT_KEY);
        assert_eq!(ReportCatalog::lookup(Some("")), default);
        assert_eq!(ReportCatalog::lookup(Some("nonexistent")), default);
        assert_eq!(ReportCatalog::lookup(Some("NO_PING1")), default);
    }

    #[test]
    fn test_default_report_is_first_entry() {
        assert_eq!(ReportCatalog::default_report().key(), "no_ping1");
        assert_eq!(ReportCatalog::all()[0].key(), DEFAULT_REPORT_KEY);
    }

    #[test]
    fn test_find_is_strict() {
        assert!(ReportCatalog::find("verified").is_some());
        assert!(ReportCatalog::find("").is_none());
        assert!(ReportCatalog::find("no_ping2").is_none());
    }

    #[test]
    fn test_declaration_order() {
        let keys: Vec<&str> = ReportCatalog::all().iter().map(|r| r.key()).collect();
        assert_eq!(
            keys,
            vec![
                "no_ping1",
                "no_ping3",
                "no_ping7",
                "no_purchase_date",
                "no_venture_role",
                "deactivated_support",
                "support_expires30",
                "support_expires60",
                "support_expires90",
                "verified",
                "deployment_open",
                "deployment_in_progress",
                "deployment_running",
                "deprecation_devices",
                "deprecation_devices30",
                "deprecation_devices60",
                "deprecation_devices90",
            ]
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = ReportCatalog::all().iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), ReportCatalog::all().len());
    }

    #[test]
    fn test_columns() {
        let columns = |key: &str| ReportCatalog::find(key).unwrap().column_keys();
        assert_eq!(
            columns("no_ping3"),
            vec!["venture", "position", "lastseen", "remarks"]
        );
        assert_eq!(
            columns("no_purchase_date"),
            vec!["venture", "position", "barcode", "cost", "price", "remarks"]
        );
        assert_eq!(
            columns("no_venture_role"),
            vec!["venture", "position", "barcode", "cost", "lastseen", "remarks"]
        );
        assert_eq!(
            columns("support_expires60"),
            vec!["venture", "position", "barcode", "price", "lastseen", "remarks", "support"]
        );
        assert_eq!(columns("deployment_running"), vec!["venture", "remarks"]);
        assert_eq!(
            columns("deprecation_devices"),
            vec!["venture", "purchase", "deprecation", "deprecation_date", "remarks"]
        );
    }

    #[test]
    fn test_one_sided_and_windowed_reports() {
        assert_eq!(
            ReportCatalog::find("deactivated_support").unwrap().conditions(),
            &[Condition::DateOnOrBefore(DateField::SupportExpiration, 0)]
        );
        assert_eq!(
            ReportCatalog::find("deprecation_devices90").unwrap().conditions(),
            &[
                Condition::DateOnOrBefore(DateField::Deprecation, 90),
                Condition::DateOnOrAfter(DateField::Deprecation, 0),
            ]
        );
    }

    #[test]
    fn test_menu_items_mark_selection() {
        let selected = ReportCatalog::find("verified").unwrap();
        let items = ReportCatalog::menu_items(selected);
        assert_eq!(items.len(), ReportCatalog::all().len());
        assert_eq!(items[0].key, "no_ping1");
        assert_eq!(items[0].label, "No ping since 1 day");
        let marked: Vec<&str> = items.iter().filter(|i| i.selected).map(|i| i.key).collect();
        assert_eq!(marked, vec!["verified"]);
    }
}
