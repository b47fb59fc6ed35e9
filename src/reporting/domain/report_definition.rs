use super::column::Column;
use super::condition::Condition;
use super::device::Device;
use chrono::NaiveDate;

/// A named, predefined device report.
///
/// Definitions are `'static` constants: built once in the catalog and never
/// mutated.
#[derive(Debug, PartialEq, Eq)]
pub struct ReportDefinition {
    key: &'static str,
    label: &'static str,
    conditions: &'static [Condition],
    columns: &'static [Column],
}

impl ReportDefinition {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        conditions: &'static [Condition],
        columns: &'static [Column],
    ) -> Self {
        Self {
            key,
            label,
            conditions,
            columns,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Label as shown in headings, e.g. "no ping since 1 day"
    pub fn display_label(&self) -> String {
        self.label.to_lowercase()
    }

    pub fn conditions(&self) -> &'static [Condition] {
        self.conditions
    }

    pub fn columns(&self) -> &'static [Column] {
        self.columns
    }

    pub fn column_keys(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::key).collect()
    }

    /// Applies the report predicate to a device collection.
    ///
    /// The result mirrors a relational join: a device appears once per
    /// combination of matching related rows, so callers that want one entry
    /// per device must deduplicate.
    pub fn apply<'a>(&self, devices: &'a [Device], today: NaiveDate) -> Vec<&'a Device> {
        devices
            .iter()
            .flat_map(|device| {
                let rows = self
                    .conditions
                    .iter()
                    .map(|condition| condition.matching_rows(device, today))
                    .product::<usize>();
                std::iter::repeat(device).take(rows)
            })
            .collect()
    }
}
